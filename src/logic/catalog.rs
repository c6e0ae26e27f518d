//! Category catalog: resolve a key to a definition (custom overrides first), list
//! categories and admin entries, and seed a fresh bracket.

use crate::logic::builder::{build, with_byes};
use crate::logic::engine::resolve_byes;
use crate::logic::seeding::{select_entrants, RandomSource};
use crate::models::{
    built_in, BracketDefinition, BracketError, BracketInstance, BracketSize, CustomBracketDefinition,
    BUILT_IN_BRACKETS,
};
use serde::Serialize;

/// Entry in the category picker.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

/// Where an admin listing entry comes from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    BuiltIn,
    /// Custom definition replacing a built-in; deleting it restores the built-in.
    Override,
    Custom,
}

/// Entry in the admin bracket list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BracketListing {
    pub id: String,
    pub name: String,
    pub size: BracketSize,
    pub options: Vec<String>,
    pub must_start: Vec<String>,
    pub kind: ListingKind,
}

/// A freshly seeded bracket, byes already resolved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SeededBracket {
    pub key: String,
    pub instance: BracketInstance,
    pub title: String,
    pub pool_description: String,
    /// Contenders that went through on a bye during seeding.
    pub auto_advanced: Vec<String>,
}

/// Custom definition with this id wins; then the built-in; unknown keys fall back to the
/// first built-in.
pub fn resolve_definition(key: &str, custom: &[CustomBracketDefinition]) -> BracketDefinition {
    if let Some(def) = custom.iter().find(|c| c.id == key) {
        return BracketDefinition::Custom(def.clone());
    }
    BracketDefinition::BuiltIn(built_in(key).unwrap_or(&BUILT_IN_BRACKETS[0]))
}

/// Built-ins in menu order (overrides relabel in place), then the remaining custom brackets.
pub fn category_options(custom: &[CustomBracketDefinition]) -> Vec<CategoryOption> {
    let built_ins = BUILT_IN_BRACKETS.iter().map(|b| {
        let label = custom
            .iter()
            .find(|c| c.id == b.key)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| b.label.to_string());
        CategoryOption {
            value: b.key.to_string(),
            label,
        }
    });
    let extra = custom
        .iter()
        .filter(|c| built_in(&c.id).is_none())
        .map(|c| CategoryOption {
            value: c.id.clone(),
            label: c.name.clone(),
        });
    built_ins.chain(extra).collect()
}

/// Built-ins without an override, then every custom definition.
pub fn admin_listing(custom: &[CustomBracketDefinition]) -> Vec<BracketListing> {
    let built_ins = BUILT_IN_BRACKETS
        .iter()
        .filter(|b| !custom.iter().any(|c| c.id == b.key))
        .map(|b| BracketListing {
            id: b.key.to_string(),
            name: b.label.to_string(),
            size: b.size,
            options: b.options.iter().map(|s| s.to_string()).collect(),
            must_start: b.must_start.iter().map(|s| s.to_string()).collect(),
            kind: ListingKind::BuiltIn,
        });
    let customs = custom.iter().map(|c| BracketListing {
        id: c.id.clone(),
        name: c.name.clone(),
        size: c.size,
        options: c.options.clone(),
        must_start: c.must_start.clone(),
        kind: if built_in(&c.id).is_some() {
            ListingKind::Override
        } else {
            ListingKind::Custom
        },
    });
    built_ins.chain(customs).collect()
}

fn pool_description(size: BracketSize, picked: usize, pool: usize) -> String {
    match size {
        BracketSize::Ten => format!("Using {} of {}", picked, pool),
        other => format!("Using all {}", other),
    }
}

/// Seed a bracket from a definition: draw entrants, lay them out, resolve byes.
pub fn seed_definition<S: RandomSource + ?Sized>(
    definition: &BracketDefinition,
    rng: &mut S,
) -> Result<SeededBracket, BracketError> {
    let size = definition.size();
    let pool = definition.pool();
    let picks = select_entrants(&pool, size.entrants(), &definition.must_start(), rng)?;
    log::debug!(
        "Seeding {} (size {}) with {} of {} options",
        definition.key(),
        size,
        picks.len(),
        pool.len()
    );
    let pool_description = pool_description(size, picks.len(), pool.len());
    let instance = build(size, with_byes(size, picks));
    let resolved = resolve_byes(&instance);
    Ok(SeededBracket {
        key: definition.key().to_string(),
        instance: resolved.instance,
        title: definition.title(),
        pool_description,
        auto_advanced: resolved.auto_winners,
    })
}

/// Seed by category key, letting custom definitions override built-ins.
pub fn seed<S: RandomSource + ?Sized>(
    key: &str,
    custom: &[CustomBracketDefinition],
    rng: &mut S,
) -> Result<SeededBracket, BracketError> {
    seed_definition(&resolve_definition(key, custom), rng)
}
