//! Bracket definitions: built-in categories and user-defined custom brackets.

use crate::models::bracket::BracketSize;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A built-in category. Lives in a `'static` table and is never mutated.
#[derive(Debug, Eq, PartialEq)]
pub struct BuiltInBracket {
    pub key: &'static str,
    pub label: &'static str,
    pub size: BracketSize,
    pub options: &'static [&'static str],
    pub must_start: &'static [&'static str],
}

/// A user-defined bracket. When `id` equals a built-in key it overrides that built-in.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CustomBracketDefinition {
    pub id: String,
    pub name: String,
    pub size: BracketSize,
    pub options: Vec<String>,
    #[serde(default)]
    pub must_start: Vec<String>,
    /// Set by the store on upsert.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// What seeding draws from: a built-in pool or a custom definition.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BracketDefinition {
    BuiltIn(&'static BuiltInBracket),
    Custom(CustomBracketDefinition),
}

impl BracketDefinition {
    /// Category key (built-in key or custom id).
    pub fn key(&self) -> &str {
        match self {
            BracketDefinition::BuiltIn(b) => b.key,
            BracketDefinition::Custom(c) => &c.id,
        }
    }

    pub fn size(&self) -> BracketSize {
        match self {
            BracketDefinition::BuiltIn(b) => b.size,
            BracketDefinition::Custom(c) => c.size,
        }
    }

    pub fn pool(&self) -> Vec<String> {
        match self {
            BracketDefinition::BuiltIn(b) => b.options.iter().map(|s| s.to_string()).collect(),
            BracketDefinition::Custom(c) => c.options.clone(),
        }
    }

    pub fn must_start(&self) -> Vec<String> {
        match self {
            BracketDefinition::BuiltIn(b) => b.must_start.iter().map(|s| s.to_string()).collect(),
            BracketDefinition::Custom(c) => c.must_start.clone(),
        }
    }

    /// Heading shown above the bracket.
    pub fn title(&self) -> String {
        match self {
            BracketDefinition::BuiltIn(b) => format!("Top {} Bracket", b.size),
            BracketDefinition::Custom(c) => c.name.clone(),
        }
    }
}
