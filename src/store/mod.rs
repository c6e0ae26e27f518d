//! Custom bracket persistence: a store trait plus in-memory, JSON-file, and two-tier
//! (remote with local fallback) implementations.

mod json_file;
mod memory;
mod tiered;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use tiered::TieredStore;

use crate::models::CustomBracketDefinition;

/// Errors from a custom bracket store.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreError {
    /// The store cannot be reached (e.g. no signed-in user for the remote tier).
    Unavailable(String),
    /// Reading or writing the backing storage failed.
    Io(String),
    /// Stored data could not be parsed.
    Corrupt(String),
    /// No definition with this id.
    NotFound(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(why) => write!(f, "Bracket store unavailable: {}", why),
            StoreError::Io(why) => write!(f, "Bracket store I/O error: {}", why),
            StoreError::Corrupt(why) => write!(f, "Bracket store data is corrupt: {}", why),
            StoreError::NotFound(id) => write!(f, "No custom bracket with id {}", id),
        }
    }
}

impl std::error::Error for StoreError {}

/// List, upsert, and delete custom bracket definitions keyed by id.
pub trait CustomBracketStore {
    fn list(&self) -> Result<Vec<CustomBracketDefinition>, StoreError>;

    /// Insert, or replace the definition with the same id.
    fn upsert(&mut self, definition: CustomBracketDefinition) -> Result<(), StoreError>;

    fn delete(&mut self, id: &str) -> Result<(), StoreError>;
}

impl<S: CustomBracketStore + ?Sized> CustomBracketStore for &mut S {
    fn list(&self) -> Result<Vec<CustomBracketDefinition>, StoreError> {
        (**self).list()
    }

    fn upsert(&mut self, definition: CustomBracketDefinition) -> Result<(), StoreError> {
        (**self).upsert(definition)
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        (**self).delete(id)
    }
}

/// Custom definitions for seeding and display. A failing store counts as empty so the
/// bracket engine keeps working on built-ins.
pub fn custom_definitions_or_empty<S: CustomBracketStore + ?Sized>(store: &S) -> Vec<CustomBracketDefinition> {
    match store.list() {
        Ok(definitions) => definitions,
        Err(e) => {
            log::warn!("Treating custom brackets as empty: {}", e);
            Vec::new()
        }
    }
}

/// Replace-or-append by id, keeping list order stable.
fn upsert_into(definitions: &mut Vec<CustomBracketDefinition>, definition: CustomBracketDefinition) {
    match definitions.iter_mut().find(|d| d.id == definition.id) {
        Some(existing) => *existing = definition,
        None => definitions.push(definition),
    }
}
