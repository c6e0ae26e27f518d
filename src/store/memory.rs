//! In-memory store (the local snapshot tier, and handy in tests).

use super::{upsert_into, CustomBracketStore, StoreError};
use crate::models::CustomBracketDefinition;
use chrono::Utc;

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    definitions: Vec<CustomBracketDefinition>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_definitions(definitions: Vec<CustomBracketDefinition>) -> Self {
        Self { definitions }
    }

    /// Overwrite the whole snapshot (mirroring an authoritative list).
    pub fn replace_all(&mut self, definitions: Vec<CustomBracketDefinition>) {
        self.definitions = definitions;
    }
}

impl CustomBracketStore for MemoryStore {
    fn list(&self) -> Result<Vec<CustomBracketDefinition>, StoreError> {
        Ok(self.definitions.clone())
    }

    fn upsert(&mut self, mut definition: CustomBracketDefinition) -> Result<(), StoreError> {
        if definition.updated_at.is_none() {
            definition.updated_at = Some(Utc::now());
        }
        upsert_into(&mut self.definitions, definition);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.definitions.len();
        self.definitions.retain(|d| d.id != id);
        if self.definitions.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
