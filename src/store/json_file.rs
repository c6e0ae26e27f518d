//! Store backed by one JSON file holding an array of definitions.

use super::{upsert_into, CustomBracketStore, StoreError};
use crate::models::CustomBracketDefinition;
use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Whole-file JSON store. A missing file reads as an empty list.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<CustomBracketDefinition>, StoreError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };
        serde_json::from_str(&text).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    fn write(&self, definitions: &[CustomBracketDefinition]) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| StoreError::Io(e.to_string()))?;
        }
        let text = serde_json::to_string_pretty(definitions).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        std::fs::write(&self.path, text).map_err(|e| StoreError::Io(e.to_string()))
    }
}

impl CustomBracketStore for JsonFileStore {
    fn list(&self) -> Result<Vec<CustomBracketDefinition>, StoreError> {
        self.read()
    }

    fn upsert(&mut self, mut definition: CustomBracketDefinition) -> Result<(), StoreError> {
        let mut definitions = self.read()?;
        definition.updated_at = Some(Utc::now());
        upsert_into(&mut definitions, definition);
        self.write(&definitions)
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let mut definitions = self.read()?;
        let before = definitions.len();
        definitions.retain(|d| d.id != id);
        if definitions.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.write(&definitions)
    }
}
