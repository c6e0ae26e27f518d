//! Custom bracket validation: option lines, name, and must-start seeds.

use crate::models::{BracketError, BracketSize, CustomBracketDefinition};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Most seeds that can be forced into the first match.
pub const MAX_MUST_START: usize = 2;

/// Split pasted text into options: one per line, trimmed, blank lines dropped.
pub fn parse_option_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Require at least `size` distinct, non-blank options.
pub fn validate_options(size: BracketSize, lines: &[String]) -> Result<Vec<String>, BracketError> {
    let options: Vec<String> = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    let required = size.entrants();
    if options.len() < required {
        return Err(BracketError::TooFewOptions {
            required,
            provided: options.len(),
        });
    }
    for (i, option) in options.iter().enumerate() {
        if options[..i].contains(option) {
            return Err(BracketError::DuplicateOption(option.clone()));
        }
    }
    Ok(options)
}

/// Trimmed bracket name; blank names are rejected.
pub fn validate_name(name: &str) -> Result<String, BracketError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BracketError::MissingName);
    }
    Ok(name.to_string())
}

/// At most two distinct must-start seeds, each one of `options`.
pub fn validate_must_start(options: &[String], must_start: &[String]) -> Result<(), BracketError> {
    for (i, seed) in must_start.iter().enumerate() {
        if must_start[..i].contains(seed) {
            return Err(BracketError::DuplicateOption(seed.clone()));
        }
    }
    if must_start.len() > MAX_MUST_START {
        return Err(BracketError::TooManyMustStart {
            max: MAX_MUST_START,
            selected: must_start.len(),
        });
    }
    if let Some(missing) = must_start.iter().find(|m| !options.contains(m)) {
        return Err(BracketError::MustStartNotInOptions(missing.clone()));
    }
    Ok(())
}

/// Capacity-bounded toggle used while picking must-start seeds.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MustStartSelection {
    selected: Vec<String>,
}

impl MustStartSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deselect if selected, select if there is room. A third selection is ignored
    /// and `false` is returned.
    pub fn toggle(&mut self, option: &str) -> bool {
        if let Some(idx) = self.selected.iter().position(|s| s == option) {
            self.selected.remove(idx);
            return true;
        }
        if self.selected.len() >= MAX_MUST_START {
            return false;
        }
        self.selected.push(option.to_string());
        true
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn into_vec(self) -> Vec<String> {
        self.selected
    }
}

/// Fresh id for a new custom bracket.
pub fn generate_bracket_id() -> String {
    format!("custom-{}", Uuid::new_v4().simple())
}

/// Admin form contents before validation.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CustomBracketDraft {
    /// Present when editing an existing bracket or overriding a built-in.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub size: BracketSize,
    /// Options, one per line.
    pub options_text: String,
    #[serde(default)]
    pub must_start: Vec<String>,
}

impl CustomBracketDraft {
    /// Validate options, must-start seeds, and name (in that order, as the admin steps run).
    pub fn into_definition(self) -> Result<CustomBracketDefinition, BracketError> {
        let options = validate_options(self.size, &parse_option_lines(&self.options_text))?;
        let must_start: Vec<String> = self.must_start.iter().map(|m| m.trim().to_string()).collect();
        validate_must_start(&options, &must_start)?;
        let name = validate_name(&self.name)?;
        let id = self
            .id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(generate_bracket_id);
        Ok(CustomBracketDefinition {
            id,
            name,
            size: self.size,
            options,
            must_start,
            updated_at: None,
        })
    }
}
