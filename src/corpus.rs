//! # Recipe Corpus Loading
//!
//! Reads raw recipe corpus files: JSON dictionaries keyed by arbitrary record
//! IDs, each value a recipe object. Only the `title` and `ingredients` fields
//! are consumed; everything else in a record is ignored.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One recipe record from a corpus file
///
/// Both fields default to empty so a bare `{}` deserializes to an empty
/// record instead of failing the whole file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecipeRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl RecipeRecord {
    /// True when the record carries no structured content
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.ingredients.is_empty()
    }
}

/// Load a corpus file into records keyed by ID, in stable key order
pub fn load_recipe_file(path: &Path) -> Result<BTreeMap<String, RecipeRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file '{}'", path.display()))?;

    let records: BTreeMap<String, RecipeRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse corpus file '{}'", path.display()))?;

    Ok(records)
}
