//! # Batch Driver
//!
//! Drives the ingredient parser over whole recipe corpora: iterates the
//! ingredient strings of every recipe, accumulates parsed records into a
//! deduplicated index keyed by ingredient name, and reports per-file counts
//! and elapsed wall-clock time.
//!
//! A single malformed ingredient string never aborts the batch: tagging
//! failures are logged, counted and skipped.

use crate::corpus::{load_recipe_file, RecipeRecord};
use crate::parser::{IngredientParser, ParsedIngredient};
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Deduplicated parse results keyed by ingredient name, last write wins
pub type IngredientIndex = BTreeMap<String, ParsedIngredient>;

/// Per-file processing report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    /// Recipes with content that were parsed
    pub recipes_processed: usize,
    /// Empty records skipped
    pub recipes_skipped: usize,
    /// Ingredient strings successfully parsed
    pub ingredients_parsed: usize,
    /// Ingredient strings skipped on tagging failure
    pub parse_failures: usize,
    /// Wall-clock time spent on the file
    pub elapsed: Duration,
}

/// Whole-run counters across all input files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub files_processed: usize,
    pub recipes_processed: usize,
    pub recipes_skipped: usize,
    pub ingredients_parsed: usize,
    pub parse_failures: usize,
}

/// Sequentially processes recipes and owns the accumulated index
pub struct BatchDriver<'a> {
    parser: IngredientParser<'a>,
    index: IngredientIndex,
    summary: BatchSummary,
}

impl<'a> BatchDriver<'a> {
    pub fn new(parser: IngredientParser<'a>) -> Self {
        Self {
            parser,
            index: IngredientIndex::new(),
            summary: BatchSummary::default(),
        }
    }

    /// Parse every ingredient string of one recipe into the index
    ///
    /// Empty records are skipped and counted. Results are upserted keyed by
    /// ingredient name; a later occurrence of the same name overwrites the
    /// earlier one.
    pub fn process_recipe(&mut self, recipe: &RecipeRecord) {
        if recipe.is_empty() {
            self.summary.recipes_skipped += 1;
            return;
        }

        for raw in &recipe.ingredients {
            match self.parser.parse(raw) {
                Ok(parsed) => {
                    self.summary.ingredients_parsed += 1;
                    self.index.insert(parsed.name.clone(), parsed);
                }
                Err(err) => {
                    warn!(
                        error = %err,
                        ingredient = %raw,
                        recipe = %recipe.title,
                        "Skipping unparseable ingredient"
                    );
                    self.summary.parse_failures += 1;
                }
            }
        }

        self.summary.recipes_processed += 1;
    }

    /// Load one corpus file and process all of its recipes
    pub fn process_file(&mut self, path: &Path) -> Result<FileSummary> {
        let started = Instant::now();
        let before = self.summary.clone();

        let records = load_recipe_file(path)?;
        for record in records.values() {
            self.process_recipe(record);
        }

        self.summary.files_processed += 1;
        let summary = FileSummary {
            recipes_processed: self.summary.recipes_processed - before.recipes_processed,
            recipes_skipped: self.summary.recipes_skipped - before.recipes_skipped,
            ingredients_parsed: self.summary.ingredients_parsed - before.ingredients_parsed,
            parse_failures: self.summary.parse_failures - before.parse_failures,
            elapsed: started.elapsed(),
        };

        info!(
            file = %path.display(),
            recipes = summary.recipes_processed,
            skipped = summary.recipes_skipped,
            ingredients = summary.ingredients_parsed,
            failures = summary.parse_failures,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Corpus file processed"
        );

        Ok(summary)
    }

    /// The accumulated index so far
    pub fn index(&self) -> &IngredientIndex {
        &self.index
    }

    /// Whole-run counters so far
    pub fn summary(&self) -> &BatchSummary {
        &self.summary
    }

    /// Consume the driver, yielding the final index
    pub fn into_index(self) -> IngredientIndex {
        self.index
    }
}
