//! # CSV Export
//!
//! Writes the final ingredient index as CSV rows with a stable
//! `ingredient_name` column, one row per deduplicated ingredient in sorted
//! name order.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::batch::IngredientIndex;

/// Export the ingredient index to a CSV file; returns the row count
pub fn export_index_csv(path: &Path, index: &IngredientIndex) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV export file '{}'", path.display()))?;

    writer
        .write_record(["ingredient_name", "quantity", "unit", "details"])
        .context("Failed to write CSV header")?;

    for ingredient in index.values() {
        let quantity = ingredient.quantity.to_string();
        let details = ingredient.details.join("; ");
        writer
            .write_record([
                ingredient.name.as_str(),
                quantity.as_str(),
                ingredient.unit.as_str(),
                details.as_str(),
            ])
            .with_context(|| format!("Failed to write CSV row for '{}'", ingredient.name))?;
    }

    writer.flush().context("Failed to flush CSV export")?;

    info!(file = %path.display(), rows = index.len(), "CSV export written");
    Ok(index.len())
}
