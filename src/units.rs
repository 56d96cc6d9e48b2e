//! # Unit Canonicalization Module
//!
//! This module provides the static table mapping raw unit-of-measurement
//! spellings to canonical unit symbols (e.g. "tablespoons" → "tbsp").
//!
//! Lookups are verbatim: no case folding, no whitespace normalization, no
//! fuzzy matching. The unit vocabulary of recipe text is small and closed,
//! so spelling variants outside the curated table simply miss. That is a
//! known limitation, not a defect to paper over at lookup time.

use std::collections::HashMap;
use std::fs;
use tracing::{info, warn};

/// Fallback unit symbol used when no measurable unit is detected ("single")
pub const SINGLE_SERVING: &str = "s";

/// Static table mapping raw unit spellings to canonical symbols
#[derive(Debug, Clone)]
pub struct UnitTable {
    entries: HashMap<String, String>,
}

impl UnitTable {
    /// Build a table from (raw spelling, canonical symbol) pairs
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(raw, canonical)| (raw.into(), canonical.into()))
                .collect(),
        }
    }

    /// Look up a token verbatim; returns the canonical symbol on a hit
    pub fn canonicalize(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    /// Number of raw spellings in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (raw spelling, canonical symbol) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(raw, canonical)| (raw.as_str(), canonical.as_str()))
    }
}

impl Default for UnitTable {
    /// The built-in curated table: mass and volume units in singular, plural
    /// and abbreviated spellings
    fn default() -> Self {
        Self::from_entries([
            // Teaspoon
            ("tsp", "tsp"),
            ("tsp.", "tsp"),
            ("teaspoon", "tsp"),
            ("teaspoons", "tsp"),
            ("tea spoon", "tsp"),
            ("tea spoons", "tsp"),
            // Tablespoon
            ("tbsp", "tbsp"),
            ("tbsp.", "tbsp"),
            ("tbsps", "tbsp"),
            ("tbsps.", "tbsp"),
            ("tablespoon", "tbsp"),
            ("tablespoons", "tbsp"),
            ("table spoon", "tbsp"),
            ("table spoons", "tbsp"),
            // Fluid ounce
            ("fluid ounce", "fl oz"),
            ("fluid ounces", "fl oz"),
            ("fl oz", "fl oz"),
            // Gill
            ("gill", "gill"),
            ("gills", "gill"),
            // Cup
            ("cup", "c"),
            ("cups", "c"),
            ("c", "c"),
            // Pint
            ("pint", "p"),
            ("pints", "p"),
            ("p", "p"),
            // Quart
            ("quart", "q"),
            ("quarts", "q"),
            ("q", "q"),
            // Gallon
            ("gallon", "gal"),
            ("gallons", "gal"),
            ("gal", "gal"),
            // Milliliter
            ("milliliter", "ml"),
            ("milliliters", "ml"),
            ("millilitre", "ml"),
            ("millilitres", "ml"),
            ("ml", "ml"),
            // Liter
            ("liter", "l"),
            ("liters", "l"),
            ("litre", "l"),
            ("litres", "l"),
            ("l", "l"),
            // Deciliter
            ("deciliter", "dl"),
            ("deciliters", "dl"),
            ("decilitre", "dl"),
            ("decilitres", "dl"),
            ("dl", "dl"),
            // Pound
            ("pound", "lb"),
            ("pounds", "lb"),
            ("lb", "lb"),
            // Ounce
            ("ounce", "oz"),
            ("ounces", "oz"),
            ("oz", "oz"),
            // Milligram
            ("milligram", "mg"),
            ("milligrams", "mg"),
            ("milligramme", "mg"),
            ("milligrammes", "mg"),
            ("mg", "mg"),
            // Gram
            ("gram", "g"),
            ("grams", "g"),
            ("gramme", "g"),
            ("grammes", "g"),
            ("g", "g"),
            // Kilogram
            ("kilogram", "kg"),
            ("kilograms", "kg"),
            ("kilogramme", "kg"),
            ("kilogrammes", "kg"),
            ("kg", "kg"),
        ])
    }
}

/// Load the unit table, preferring a JSON config file when one is provided
///
/// Resolution order: the `UNIT_TABLE_CONFIG_PATH` environment variable, then
/// conventional config paths, then the built-in table. The file format is a
/// flat JSON object of raw spelling → canonical symbol. The table is loaded
/// once at startup and never re-read during a run.
pub fn load_unit_table() -> UnitTable {
    if let Ok(config_path) = std::env::var("UNIT_TABLE_CONFIG_PATH") {
        match read_unit_table_file(&config_path) {
            Ok(table) => {
                info!(
                    path = %config_path,
                    entries = table.len(),
                    "Loaded unit table from environment-configured path"
                );
                return table;
            }
            Err(e) => {
                warn!(
                    path = %config_path,
                    error = %e,
                    "Failed to load unit table config; falling back to default paths"
                );
            }
        }
    }

    let possible_paths = [
        "config/unit_table.json",      // Local development path
        "/app/config/unit_table.json", // Container path
    ];

    for config_path in &possible_paths {
        if let Ok(table) = read_unit_table_file(config_path) {
            info!(
                path = %config_path,
                entries = table.len(),
                "Loaded unit table from fallback path"
            );
            return table;
        }
    }

    info!("Using built-in unit table");
    UnitTable::default()
}

fn read_unit_table_file(path: &str) -> anyhow::Result<UnitTable> {
    let content = fs::read_to_string(path)?;
    let entries: HashMap<String, String> = serde_json::from_str(&content)?;
    Ok(UnitTable { entries })
}
