//! # Recipe Importer
//!
//! An offline batch ETL tool that parses free-text recipe ingredient strings
//! (e.g. "2 1/2 cups chopped carrots") into structured records of quantity,
//! unit of measurement, ingredient name and descriptive details, and loads
//! them into PostgreSQL with an optional CSV export.

pub mod batch;
pub mod classifier;
pub mod config;
pub mod corpus;
pub mod db;
pub mod errors;
pub mod export;
pub mod numerals;
pub mod observability;
pub mod parser;
pub mod tagging;
pub mod units;

// Re-export types for easier access
pub use batch::{BatchDriver, BatchSummary, FileSummary, IngredientIndex};
pub use parser::{IngredientParser, ParsedIngredient};
pub use tagging::{LexiconTagger, PosTag, Tagger, TaggingError, Token};
pub use units::{UnitTable, SINGLE_SERVING};
