//! # Ingredient Parser
//!
//! Orchestrates the parse of one raw ingredient string: tokenize, tag every
//! token in a single pass, fold the tagged tokens through the classifier and
//! finalize the structured record.
//!
//! The parser owns no global state; its tagger and unit table are injected
//! collaborators, so parsing is a pure function of its input.
//!
//! ## Usage
//!
//! ```rust
//! use recipe_importer::parser::IngredientParser;
//! use recipe_importer::tagging::LexiconTagger;
//! use recipe_importer::units::UnitTable;
//!
//! let tagger = LexiconTagger::from_entries([
//!     ("flour".to_string(), "NN".to_string()),
//! ]);
//! let units = UnitTable::default();
//! let parser = IngredientParser::new(&tagger, &units);
//!
//! let parsed = parser.parse("2 cups flour").unwrap();
//! assert_eq!(parsed.name, "flour");
//! assert_eq!(parsed.quantity, 2.0);
//! assert_eq!(parsed.unit, "c");
//! ```

use crate::classifier::ParseState;
use crate::tagging::{tokenize, Tagger, TaggingError};
use crate::units::UnitTable;
use serde::{Deserialize, Serialize};

/// Structured result of parsing one ingredient string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Space-joined name tokens
    pub name: String,
    /// Accumulated quantity; 0 when the string carried no numeral
    pub quantity: f64,
    /// Canonical unit symbol, or the single-serving sentinel "s"
    pub unit: String,
    /// Descriptive tokens in encounter order
    pub details: Vec<String>,
}

/// Parses raw ingredient strings using an injected tagger and unit table
pub struct IngredientParser<'a> {
    tagger: &'a dyn Tagger,
    units: &'a UnitTable,
}

impl<'a> IngredientParser<'a> {
    pub fn new(tagger: &'a dyn Tagger, units: &'a UnitTable) -> Self {
        Self { tagger, units }
    }

    /// Parse one raw ingredient string into a structured record
    ///
    /// A tagger failure, including a tag sequence that does not parallel the
    /// token sequence, surfaces as a [`TaggingError`]; the caller skips the
    /// offending string and continues the batch.
    pub fn parse(&self, raw: &str) -> Result<ParsedIngredient, TaggingError> {
        let tokens = tokenize(raw);
        let tagged = self.tagger.tag(&tokens)?;
        if tagged.len() != tokens.len() {
            return Err(TaggingError::LengthMismatch {
                expected: tokens.len(),
                actual: tagged.len(),
            });
        }

        let mut state = ParseState::new();
        for token in &tagged {
            state.classify(token, self.units);
        }
        Ok(state.finish())
    }
}
