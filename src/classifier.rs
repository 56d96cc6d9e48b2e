//! # Token Classification
//!
//! Buckets each tagged token of an ingredient string into exactly one of
//! {quantity contribution, unit, name component, detail component}, threading
//! the running parse state left to right.

use crate::numerals::parse_numeral;
use crate::parser::ParsedIngredient;
use crate::tagging::{PosTag, Token};
use crate::units::{UnitTable, SINGLE_SERVING};

/// Running parse state for a single ingredient string
#[derive(Debug, Default)]
pub struct ParseState {
    quantity: f64,
    unit: Option<String>,
    name: Vec<String>,
    details: Vec<String>,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one tagged token into the state.
    ///
    /// A raw-text unit-table hit takes precedence over the grammatical tag
    /// and consumes the token: it becomes the unit (overwriting any earlier
    /// one) and receives no other classification. Every other token lands in
    /// exactly one bucket.
    pub fn classify(&mut self, token: &Token, units: &UnitTable) {
        if let Some(symbol) = units.canonicalize(&token.text) {
            self.unit = Some(symbol.to_string());
            return;
        }

        match token.tag {
            PosTag::Noun => self.name.push(token.text.clone()),
            PosTag::CardinalNumber => match parse_numeral(&token.text) {
                Some(value) => self.quantity += value,
                // Unparseable numerals stay part of the name
                None => self.name.push(token.text.clone()),
            },
            PosTag::Adjective | PosTag::Other => self.details.push(token.text.clone()),
        }
    }

    /// Finalize the accumulated state into an immutable record
    pub fn finish(self) -> ParsedIngredient {
        ParsedIngredient {
            name: self.name.join(" "),
            quantity: self.quantity,
            unit: self.unit.unwrap_or_else(|| SINGLE_SERVING.to_string()),
            details: self.details,
        }
    }
}
