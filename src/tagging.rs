//! # Tagger Boundary Module
//!
//! This module provides tokenization and part-of-speech tagging for raw
//! ingredient strings. The tag vocabulary of the external tagger is mapped
//! into a closed [`PosTag`] enumeration at this boundary, so raw tag strings
//! never leak into the classification logic.
//!
//! ## Features
//!
//! - Whitespace/punctuation word tokenization that keeps numeric tokens
//!   ("2.5", "1/2") and abbreviation dots ("tbsp.") intact
//! - A [`Tagger`] trait for whole-sequence tagging (one pass, parallel output)
//! - A unigram [`LexiconTagger`] backed by a word → tag lexicon loaded from a
//!   JSON file at startup

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Part-of-speech categories consumed by the token classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// Nouns, singular or plural
    Noun,
    /// Cardinal numbers, including fraction notation
    CardinalNumber,
    /// Adjectives
    Adjective,
    /// Everything else, including words missing from the lexicon
    Other,
}

impl PosTag {
    /// Map a raw tag from the external tagger vocabulary into the closed set.
    ///
    /// This is the only place raw tag strings are compared; unknown tags fall
    /// into the `Other` catch-all.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "NN" | "NNS" => PosTag::Noun,
            "CD" => PosTag::CardinalNumber,
            "JJ" => PosTag::Adjective,
            _ => PosTag::Other,
        }
    }
}

/// A tagged semantic unit of an ingredient string
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token text as it appeared in the input
    pub text: String,
    /// The part-of-speech category assigned by the tagger
    pub tag: PosTag,
}

/// Errors surfaced at the tagger boundary
#[derive(Debug, Clone, PartialEq)]
pub enum TaggingError {
    /// The tagger lexicon is missing or unreadable; fatal at startup
    LexiconUnavailable(String),
    /// The tagger returned a tag sequence that does not parallel its input
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for TaggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaggingError::LexiconUnavailable(msg) => {
                write!(f, "[TAGGER_INIT] Tagger lexicon unavailable: {}", msg)
            }
            TaggingError::LengthMismatch { expected, actual } => write!(
                f,
                "[TAGGER_OUTPUT] Tagger returned {} tags for {} tokens",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for TaggingError {}

lazy_static! {
    // Numbers keep embedded '.' and '/' ("2.5", "1/2" stay single tokens),
    // words keep a trailing abbreviation dot ("tbsp."), remaining punctuation
    // splits into standalone tokens.
    static ref TOKEN_REGEX: Regex = Regex::new(
        r"\d+(?:\.\d+)?(?:/\d+(?:\.\d+)?)?|[A-Za-z]+(?:'[A-Za-z]+)*\.?|[^\sA-Za-z0-9]"
    )
    .expect("token pattern should be valid");

    // Shape of a numeric token: digits with an optional decimal point or a
    // single fraction slash.
    static ref NUMERIC_SHAPE: Regex = Regex::new(r"^\d+(?:\.\d+)?(?:/\d+(?:\.\d+)?)?$")
        .expect("numeric shape pattern should be valid");
}

/// Split a raw ingredient string into word tokens
pub fn tokenize(raw: &str) -> Vec<String> {
    TOKEN_REGEX
        .find_iter(raw)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// A part-of-speech tagger over whole token sequences
///
/// Implementations tag every token in one pass and must return a sequence of
/// the same length and order as the input.
pub trait Tagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<Token>, TaggingError>;
}

/// Unigram tagger backed by a word → most-likely-tag lexicon
///
/// Each token is looked up independently; tokens with a numeric shape are
/// tagged as cardinal numbers without a lexicon entry, and unknown words fall
/// into the `Other` category.
pub struct LexiconTagger {
    lexicon: HashMap<String, String>,
}

impl LexiconTagger {
    /// Build a tagger from in-memory (word, raw tag) entries
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            lexicon: entries.into_iter().collect(),
        }
    }

    /// Load the lexicon from a JSON object file (`{"word": "TAG", ...}`)
    ///
    /// A missing or malformed file is a startup failure; the batch never runs
    /// without a tagger.
    pub fn from_json_file(path: &Path) -> Result<Self, TaggingError> {
        let content = fs::read_to_string(path).map_err(|e| {
            TaggingError::LexiconUnavailable(format!(
                "failed to read lexicon file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let lexicon: HashMap<String, String> = serde_json::from_str(&content).map_err(|e| {
            TaggingError::LexiconUnavailable(format!(
                "failed to parse lexicon file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(
            entries = lexicon.len(),
            path = %path.display(),
            "Tagger lexicon loaded"
        );

        Ok(Self { lexicon })
    }

    fn tag_one(&self, token: &str) -> PosTag {
        if NUMERIC_SHAPE.is_match(token) {
            return PosTag::CardinalNumber;
        }
        if let Some(raw) = self.lexicon.get(token) {
            return PosTag::from_raw(raw);
        }
        // Lexicons are usually lowercase; retry before giving up
        let lowered = token.to_lowercase();
        if let Some(raw) = self.lexicon.get(&lowered) {
            return PosTag::from_raw(raw);
        }
        PosTag::Other
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<Token>, TaggingError> {
        Ok(tokens
            .iter()
            .map(|text| Token {
                text: text.clone(),
                tag: self.tag_one(text),
            })
            .collect())
    }
}
