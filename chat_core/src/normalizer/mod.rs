//! Normalizer - turns a raw message into lower-cased text and word tokens.
//!
//! The classifier and extractor only depend on the [`Normalizer`] trait, so
//! they can be exercised with the trivial [`WhitespaceNormalizer`] while the
//! server runs the punctuation-aware [`WordNormalizer`].

mod word;

pub use word::*;

use serde::{Deserialize, Serialize};

/// Output of a normalizer: the lower-cased message and its tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NormalizedQuery {
    /// Word-level tokens in message order.
    pub tokens: Vec<String>,

    /// The full message, lower-cased.
    pub text: String,
}

impl NormalizedQuery {
    /// Create a normalized query from already lower-cased parts.
    pub fn new(tokens: Vec<String>, text: impl Into<String>) -> Self {
        Self {
            tokens,
            text: text.into(),
        }
    }
}

/// Splits and lower-cases a raw user message.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str) -> NormalizedQuery;
}

/// Lower-case and split on whitespace, nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceNormalizer;

impl Normalizer for WhitespaceNormalizer {
    fn normalize(&self, text: &str) -> NormalizedQuery {
        let text = text.to_lowercase();
        let tokens = text.split_whitespace().map(str::to_string).collect();
        NormalizedQuery { tokens, text }
    }
}
