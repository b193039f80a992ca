//! Query Processor - runs the whole interpretation pipeline for one message.
//!
//! The pipeline works as follows:
//! 1. **Normalize**: lower-case the message and split it into tokens
//! 2. **Classify**: map tokens to intents, defaulting to greeting
//! 3. **Extract**: find catalog game names in the normalized text
//! 4. **Respond**: pick one reply template by fixed priority

mod query;

pub use query::*;

use std::sync::Arc;

use game_catalog::Catalog;

use crate::entity::extract;
use crate::intent::classify;
use crate::normalizer::{Normalizer, WordNormalizer};
use crate::response::respond;

/// Turns raw messages into replies against a shared, read-only catalog.
///
/// Holds no per-query state: the same message against the same catalog
/// always yields the same reply.
pub struct QueryProcessor {
    catalog: Arc<Catalog>,
    normalizer: Box<dyn Normalizer>,
}

impl QueryProcessor {
    /// Create a processor over `catalog` using the given normalizer.
    pub fn new(catalog: Arc<Catalog>, normalizer: impl Normalizer + 'static) -> Self {
        Self {
            catalog,
            normalizer: Box::new(normalizer),
        }
    }

    /// Create a processor using the punctuation-aware [`WordNormalizer`].
    pub fn with_word_normalizer(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, WordNormalizer)
    }

    /// The catalog this processor answers from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the pipeline and keep every intermediate result.
    pub fn interpret(&self, raw_text: &str) -> Interpretation {
        let normalized = self.normalizer.normalize(raw_text);

        let intents = classify(&normalized.tokens);
        let entities = extract(&normalized.text, &self.catalog);
        let response = respond(&intents, &entities, &self.catalog);

        tracing::debug!(?intents, ?entities, "query interpreted");

        Interpretation {
            intents,
            entities,
            response,
        }
    }

    /// Reply to a raw message.
    pub fn process(&self, raw_text: &str) -> String {
        self.interpret(raw_text).response
    }

    /// Reply to a [`ChatQuery`], tagging log output with its ID.
    pub fn process_query(&self, query: &ChatQuery) -> String {
        let span = tracing::debug_span!("query", id = %query.id);
        let _guard = span.enter();
        self.process(&query.raw_text)
    }
}

impl std::fmt::Debug for QueryProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryProcessor")
            .field("games", &self.catalog.len())
            .finish_non_exhaustive()
    }
}
