//! The catalog - the ordered, read-only list of games the chatbot knows about.

mod loader;

pub use loader::*;

use serde::{Deserialize, Serialize};

use crate::record::GameRecord;

/// All games known to the chatbot, in file order.
///
/// Loaded once at startup and never mutated afterwards. Share it behind an
/// `Arc` rather than cloning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "productos")]
    products: Vec<GameRecord>,
}

impl Catalog {
    /// Create a catalog from records, keeping their order.
    pub fn new(products: Vec<GameRecord>) -> Self {
        Self { products }
    }

    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All records in catalog order.
    pub fn products(&self) -> &[GameRecord] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate over records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &GameRecord> {
        self.products.iter()
    }

    /// Find the first record, in catalog order, whose exact name is in `names`.
    ///
    /// The order of `names` does not matter.
    pub fn find_first_named(&self, names: &[String]) -> Option<&GameRecord> {
        self.products
            .iter()
            .find(|game| names.iter().any(|name| *name == game.name))
    }
}
