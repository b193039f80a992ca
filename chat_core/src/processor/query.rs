//! Per-request query values.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::intent::Intent;

/// Identifier of a single chat request, used to correlate log lines.
///
/// Queries are never linked to each other; there is no session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryId(pub Uuid);

impl QueryId {
    /// Create a new random query ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QueryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for QueryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user message, alive for one request/response cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatQuery {
    pub id: QueryId,
    pub raw_text: String,
}

impl ChatQuery {
    /// Wrap a raw message with a fresh ID.
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            id: QueryId::new(),
            raw_text: raw_text.into(),
        }
    }
}

/// Everything the pipeline derived from one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    /// Detected intents in token order, never empty.
    pub intents: Vec<Intent>,

    /// Recognized game names in catalog order.
    pub entities: Vec<String>,

    /// The reply sent back to the user.
    pub response: String,
}
