//! Game record definitions.

use serde::{Deserialize, Serialize};

/// Upper bound of the review score scale.
pub const MAX_SCORE: f64 = 5.0;

/// Scores at or above this value earn a positive recommendation.
pub const RECOMMENDATION_THRESHOLD: f64 = 3.0;

/// A single game in the catalog.
///
/// Field names on disk follow the data file (`nombre`, `descripcion`,
/// `precio`, `puntuacion`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Display name, also the case-insensitive match key.
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion")]
    pub description: String,

    #[serde(rename = "precio")]
    pub price: f64,

    /// Review score from 0.0 to [`MAX_SCORE`].
    #[serde(rename = "puntuacion")]
    pub score: f64,
}

impl GameRecord {
    /// Create a new game record.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        score: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            score,
        }
    }

    /// Check if the score is high enough to recommend the game.
    pub fn is_recommended(&self) -> bool {
        self.score >= RECOMMENDATION_THRESHOLD
    }

    /// Check if the game's lower-cased name occurs anywhere in `text`.
    pub fn is_mentioned_in(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.name.to_lowercase())
    }
}
