//! Intent classification by exact keyword matching.

use serde::{Deserialize, Serialize};

const INFORMATION_KEYWORDS: &[&str] = &["informacion", "detalles", "descripción", "trata", "de que va"];

const PRICE_KEYWORDS: &[&str] = &["precio", "costo", "cuesta", "gratis", "cuanto"];

const RECOMMENDATION_KEYWORDS: &[&str] = &[
    "recomendar",
    "recomiendas",
    "sugerir",
    "sugieres",
    "puntuacion",
    "esta chilo?",
];

const GREETING_KEYWORDS: &[&str] = &[
    "hola",
    "ola",
    "buenas tardes",
    "buenos dias",
    "buenas noches",
    "que tal",
];

/// What the user is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Information,
    Price,
    Recommendation,
    Greeting,
}

impl Intent {
    /// All intents, in the order each token is checked against them.
    pub const ALL: [Intent; 4] = [
        Intent::Information,
        Intent::Price,
        Intent::Recommendation,
        Intent::Greeting,
    ];

    /// Trigger words for this intent.
    ///
    /// Entries containing spaces only match a token that itself contains the
    /// space, which word tokenizers never produce.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Intent::Information => INFORMATION_KEYWORDS,
            Intent::Price => PRICE_KEYWORDS,
            Intent::Recommendation => RECOMMENDATION_KEYWORDS,
            Intent::Greeting => GREETING_KEYWORDS,
        }
    }

    /// Check if `token` is exactly one of this intent's trigger words.
    pub fn is_triggered_by(&self, token: &str) -> bool {
        self.keywords().contains(&token)
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Intent::Information => "information",
            Intent::Price => "price",
            Intent::Recommendation => "recommendation",
            Intent::Greeting => "greeting",
        };
        write!(f, "{}", name)
    }
}

/// Classify tokens into intents.
///
/// Every token is tested against every keyword list; each hit appends one
/// intent, so duplicates are kept in token order. When nothing matches the
/// result is `[Intent::Greeting]`, never empty.
pub fn classify<S: AsRef<str>>(tokens: &[S]) -> Vec<Intent> {
    let intents: Vec<Intent> = tokens
        .iter()
        .flat_map(|token| {
            Intent::ALL
                .into_iter()
                .filter(move |intent| intent.is_triggered_by(token.as_ref()))
        })
        .collect();

    if intents.is_empty() {
        vec![Intent::Greeting]
    } else {
        intents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_intents() {
        assert_eq!(classify(&["dame", "informacion"]), [Intent::Information]);
        assert_eq!(classify(&["cuesta"]), [Intent::Price]);
        assert_eq!(classify(&["me", "recomiendas"]), [Intent::Recommendation]);
        assert_eq!(classify(&["hola"]), [Intent::Greeting]);
    }

    #[test]
    fn test_defaults_to_greeting() {
        assert_eq!(classify(&["que", "es", "mario"]), [Intent::Greeting]);
        assert_eq!(classify::<&str>(&[]), [Intent::Greeting]);
    }

    #[test]
    fn test_keeps_token_order_and_duplicates() {
        let intents = classify(&["cuanto", "cuesta", "y", "detalles", "hola"]);
        assert_eq!(
            intents,
            [
                Intent::Price,
                Intent::Price,
                Intent::Information,
                Intent::Greeting
            ]
        );
    }

    #[test]
    fn test_exact_token_match_only() {
        // No stemming or substring matching.
        assert_eq!(classify(&["precios"]), [Intent::Greeting]);
        assert_eq!(classify(&["informacion?"]), [Intent::Greeting]);
        assert_eq!(classify(&["descripcion"]), [Intent::Greeting]);
        assert_eq!(classify(&["descripción"]), [Intent::Information]);
    }

    #[test]
    fn test_multi_word_keywords() {
        // Split tokens do not match a multi-word entry.
        assert_eq!(classify(&["de", "que", "va"]), [Intent::Greeting]);
        assert_eq!(classify(&["buenas", "tardes"]), [Intent::Greeting]);

        // Only a token that already contains the space does.
        assert_eq!(classify(&["de que va"]), [Intent::Information]);
        assert_eq!(classify(&["esta chilo?"]), [Intent::Recommendation]);
    }

    #[test]
    fn test_keyword_lists_do_not_overlap() {
        for (i, a) in Intent::ALL.iter().enumerate() {
            for b in &Intent::ALL[i + 1..] {
                assert!(a.keywords().iter().all(|k| !b.keywords().contains(k)));
            }
        }
    }

    #[test]
    fn test_intent_display() {
        assert_eq!(Intent::Recommendation.to_string(), "recommendation");
    }
}
