//! Entity extraction - finding catalog game names inside a message.

use game_catalog::Catalog;

/// Names of every catalog game mentioned in `normalized_text`, in catalog order.
///
/// A game is mentioned when its lower-cased name occurs anywhere in the
/// text. There is no fuzzy or partial-name matching, and one message can
/// mention several games.
pub fn extract(normalized_text: &str, catalog: &Catalog) -> Vec<String> {
    catalog
        .iter()
        .filter(|game| game.is_mentioned_in(normalized_text))
        .map(|game| game.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_catalog::GameRecord;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            GameRecord::new("Zelda", "Adventure game", 60.0, 4.5),
            GameRecord::new("Mario Kart", "Racing game", 50.0, 4.2),
            GameRecord::new("Tetris", "Puzzle game", 10.0, 4.0),
        ])
    }

    #[test]
    fn test_extract_single_match() {
        assert_eq!(extract("cuanto cuesta zelda", &catalog()), ["Zelda"]);
    }

    #[test]
    fn test_extract_keeps_catalog_order() {
        let entities = extract("tetris o zelda?", &catalog());
        assert_eq!(entities, ["Zelda", "Tetris"]);
    }

    #[test]
    fn test_extract_multi_word_name() {
        assert_eq!(extract("me recomiendas mario kart", &catalog()), ["Mario Kart"]);
        assert!(extract("me recomiendas mario", &catalog()).is_empty());
    }

    #[test]
    fn test_extract_substring_inside_word() {
        // Plain substring test, no word boundaries.
        assert_eq!(extract("zeldas", &catalog()), ["Zelda"]);
    }

    #[test]
    fn test_extract_ignores_case_of_text() {
        assert_eq!(extract("ZELDA", &catalog()), ["Zelda"]);
    }

    #[test]
    fn test_extract_empty_catalog() {
        assert!(extract("zelda tetris mario kart", &Catalog::empty()).is_empty());
    }
}
