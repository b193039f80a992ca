//! Response generation - picks exactly one reply template per query.

use game_catalog::{Catalog, GameRecord, MAX_SCORE};

use crate::intent::Intent;

/// Reply when no catalog game was recognized.
pub const ASK_FOR_GAME: &str =
    "Estoy especializado en información de videojuegos. ¿Sobre qué juego quieres saber?";

/// Reply when the recognized names do not resolve to a catalog record.
pub const GAME_NOT_FOUND: &str = "Lo siento, no encontré información sobre ese juego.";

/// Reply to a greeting.
pub const GREETING: &str = "Hola buenas en que puedo ayudarte hoy?";

/// Build the reply for a classified query.
///
/// The checks form a single ordered chain and the first one that applies
/// wins:
///
/// 1. no entities -> [`ASK_FOR_GAME`], whatever the intents
/// 2. no catalog record named in `entities` -> [`GAME_NOT_FOUND`]
/// 3. information -> name and description
/// 4. price -> name and price
/// 5. recommendation -> positive or negative by score
/// 6. greeting -> [`GREETING`], even when a game was recognized
/// 7. otherwise -> a prompt naming the game
pub fn respond(intents: &[Intent], entities: &[String], catalog: &Catalog) -> String {
    if entities.is_empty() {
        return ASK_FOR_GAME.to_string();
    }

    let Some(game) = catalog.find_first_named(entities) else {
        return GAME_NOT_FOUND.to_string();
    };

    if intents.contains(&Intent::Information) {
        format!("Información de {}: {}", game.name, game.description)
    } else if intents.contains(&Intent::Price) {
        format!("El precio de {} es ${}", game.name, game.price)
    } else if intents.contains(&Intent::Recommendation) {
        recommendation(game)
    } else if intents.contains(&Intent::Greeting) {
        GREETING.to_string()
    } else {
        format!("Tengo información sobre {}. ¿Qué te gustaría saber?", game.name)
    }
}

fn recommendation(game: &GameRecord) -> String {
    if game.is_recommended() {
        format!(
            "Te recomiendo {} con una puntuación de {:.1}/{:.1}",
            game.name, game.score, MAX_SCORE
        )
    } else {
        format!(
            "No te recomiendo {} con una puntuacion de {:.1}/{:.1}",
            game.name, game.score, MAX_SCORE
        )
    }
}
