//! Persisted records and their JSON shapes.
//!
//! JSON field names follow the public API (`consoleId`, embedded `Console`),
//! while column names stay snake_case.

use serde::Serialize;
use sqlx::FromRow;

/// A gaming platform. `name` is unique across all consoles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Console {
    pub id: i64,
    pub name: String,
}

/// A game as stored: belongs to exactly one console. `title` is unique
/// globally, not per console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Game {
    pub id: i64,
    pub title: String,
    #[serde(rename = "consoleId")]
    pub console_id: i64,
}

/// A game with its owning console composed in, as returned by game reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameWithConsole {
    pub id: i64,
    pub title: String,
    #[serde(rename = "consoleId")]
    pub console_id: i64,
    #[serde(rename = "Console")]
    pub console: Console,
}

impl GameWithConsole {
    pub fn compose(game: Game, console: Console) -> Self {
        Self {
            id: game.id,
            title: game.title,
            console_id: game.console_id,
            console,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_serializes_with_api_field_names() {
        let v = serde_json::to_value(Game {
            id: 7,
            title: "Bloodborne".into(),
            console_id: 2,
        })
        .unwrap();
        assert_eq!(v, serde_json::json!({"id": 7, "title": "Bloodborne", "consoleId": 2}));
    }

    #[test]
    fn composed_game_embeds_console_under_capitalized_key() {
        let console = Console { id: 2, name: "PS4".into() };
        let game = Game { id: 7, title: "Bloodborne".into(), console_id: 2 };
        let v = serde_json::to_value(GameWithConsole::compose(game, console)).unwrap();
        assert_eq!(v["Console"], serde_json::json!({"id": 2, "name": "PS4"}));
        assert_eq!(v["consoleId"], 2);
    }
}
