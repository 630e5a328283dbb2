//! Persistence gateway: pool construction, schema DDL, and the typed
//! create/find/list operations over consoles and games.
//!
//! Game reads compose the owning console with a second fetch rather than a SQL
//! join, so callers always get the same shape regardless of how the row was
//! obtained.

use crate::error::AppError;
use crate::models::{Console, Game, GameWithConsole};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open (or create) the database at `database_url` and return a pool.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Create the consoles and games tables if they do not exist.
///
/// Uniqueness of console names and game titles is enforced here with UNIQUE
/// constraints in addition to the pre-insert checks in the service layer, so
/// two racing creations cannot both land.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS consoles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS games (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL UNIQUE,
            console_id INTEGER NOT NULL REFERENCES consoles(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn create_console(pool: &SqlitePool, name: &str) -> Result<Console, AppError> {
    tracing::debug!(name = %name, "insert console");
    let console = sqlx::query_as::<_, Console>(
        "INSERT INTO consoles (name) VALUES (?) RETURNING id, name",
    )
    .bind(name)
    .fetch_one(pool)
    .await?;
    Ok(console)
}

pub async fn find_console_by_name(
    pool: &SqlitePool,
    name: &str,
) -> Result<Option<Console>, AppError> {
    let console = sqlx::query_as::<_, Console>("SELECT id, name FROM consoles WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(console)
}

pub async fn find_console_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Console>, AppError> {
    let console = sqlx::query_as::<_, Console>("SELECT id, name FROM consoles WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(console)
}

pub async fn list_consoles(pool: &SqlitePool) -> Result<Vec<Console>, AppError> {
    let consoles = sqlx::query_as::<_, Console>("SELECT id, name FROM consoles")
        .fetch_all(pool)
        .await?;
    Ok(consoles)
}

pub async fn create_game(
    pool: &SqlitePool,
    title: &str,
    console_id: i64,
) -> Result<Game, AppError> {
    tracing::debug!(title = %title, console_id, "insert game");
    let game = sqlx::query_as::<_, Game>(
        "INSERT INTO games (title, console_id) VALUES (?, ?) RETURNING id, title, console_id",
    )
    .bind(title)
    .bind(console_id)
    .fetch_one(pool)
    .await?;
    Ok(game)
}

pub async fn find_game_by_title(pool: &SqlitePool, title: &str) -> Result<Option<Game>, AppError> {
    let game =
        sqlx::query_as::<_, Game>("SELECT id, title, console_id FROM games WHERE title = ?")
            .bind(title)
            .fetch_optional(pool)
            .await?;
    Ok(game)
}

/// Fetch one game with its owning console composed in.
pub async fn find_game_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<GameWithConsole>, AppError> {
    let game = sqlx::query_as::<_, Game>("SELECT id, title, console_id FROM games WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    match game {
        Some(game) => {
            let console = owning_console(pool, game.console_id).await?;
            Ok(Some(GameWithConsole::compose(game, console)))
        }
        None => Ok(None),
    }
}

/// List all games, each with its owning console composed in.
pub async fn list_games(pool: &SqlitePool) -> Result<Vec<GameWithConsole>, AppError> {
    let games = sqlx::query_as::<_, Game>("SELECT id, title, console_id FROM games")
        .fetch_all(pool)
        .await?;
    let mut out = Vec::with_capacity(games.len());
    for game in games {
        let console = owning_console(pool, game.console_id).await?;
        out.push(GameWithConsole::compose(game, console));
    }
    Ok(out)
}

/// A persisted game always references an existing console; a miss here means
/// the store itself is inconsistent, which surfaces as a storage error.
async fn owning_console(pool: &SqlitePool, console_id: i64) -> Result<Console, AppError> {
    find_console_by_id(pool, console_id)
        .await?
        .ok_or(AppError::Db(sqlx::Error::RowNotFound))
}

#[cfg(test)]
pub(crate) async fn connect_in_memory() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    // A single connection so every query sees the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    ensure_schema(&pool).await.unwrap();
    pool
}
