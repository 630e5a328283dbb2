//! Creation orchestration: conflict and existence checks ahead of the insert.

use crate::error::AppError;
use crate::models::{Console, Game};
use crate::service::{NewConsole, NewGame};
use crate::store;
use sqlx::SqlitePool;

pub struct CatalogService;

impl CatalogService {
    /// Create a console after checking the name is not already taken.
    pub async fn create_console(pool: &SqlitePool, new: &NewConsole) -> Result<Console, AppError> {
        if store::find_console_by_name(pool, &new.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "console '{}' already exists",
                new.name
            )));
        }
        map_unique_violation(store::create_console(pool, &new.name).await, || {
            format!("console '{}' already exists", new.name)
        })
    }

    /// Create a game after checking the title is free and the referenced
    /// console exists. The duplicate-title check runs first; a missing console
    /// is deliberately a conflict as well, not a not-found.
    pub async fn create_game(pool: &SqlitePool, new: &NewGame) -> Result<Game, AppError> {
        if store::find_game_by_title(pool, &new.title).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "game '{}' already exists",
                new.title
            )));
        }
        if store::find_console_by_id(pool, new.console_id).await?.is_none() {
            return Err(AppError::Conflict(format!(
                "console {} does not exist",
                new.console_id
            )));
        }
        map_unique_violation(store::create_game(pool, &new.title, new.console_id).await, || {
            format!("game '{}' already exists", new.title)
        })
    }
}

/// The checks above are not atomic with the insert; the UNIQUE constraints
/// catch whatever races past them, and still surface as the same conflict.
fn map_unique_violation<T>(
    result: Result<T, AppError>,
    message: impl FnOnce() -> String,
) -> Result<T, AppError> {
    match result {
        Err(AppError::Db(e))
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation()) =>
        {
            Err(AppError::Conflict(message()))
        }
        other => other,
    }
}
