//! Game endpoints: create, list, get by id. Reads embed the owning console.

use crate::error::AppError;
use crate::service::{CatalogService, NewGame};
use crate::state::AppState;
use crate::store;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

/// POST /games.
pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let new = NewGame::parse(body.as_ref().map(|Json(v)| v))?;
    let game = CatalogService::create_game(&state.pool, &new).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// GET /games.
pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let games = store::list_games(&state.pool).await?;
    Ok(Json(games))
}

/// GET /games/:id.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let game = store::find_game_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("game {}", id)))?;
    Ok(Json(game))
}
