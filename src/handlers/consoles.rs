//! Console endpoints: create, list, get by id.

use crate::error::AppError;
use crate::service::{CatalogService, NewConsole};
use crate::state::AppState;
use crate::store;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

/// POST /consoles. The body is taken as raw JSON so a malformed or absent
/// body lands in the validator (422) instead of axum's extractor rejection.
pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let new = NewConsole::parse(body.as_ref().map(|Json(v)| v))?;
    let console = CatalogService::create_console(&state.pool, &new).await?;
    Ok((StatusCode::CREATED, Json(console)))
}

/// GET /consoles.
pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let consoles = store::list_consoles(&state.pool).await?;
    Ok(Json(consoles))
}

/// GET /consoles/:id.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let console = store::find_console_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("console {}", id)))?;
    Ok(Json(console))
}
