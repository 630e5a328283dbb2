//! Router construction.

use crate::handlers::{common, consoles, games};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/consoles", get(consoles::list).post(consoles::create))
        .route("/consoles/:id", get(consoles::get_by_id))
        .route("/games", get(games::list).post(games::create))
        .route("/games/:id", get(games::get_by_id))
        .route("/health", get(common::health))
        .route("/version", get(common::version))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
