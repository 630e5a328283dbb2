//! Shared harness: one fresh database per test, plus fixture factories.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use gamerack::models::{Console, Game};
use gamerack::{app_router, connect, ensure_schema, AppState};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use std::sync::atomic::{AtomicU64, Ordering};
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    _dir: TempDir,
}

/// Open a throwaway database in a temp directory and mount the real router on
/// it. Dropping the returned value removes the database.
pub async fn spawn_app() -> TestApp {
    let dir = TempDir::new().expect("tempdir");
    let url = format!("sqlite:{}", dir.path().join("test.db").display());
    let pool = connect(&url).await.expect("connect");
    ensure_schema(&pool).await.expect("schema");
    let router = app_router(AppState { pool: pool.clone() });
    TestApp {
        router,
        pool,
        _dir: dir,
    }
}

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// A name/title that no other fixture in this process has used.
pub fn unique(prefix: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{} {}", prefix, n)
}

/// Insert a console directly, bypassing the HTTP layer.
pub async fn create_console(pool: &SqlitePool) -> Console {
    gamerack::store::create_console(pool, &unique("Console"))
        .await
        .expect("create console fixture")
}

/// Insert a game directly, bypassing the HTTP layer.
pub async fn create_game(pool: &SqlitePool, console_id: i64) -> Game {
    gamerack::store::create_game(pool, &unique("Game"), console_id)
        .await
        .expect("create game fixture")
}

pub async fn get(app: &TestApp, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    split(response).await
}

pub async fn post_json(
    app: &TestApp,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    split(response).await
}

/// POST with no body at all.
pub async fn post_empty(app: &TestApp, uri: &str) -> StatusCode {
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    response.status()
}

async fn split(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
