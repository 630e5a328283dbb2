//! Gamerack: REST backend managing game consoles and the games that run on them.

pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::{AppConfig, Environment};
pub use error::AppError;
pub use models::{Console, Game, GameWithConsole};
pub use state::AppState;
pub use store::{connect, ensure_schema};
pub use routes::app_router;
