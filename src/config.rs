//! Environment-driven configuration.
//!
//! `APP_ENV` selects one of three environments; each loads its own dotenv file
//! before `DATABASE_URL` / `PORT` are read, so a test run never touches the
//! development database.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
    Test,
}

impl Environment {
    /// From `APP_ENV`. Anything other than `development` or `test` is production.
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV").as_deref() {
            Ok("development") => Environment::Development,
            Ok("test") => Environment::Test,
            _ => Environment::Production,
        }
    }

    pub fn dotenv_file(&self) -> &'static str {
        match self {
            Environment::Production => ".env",
            Environment::Development => ".env.development",
            Environment::Test => ".env.test",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Environment::Production => "production",
            Environment::Development => "development",
            Environment::Test => "test",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub database_url: String,
    pub port: u16,
}

impl AppConfig {
    /// Load the dotenv file for the current environment, then read settings.
    /// A missing dotenv file is fine; the process env alone may be complete.
    pub fn load() -> Self {
        let environment = Environment::from_env();
        dotenvy::from_filename(environment.dotenv_file()).ok();

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:gamerack.db".into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Self {
            environment,
            database_url,
            port,
        }
    }
}
