//! Parse-or-reject of raw creation payloads into typed values.
//!
//! Pure functions of the input body. An absent or non-object body is a
//! validation failure, the same as a missing field. Unknown fields are ignored.

use crate::error::AppError;
use serde_json::Value;

/// Validated console-creation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConsole {
    pub name: String,
}

impl NewConsole {
    pub fn parse(body: Option<&Value>) -> Result<Self, AppError> {
        let body = require_object(body)?;
        let name = require_string(body, "name")?;
        Ok(Self { name })
    }
}

/// Validated game-creation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    pub title: String,
    pub console_id: i64,
}

impl NewGame {
    pub fn parse(body: Option<&Value>) -> Result<Self, AppError> {
        let body = require_object(body)?;
        let title = require_string(body, "title")?;
        let console_id = require_positive_int(body, "consoleId")?;
        Ok(Self { title, console_id })
    }
}

fn require_object(body: Option<&Value>) -> Result<&serde_json::Map<String, Value>, AppError> {
    body.and_then(Value::as_object)
        .ok_or_else(|| AppError::Validation("body must be a JSON object".into()))
}

fn require_string(body: &serde_json::Map<String, Value>, field: &str) -> Result<String, AppError> {
    match body.get(field).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        Some(_) => Err(AppError::Validation(format!("{} must not be empty", field))),
        None => Err(AppError::Validation(format!(
            "{} is required and must be a string",
            field
        ))),
    }
}

fn require_positive_int(body: &serde_json::Map<String, Value>, field: &str) -> Result<i64, AppError> {
    match body.get(field).and_then(Value::as_i64) {
        Some(n) if n > 0 => Ok(n),
        Some(_) => Err(AppError::Validation(format!("{} must be positive", field))),
        None => Err(AppError::Validation(format!(
            "{} is required and must be an integer",
            field
        ))),
    }
}
