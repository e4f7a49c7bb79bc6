// Error handling for the seeder

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Why a seeding run stopped
#[derive(Debug)]
pub enum SeedError {
    Connect(sqlx::Error),
    Statement {
        step: &'static str,
        source: sqlx::Error,
    },
    Hash(String),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Connect(err) => write!(f, "Failed to connect to database: {}", err),
            SeedError::Statement { step, source } => write!(f, "Failed to {}: {}", step, source),
            SeedError::Hash(msg) => write!(f, "Failed to hash password: {}", msg),
        }
    }
}

impl std::error::Error for SeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeedError::Connect(err) => Some(err),
            SeedError::Statement { source, .. } => Some(source),
            SeedError::Hash(_) => None,
        }
    }
}

// Every failure is reported the same way: 500 with the error text
impl IntoResponse for SeedError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// Extension trait tagging sqlx failures with the step that issued them
pub trait StepResultExt<T> {
    fn step(self, step: &'static str) -> Result<T, SeedError>;
}

impl<T> StepResultExt<T> for Result<T, sqlx::Error> {
    fn step(self, step: &'static str) -> Result<T, SeedError> {
        self.map_err(|source| SeedError::Statement { step, source })
    }
}
