// Seed route handler

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::{db, error::SeedError, seed_data::SeedData, AppState};

pub const SUCCESS_MESSAGE: &str = "Database seeded successfully";

#[derive(Serialize)]
pub struct SeedResponse {
    message: &'static str,
}

// GET /seed - Drop, recreate and populate every table
pub async fn seed(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, SeedError> {
    db::seed_database(&state.connect_options, &SeedData::placeholder()).await?;

    Ok(Json(SeedResponse {
        message: SUCCESS_MESSAGE,
    }))
}
