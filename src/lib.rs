pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod seed_data;

use anyhow::Result;
use axum::{routing::get, Router};
use config::Config;
use sqlx::postgres::PgConnectOptions;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Application state
pub struct AppState {
    /// Parsed once; every request opens its own connection from these
    pub connect_options: PgConnectOptions,
}

// Public function to create the router
pub fn create_router(config: &Config) -> Result<Router> {
    let state = Arc::new(AppState {
        connect_options: config.connect_options()?,
    });

    Ok(router(state))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/seed", get(handlers::seed::seed))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
