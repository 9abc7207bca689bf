pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod game;
pub mod models;
pub mod routes;
pub mod seed;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, db::Db};

/// Shared handler state. Nothing reads the database yet; the handle is held
/// for the upcoming daily game selection.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Db,
}

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/today-game", get(routes::today_game))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,cinemathisweek=debug,sqlx=warn".to_string()),
        )
        .init();
}
