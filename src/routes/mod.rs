// src/routes/mod.rs
pub mod chat;

use std::sync::Arc;

use crate::config::Config;
use crate::state::{AppState, SharedState};
use axum::{
    Router,
    routing::{get, post},
};
use chat::{chat_handler, get_metrics_handler, health_handler, quick_actions_handler};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router(config: &Config) -> Router<SharedState> {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.cors_origins.clone()))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(get_metrics_handler))
        .route("/quick-actions", get(quick_actions_handler))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Router with its state attached, ready to serve.
pub fn build_app(config: Config) -> Router {
    let router = create_router(&config);
    router.with_state(Arc::new(AppState::new(config)))
}
