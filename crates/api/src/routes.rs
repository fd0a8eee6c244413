use crate::handlers;
use crate::pages;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/jobs", get(handlers::search_jobs))
        .route("/govt-links", get(handlers::get_govt_links))
        .route("/check-vpn", post(handlers::check_vpn))
        .route("/cache/stats", get(handlers::get_cache_stats))
        .with_state(state)
}

/// API under `/api`, named pages and the public directory as fallback.
pub fn create_app(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state))
        .merge(pages::page_routes(public_dir))
}
