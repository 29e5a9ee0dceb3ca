pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::enhancement::handlers::handle_enhance;
use crate::matching::handlers::handle_match;
use crate::state::AppState;

/// Uploads above this size are rejected before any processing.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/match", post(handle_match))
        .route("/enhance", post(handle_enhance))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
