pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::gateway::handlers::{handle_generate, handle_search};
use crate::prep::handlers::handle_prep;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Gateways
        .route("/api/generate", post(handle_generate))
        .route("/api/search", post(handle_search))
        // Prep form
        .route(
            "/api/prep",
            post(handle_prep).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .with_state(state)
}
