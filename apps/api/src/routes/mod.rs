pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::generation::handlers as generation;
use crate::search::handlers as search;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Front-end assets; `/` resolves to index.html.
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/search", post(search::handle_search))
        .route("/api/generate", post(generation::handle_generate))
        .fallback_service(static_files)
        .with_state(state)
}
