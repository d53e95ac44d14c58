pub mod bootstrap;
pub mod handlers;
pub mod models;

use axum::{
    Router,
    routing::{any, get},
};

use models::AppState;

/// Builds the application router. The session route accepts any method so the
/// handler itself can answer non-POST requests with a JSON 405 body.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::page_handler))
        .route("/api/chat", any(handlers::session_handler))
        .with_state(state)
}
