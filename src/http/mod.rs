//! HTTP surface: router assembly and shared state.

use std::path::PathBuf;

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

pub mod routes;

pub use routes::AppState;

/// Build the full application router.
pub fn router(state: AppState, static_dir: PathBuf) -> Router {
    Router::new()
        .route("/", get(routes::home).post(routes::enter_room))
        .route("/room/:id", get(routes::view_room))
        .route("/api/room-id", get(routes::suggest_room_id))
        .route("/healthz", get(routes::healthz))
        .route("/version", get(routes::version))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
