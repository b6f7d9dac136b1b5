pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::fortune::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(pages::index_handler))
        .route("/health", get(health::health_handler))
        // Fortune API
        .route("/api/fortune", post(handlers::handle_generate_fortune))
        .route(
            "/api/fortune-types",
            get(handlers::handle_list_fortune_types),
        )
        .nest_service("/static", static_files)
        .with_state(state)
}
