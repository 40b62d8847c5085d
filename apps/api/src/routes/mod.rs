pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::planner::{handlers, page};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::handle_index))
        .route("/health", get(health::health_handler))
        // Grid API
        .route("/api/v1/grid/process", post(handlers::handle_process_grid))
        // Legacy path used by the original mobile client
        .route("/processa-griglia", post(handlers::handle_process_grid))
        .with_state(state)
}
