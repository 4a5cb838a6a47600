pub mod health;
pub mod plan;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Travel plan pipeline
        .route("/plan", get(plan::generate_plan))
        .with_state(state)
}
