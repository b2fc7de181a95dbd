use axum::routing::post;
use axum::Router;

use crate::handler::{calculate_trajectory, AppState};

/// Build the application router. One endpoint; malformed bodies are rejected
/// by the JSON extractor before the handler runs.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate/trajectory", post(calculate_trajectory))
        .with_state(state)
}
