//! Route table for the fruit API.

use axum::routing::get;
use axum::Router;

use crate::handlers::{
    create_fruit, get_fruit, get_fruit_without_id, health, list_fruits, route_not_found,
};
use crate::state::AppState;

/// Build the application router over the given state.
///
/// | Method | Path          |
/// |--------|---------------|
/// | POST   | `/fruits`     |
/// | GET    | `/fruits`     |
/// | GET    | `/fruits/:id` |
/// | GET    | `/fruits/`    |
/// | GET    | `/health`     |
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/fruits", get(list_fruits).post(create_fruit))
        .route("/fruits/", get(get_fruit_without_id))
        .route("/fruits/:id", get(get_fruit))
        .route("/health", get(health))
        .fallback(route_not_found)
        .with_state(state)
}
