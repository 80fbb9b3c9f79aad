//! Application router

use axum::routing::get;
use axum::Router;

use crate::handlers::{health, projects};
use crate::state::AppState;

/// Builds the application router. Unsupported methods on a route get a
/// 405 with an `Allow` header from axum's method router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/v1/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .with_state(state)
}
