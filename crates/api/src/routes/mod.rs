pub mod health;
pub mod topic;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /topics                                  create
/// /topics/{id}                             current version, update
/// /topics/{id}/versions                    version history
/// /topics/{id}/versions/{version}          exact version
/// /topics/{id}/subtopics                   subtree
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/topics", topic::router())
}
