//! Route definitions for versioned topics.
//!
//! Registered under `/topics`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::topic;
use crate::state::AppState;

/// Topic routes, registered as `/topics`.
///
/// ```text
/// POST   /                          create_topic
/// GET    /{id}                      get_topic
/// PATCH  /{id}                      update_topic
/// GET    /{id}/versions             list_versions
/// GET    /{id}/versions/{version}   get_version
/// GET    /{id}/subtopics            get_with_subtopics
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(topic::create_topic))
        .route("/{id}", get(topic::get_topic).patch(topic::update_topic))
        .route("/{id}/versions", get(topic::list_versions))
        .route("/{id}/versions/{version}", get(topic::get_version))
        .route("/{id}/subtopics", get(topic::get_with_subtopics))
}
