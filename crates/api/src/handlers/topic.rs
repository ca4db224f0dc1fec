//! Handlers for versioned topics.
//!
//! Thin adapters: extract, call [`TopicService`], wrap in [`DataResponse`].
//! All domain rules live in the service.
//!
//! [`TopicService`]: topicforge_core::service::TopicService

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use topicforge_core::topic::{NewTopic, TopicUpdate};
use topicforge_core::types::Version;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /topics
///
/// Create version 1 of a new topic, optionally under a parent and with an
/// initial resource batch.
pub async fn create_topic(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewTopic>,
) -> AppResult<impl IntoResponse> {
    let topic = state.topics.create(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: topic })))
}

/// GET /topics/{id}
///
/// The current version of a topic with its resources.
pub async fn get_topic(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> AppResult<impl IntoResponse> {
    let topic = state.topics.get_current(&id).await?;
    Ok(Json(DataResponse { data: topic }))
}

/// PATCH /topics/{id}
///
/// Append a new version. `content` and `resources` are both optional.
pub async fn update_topic(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(input): ApiJson<TopicUpdate>,
) -> AppResult<impl IntoResponse> {
    let topic = state.topics.update(&id, input).await?;
    Ok(Json(DataResponse { data: topic }))
}

/// GET /topics/{id}/versions
pub async fn list_versions(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> AppResult<impl IntoResponse> {
    let versions = state.topics.list_versions(&id).await?;
    Ok(Json(DataResponse { data: versions }))
}

/// GET /topics/{id}/versions/{version}
pub async fn get_version(
    State(state): State<AppState>,
    ApiPath((id, version)): ApiPath<(String, Version)>,
) -> AppResult<impl IntoResponse> {
    let topic = state.topics.get_by_id_and_version(&id, version).await?;
    Ok(Json(DataResponse { data: topic }))
}

/// GET /topics/{id}/subtopics
///
/// The current version of a topic with its whole subtree nested.
pub async fn get_with_subtopics(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> AppResult<impl IntoResponse> {
    let tree = state.topics.get_by_id_with_subtopics(&id).await?;
    Ok(Json(DataResponse { data: tree }))
}
