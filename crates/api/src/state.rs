use topicforge_core::service::TopicService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the service holds its stores behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Topic lifecycle service over the configured stores.
    pub topics: TopicService,
}
