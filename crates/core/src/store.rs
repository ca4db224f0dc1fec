//! Storage seams for topic versions and resource attachments.
//!
//! The domain layer talks to persistence only through these traits. The
//! SQLite implementation lives in `topicforge-db`; [`InMemoryStore`] backs
//! tests and local tooling.
//!
//! [`InMemoryStore`]: crate::memory::InMemoryStore

use async_trait::async_trait;

use crate::error::CoreError;
use crate::topic::{Resource, Topic};
use crate::tree;
use crate::types::Version;

/// Durable storage and point lookups for topic version rows.
///
/// Rows are append-only: there is no update or delete. Absence is reported
/// as `Ok(None)` / an empty list, never as an error.
#[async_trait]
pub trait TopicStore: Send + Sync {
    /// Insert a new `(id, version)` row and return it as stored.
    ///
    /// A duplicate `(id, version)` must fail with [`CoreError::Conflict`].
    async fn create(&self, topic: &Topic) -> Result<Topic, CoreError>;

    /// Fetch one version, or the current (highest) version when `version`
    /// is `None`.
    async fn find_by_id(
        &self,
        id: &str,
        version: Option<Version>,
    ) -> Result<Option<Topic>, CoreError>;

    /// Current version of every direct child of `parent_id`, in the order the
    /// children were first created.
    async fn find_children(&self, parent_id: &str) -> Result<Vec<Topic>, CoreError>;

    /// Every version of one logical topic, ascending by version.
    async fn list_versions(&self, id: &str) -> Result<Vec<Topic>, CoreError>;

    /// Liveness probe for the backing store.
    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }

    /// Resolve the current version of `id` and materialize its subtree.
    async fn find_by_id_with_subtopics(&self, id: &str) -> Result<Option<Topic>, CoreError> {
        match self.find_by_id(id, None).await? {
            Some(root) => tree::assemble_subtree(self, root).await.map(Some),
            None => Ok(None),
        }
    }
}

/// Persistence for resources bound to exact topic versions.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Insert the whole batch atomically: either every row is stored or none.
    async fn create(&self, resources: &[Resource]) -> Result<Vec<Resource>, CoreError>;

    /// Resources attached to one exact topic version, in insertion order.
    async fn find_by_topic_version(
        &self,
        topic_id: &str,
        topic_version: Version,
    ) -> Result<Vec<Resource>, CoreError>;
}
