//! In-memory topic and resource store.
//!
//! Implements both [`TopicStore`] and [`ResourceStore`] with the same
//! constraints the SQL schema enforces: `(id, version)` is unique, resource
//! ids are unique, and a resource must reference an existing topic version.
//! Used by tests and by the API test harness.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::store::{ResourceStore, TopicStore};
use crate::topic::{Resource, Topic};
use crate::types::{TopicId, Version};

#[derive(Debug, Default)]
struct Inner {
    /// Version rows per logical topic, ascending by version.
    versions: HashMap<TopicId, Vec<Topic>>,
    /// Parent id -> child ids, in first-creation order.
    children: HashMap<TopicId, Vec<TopicId>>,
    /// All resources in insertion order.
    resources: Vec<Resource>,
}

impl Inner {
    fn current(&self, id: &str) -> Option<&Topic> {
        self.versions.get(id).and_then(|rows| rows.last())
    }

    fn has_version(&self, id: &str, version: Version) -> bool {
        self.versions
            .get(id)
            .is_some_and(|rows| rows.iter().any(|t| t.version == version))
    }
}

/// Thread-safe in-memory store; cheap to share behind an `Arc`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of topic version rows.
    pub async fn num_topic_rows(&self) -> usize {
        self.inner.read().await.versions.values().map(Vec::len).sum()
    }

    /// Total number of resource rows.
    pub async fn num_resources(&self) -> usize {
        self.inner.read().await.resources.len()
    }
}

/// Strip transient fields so stored rows look like what a database returns.
fn as_row(topic: &Topic) -> Topic {
    Topic {
        subtopics: Vec::new(),
        resources: Vec::new(),
        ..topic.clone()
    }
}

#[async_trait]
impl TopicStore for InMemoryStore {
    async fn create(&self, topic: &Topic) -> Result<Topic, CoreError> {
        let mut inner = self.inner.write().await;
        if inner.has_version(&topic.id, topic.version) {
            return Err(CoreError::Conflict(format!(
                "Topic {} already has a version {}",
                topic.id, topic.version
            )));
        }

        let row = as_row(topic);
        let is_new = !inner.versions.contains_key(&topic.id);
        let rows = inner.versions.entry(topic.id.clone()).or_default();
        rows.push(row.clone());
        rows.sort_by_key(|t| t.version);

        if is_new {
            if let Some(parent) = &topic.parent_topic_id {
                inner
                    .children
                    .entry(parent.clone())
                    .or_default()
                    .push(topic.id.clone());
            }
        }
        Ok(row)
    }

    async fn find_by_id(
        &self,
        id: &str,
        version: Option<Version>,
    ) -> Result<Option<Topic>, CoreError> {
        let inner = self.inner.read().await;
        let found = match version {
            Some(v) => inner
                .versions
                .get(id)
                .and_then(|rows| rows.iter().find(|t| t.version == v)),
            None => inner.current(id),
        };
        Ok(found.cloned())
    }

    async fn find_children(&self, parent_id: &str) -> Result<Vec<Topic>, CoreError> {
        let inner = self.inner.read().await;
        let ids = match inner.children.get(parent_id) {
            Some(ids) => ids,
            None => return Ok(Vec::new()),
        };
        Ok(ids
            .iter()
            .filter_map(|id| inner.current(id).cloned())
            .collect())
    }

    async fn list_versions(&self, id: &str) -> Result<Vec<Topic>, CoreError> {
        let inner = self.inner.read().await;
        Ok(inner.versions.get(id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl ResourceStore for InMemoryStore {
    async fn create(&self, resources: &[Resource]) -> Result<Vec<Resource>, CoreError> {
        let mut inner = self.inner.write().await;

        // Check the whole batch before inserting anything.
        let mut seen: HashSet<&str> = inner.resources.iter().map(|r| r.id.as_str()).collect();
        for resource in resources {
            if !seen.insert(resource.id.as_str()) {
                return Err(CoreError::Conflict(format!(
                    "Resource {} already exists",
                    resource.id
                )));
            }
            if !inner.has_version(&resource.topic_id, resource.topic_version) {
                return Err(CoreError::Storage(format!(
                    "Topic {} has no version {}",
                    resource.topic_id, resource.topic_version
                )));
            }
        }

        inner.resources.extend_from_slice(resources);
        Ok(resources.to_vec())
    }

    async fn find_by_topic_version(
        &self,
        topic_id: &str,
        topic_version: Version,
    ) -> Result<Vec<Resource>, CoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .resources
            .iter()
            .filter(|r| r.topic_id == topic_id && r.topic_version == topic_version)
            .cloned()
            .collect())
    }
}
