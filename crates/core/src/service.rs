//! Topic lifecycle: creation, versioned updates and reads.
//!
//! [`TopicService`] is the only writer of topic rows. It validates input,
//! checks references, derives the next immutable version and persists it
//! through the store traits. Versions are only ever appended.

use std::sync::Arc;

use chrono::Utc;

use crate::error::CoreError;
use crate::store::{ResourceStore, TopicStore};
use crate::topic::{NewResource, NewTopic, Resource, Topic, TopicUpdate};
use crate::types::Version;
use crate::validation::{validate_content, validate_new_topic, validate_resources};
use crate::versioning::{first_version, next_version, stamp_resources};

/// Domain service over a topic store and a resource store.
///
/// Cheap to clone; both stores are shared behind `Arc`.
#[derive(Clone)]
pub struct TopicService {
    topics: Arc<dyn TopicStore>,
    resources: Arc<dyn ResourceStore>,
}

impl TopicService {
    pub fn new(topics: Arc<dyn TopicStore>, resources: Arc<dyn ResourceStore>) -> Self {
        Self { topics, resources }
    }

    /// Create version 1 of a new logical topic.
    ///
    /// Fails with `Validation` on blank name/content or a bad resource and
    /// with `NotFound` if `parent_topic_id` does not resolve. Nothing is
    /// written in either case.
    pub async fn create(&self, input: NewTopic) -> Result<Topic, CoreError> {
        validate_new_topic(&input)?;

        if let Some(parent_id) = &input.parent_topic_id {
            if self.topics.find_by_id(parent_id, None).await?.is_none() {
                return Err(CoreError::NotFound {
                    entity: "Parent topic",
                    id: parent_id.clone(),
                });
            }
        }

        let now = Utc::now();
        let mut created = self.topics.create(&first_version(&input, now)).await?;
        created.resources = self.attach(&created, &input.resources).await?;

        tracing::info!(
            topic_id = %created.id,
            parent_topic_id = ?created.parent_topic_id,
            resources = created.resources.len(),
            "Topic created"
        );
        Ok(created)
    }

    /// Append the next version of topic `id`.
    ///
    /// The new row is derived from the current one; the previous row is
    /// never modified. Resources given here are attached to the new version
    /// only. A concurrent update that claimed the same version number first
    /// surfaces as `Conflict`; it is not retried.
    pub async fn update(&self, id: &str, update: TopicUpdate) -> Result<Topic, CoreError> {
        if let Some(content) = &update.content {
            validate_content(content)?;
        }
        let batch = update.resources.unwrap_or_default();
        validate_resources(&batch)?;

        let current = self
            .topics
            .find_by_id(id, None)
            .await?
            .ok_or_else(|| CoreError::topic_not_found(id, None))?;

        let next = next_version(&current, update.content, Utc::now())?;
        let mut created = self.topics.create(&next).await?;
        created.resources = self.attach(&created, &batch).await?;

        tracing::info!(
            topic_id = %created.id,
            version = created.version,
            resources = created.resources.len(),
            "Topic version created"
        );
        Ok(created)
    }

    /// The current version of `id`, with its resources.
    pub async fn get_current(&self, id: &str) -> Result<Topic, CoreError> {
        let topic = self
            .topics
            .find_by_id(id, None)
            .await?
            .ok_or_else(|| CoreError::topic_not_found(id, None))?;
        self.with_resources(topic).await
    }

    /// Exactly version `version` of `id`, with its resources.
    pub async fn get_by_id_and_version(
        &self,
        id: &str,
        version: Version,
    ) -> Result<Topic, CoreError> {
        let topic = self
            .topics
            .find_by_id(id, Some(version))
            .await?
            .ok_or_else(|| CoreError::topic_not_found(id, Some(version)))?;
        self.with_resources(topic).await
    }

    /// Full version history of `id`, ascending by version.
    pub async fn list_versions(&self, id: &str) -> Result<Vec<Topic>, CoreError> {
        let versions = self.topics.list_versions(id).await?;
        if versions.is_empty() {
            return Err(CoreError::topic_not_found(id, None));
        }
        Ok(versions)
    }

    /// Current version of `id` with every descendant nested in `subtopics`.
    pub async fn get_by_id_with_subtopics(&self, id: &str) -> Result<Topic, CoreError> {
        self.topics
            .find_by_id_with_subtopics(id)
            .await?
            .ok_or_else(|| CoreError::topic_not_found(id, None))
    }

    pub async fn health_check(&self) -> Result<(), CoreError> {
        self.topics.health_check().await
    }

    async fn attach(
        &self,
        topic: &Topic,
        batch: &[NewResource],
    ) -> Result<Vec<Resource>, CoreError> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }
        let stamped = stamp_resources(topic, batch, Utc::now());
        let created = self.resources.create(&stamped).await?;
        tracing::info!(
            topic_id = %topic.id,
            version = topic.version,
            count = created.len(),
            "Resources attached"
        );
        Ok(created)
    }

    async fn with_resources(&self, mut topic: Topic) -> Result<Topic, CoreError> {
        topic.resources = self
            .resources
            .find_by_topic_version(&topic.id, topic.version)
            .await?;
        Ok(topic)
    }
}
