//! SQLite implementation of the domain store traits.

use async_trait::async_trait;
use topicforge_core::error::CoreError;
use topicforge_core::store::{ResourceStore, TopicStore};
use topicforge_core::topic::{Resource, Topic};
use topicforge_core::types::Version;

use crate::error::map_db_error;
use crate::repositories::{ResourceRepo, TopicRepo};
use crate::DbPool;

/// Topic and resource store over one shared connection pool.
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicStore for SqliteStore {
    async fn create(&self, topic: &Topic) -> Result<Topic, CoreError> {
        match TopicRepo::create(&self.pool, topic).await {
            Ok(row) => Ok(row.into()),
            Err(err) => {
                let err = map_db_error(err);
                if let CoreError::Conflict(msg) = &err {
                    tracing::warn!(
                        topic_id = %topic.id,
                        version = topic.version,
                        error = %msg,
                        "Topic version already exists"
                    );
                }
                Err(err)
            }
        }
    }

    async fn find_by_id(
        &self,
        id: &str,
        version: Option<Version>,
    ) -> Result<Option<Topic>, CoreError> {
        let row = match version {
            Some(v) => TopicRepo::find_by_id_and_version(&self.pool, id, v).await,
            None => TopicRepo::find_current(&self.pool, id).await,
        }
        .map_err(map_db_error)?;
        Ok(row.map(Topic::from))
    }

    async fn find_children(&self, parent_id: &str) -> Result<Vec<Topic>, CoreError> {
        let rows = TopicRepo::find_children(&self.pool, parent_id)
            .await
            .map_err(map_db_error)?;
        Ok(rows.into_iter().map(Topic::from).collect())
    }

    async fn list_versions(&self, id: &str) -> Result<Vec<Topic>, CoreError> {
        let rows = TopicRepo::list_versions(&self.pool, id)
            .await
            .map_err(map_db_error)?;
        Ok(rows.into_iter().map(Topic::from).collect())
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(map_db_error)
    }
}

#[async_trait]
impl ResourceStore for SqliteStore {
    async fn create(&self, resources: &[Resource]) -> Result<Vec<Resource>, CoreError> {
        let rows = ResourceRepo::create_batch(&self.pool, resources)
            .await
            .map_err(map_db_error)?;
        rows.into_iter().map(Resource::try_from).collect()
    }

    async fn find_by_topic_version(
        &self,
        topic_id: &str,
        topic_version: Version,
    ) -> Result<Vec<Resource>, CoreError> {
        let rows = ResourceRepo::list_for_topic_version(&self.pool, topic_id, topic_version)
            .await
            .map_err(map_db_error)?;
        rows.into_iter().map(Resource::try_from).collect()
    }
}
