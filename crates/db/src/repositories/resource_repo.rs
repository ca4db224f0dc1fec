//! Repository for the `resource` table.

use sqlx::SqlitePool;
use topicforge_core::topic::Resource;
use topicforge_core::types::Version;

use crate::models::resource::ResourceRow;

/// Column list for resource queries.
const COLUMNS: &str = "id, topic_id, topic_version, url, description, resource_type, \
    created_at, updated_at";

/// Batch insert and per-version lookup for resources.
pub struct ResourceRepo;

impl ResourceRepo {
    /// Insert a batch of resources inside one transaction.
    ///
    /// If any insert fails the transaction is dropped without commit and no
    /// row of the batch is kept.
    pub async fn create_batch(
        pool: &SqlitePool,
        resources: &[Resource],
    ) -> Result<Vec<ResourceRow>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut results = Vec::with_capacity(resources.len());

        let query = format!(
            "INSERT INTO resource
                (id, topic_id, topic_version, url, description, resource_type,
                 created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             RETURNING {COLUMNS}"
        );

        for resource in resources {
            let row = sqlx::query_as::<_, ResourceRow>(&query)
                .bind(&resource.id)
                .bind(&resource.topic_id)
                .bind(resource.topic_version)
                .bind(&resource.url)
                .bind(&resource.description)
                .bind(resource.resource_type.as_str())
                .bind(resource.created_at)
                .bind(resource.updated_at)
                .fetch_one(&mut *tx)
                .await?;
            results.push(row);
        }

        tx.commit().await?;
        Ok(results)
    }

    /// Resources attached to one exact topic version, in insertion order.
    pub async fn list_for_topic_version(
        pool: &SqlitePool,
        topic_id: &str,
        topic_version: Version,
    ) -> Result<Vec<ResourceRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM resource
             WHERE topic_id = ?1 AND topic_version = ?2
             ORDER BY rowid ASC"
        );
        sqlx::query_as::<_, ResourceRow>(&query)
            .bind(topic_id)
            .bind(topic_version)
            .fetch_all(pool)
            .await
    }

    /// Count all resources attached to any version of a topic.
    pub async fn count_for_topic(pool: &SqlitePool, topic_id: &str) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM resource WHERE topic_id = ?1")
            .bind(topic_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
