//! Repository for the append-only `topic` table.

use sqlx::SqlitePool;
use topicforge_core::topic::Topic;
use topicforge_core::types::Version;

use crate::models::topic::TopicRow;

/// Column list for topic queries.
const COLUMNS: &str = "id, version, name, content, created_at, updated_at, parent_topic_id";

/// Insert and lookup operations for topic version rows. There is no update
/// or delete: a stored version is never changed.
pub struct TopicRepo;

impl TopicRepo {
    /// Insert one `(id, version)` row. Returns the row as stored.
    ///
    /// A duplicate `(id, version)` fails with a unique-constraint error.
    pub async fn create(pool: &SqlitePool, topic: &Topic) -> Result<TopicRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO topic
                (id, version, name, content, created_at, updated_at, parent_topic_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TopicRow>(&query)
            .bind(&topic.id)
            .bind(topic.version)
            .bind(&topic.name)
            .bind(&topic.content)
            .bind(topic.created_at)
            .bind(topic.updated_at)
            .bind(&topic.parent_topic_id)
            .fetch_one(pool)
            .await
    }

    /// Get the latest (highest version number) row for a topic.
    pub async fn find_current(
        pool: &SqlitePool,
        id: &str,
    ) -> Result<Option<TopicRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM topic
             WHERE id = ?1
             ORDER BY version DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, TopicRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a specific version of a topic.
    pub async fn find_by_id_and_version(
        pool: &SqlitePool,
        id: &str,
        version: Version,
    ) -> Result<Option<TopicRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM topic WHERE id = ?1 AND version = ?2");
        sqlx::query_as::<_, TopicRow>(&query)
            .bind(id)
            .bind(version)
            .fetch_optional(pool)
            .await
    }

    /// Current version of each direct child of `parent_id`, ordered by when
    /// each child was first inserted.
    pub async fn find_children(
        pool: &SqlitePool,
        parent_id: &str,
    ) -> Result<Vec<TopicRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM topic t
             WHERE t.parent_topic_id = ?1
               AND t.version = (SELECT MAX(v.version) FROM topic v WHERE v.id = t.id)
             ORDER BY (SELECT MIN(f.rowid) FROM topic f WHERE f.id = t.id)"
        );
        sqlx::query_as::<_, TopicRow>(&query)
            .bind(parent_id)
            .fetch_all(pool)
            .await
    }

    /// List every version of a topic, oldest first.
    pub async fn list_versions(
        pool: &SqlitePool,
        id: &str,
    ) -> Result<Vec<TopicRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM topic
             WHERE id = ?1
             ORDER BY version ASC"
        );
        sqlx::query_as::<_, TopicRow>(&query)
            .bind(id)
            .fetch_all(pool)
            .await
    }

    /// Count the stored versions of a topic.
    pub async fn count_versions(pool: &SqlitePool, id: &str) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM topic WHERE id = ?1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
