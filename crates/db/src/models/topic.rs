use sqlx::FromRow;
use topicforge_core::topic::Topic;
use topicforge_core::types::{Timestamp, TopicId, Version};

/// A row from the `topic` table.
#[derive(Debug, Clone, FromRow)]
pub struct TopicRow {
    pub id: TopicId,
    pub version: Version,
    pub name: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub parent_topic_id: Option<TopicId>,
}

impl From<TopicRow> for Topic {
    fn from(row: TopicRow) -> Self {
        Topic {
            id: row.id,
            name: row.name,
            content: row.content,
            version: row.version,
            created_at: row.created_at,
            updated_at: row.updated_at,
            parent_topic_id: row.parent_topic_id,
            subtopics: Vec::new(),
            resources: Vec::new(),
        }
    }
}
