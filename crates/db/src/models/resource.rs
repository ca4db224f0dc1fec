use sqlx::FromRow;
use topicforge_core::error::CoreError;
use topicforge_core::topic::{Resource, ResourceType};
use topicforge_core::types::{ResourceId, Timestamp, TopicId, Version};

/// A row from the `resource` table. `resource_type` is kept as stored text
/// and parsed on conversion.
#[derive(Debug, Clone, FromRow)]
pub struct ResourceRow {
    pub id: ResourceId,
    pub topic_id: TopicId,
    pub topic_version: Version,
    pub url: String,
    pub description: Option<String>,
    pub resource_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<ResourceRow> for Resource {
    type Error = CoreError;

    fn try_from(row: ResourceRow) -> Result<Self, Self::Error> {
        let resource_type: ResourceType = row.resource_type.parse().map_err(|_| {
            CoreError::Storage(format!(
                "Resource {} has unknown type '{}'",
                row.id, row.resource_type
            ))
        })?;
        Ok(Resource {
            id: row.id,
            topic_id: row.topic_id,
            topic_version: row.topic_version,
            url: row.url,
            description: row.description,
            resource_type,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
