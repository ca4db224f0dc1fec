//! Topic and resource entities plus the input DTOs that produce them.
//!
//! A `Topic` value is one immutable version row. The logical topic is the set
//! of all rows sharing an `id`; the current version is the row with the
//! highest `version`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{ResourceId, Timestamp, TopicId, Version};

// ---------------------------------------------------------------------------
// Resource type
// ---------------------------------------------------------------------------

pub const RESOURCE_TYPE_VIDEO: &str = "video";
pub const RESOURCE_TYPE_ARTICLE: &str = "article";
pub const RESOURCE_TYPE_PDF: &str = "pdf";

/// All valid resource types, in their stored form.
pub const VALID_RESOURCE_TYPES: &[&str] =
    &[RESOURCE_TYPE_VIDEO, RESOURCE_TYPE_ARTICLE, RESOURCE_TYPE_PDF];

/// Kind of material a resource points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Video,
    Article,
    Pdf,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Video => RESOURCE_TYPE_VIDEO,
            ResourceType::Article => RESOURCE_TYPE_ARTICLE,
            ResourceType::Pdf => RESOURCE_TYPE_PDF,
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            RESOURCE_TYPE_VIDEO => Ok(ResourceType::Video),
            RESOURCE_TYPE_ARTICLE => Ok(ResourceType::Article),
            RESOURCE_TYPE_PDF => Ok(ResourceType::Pdf),
            other => Err(CoreError::Validation(format!(
                "Invalid resource type '{}'. Valid types: {}",
                other,
                VALID_RESOURCE_TYPES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A resource pinned to one exact `(topic_id, topic_version)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: ResourceId,
    pub topic_id: TopicId,
    pub topic_version: Version,
    pub url: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One immutable version of a logical topic.
///
/// `subtopics` and `resources` are never persisted with the row; they are
/// filled in by reads (tree assembly, attachment lookup) or by the write that
/// produced this version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
    pub content: String,
    pub version: Version,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub parent_topic_id: Option<TopicId>,
    #[serde(default)]
    pub subtopics: Vec<Topic>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

// ---------------------------------------------------------------------------
// Input DTOs
// ---------------------------------------------------------------------------

/// A resource as submitted by a caller, before it is bound to a version.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewResource {
    pub url: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

/// Input for creating version 1 of a new logical topic.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTopic {
    pub name: String,
    pub content: String,
    pub parent_topic_id: Option<TopicId>,
    #[serde(default)]
    pub resources: Vec<NewResource>,
}

/// Input for deriving the next version of an existing topic.
///
/// An absent `content` carries the previous content forward. Resources are
/// never carried forward: only the batch given here is attached to the new
/// version.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicUpdate {
    pub content: Option<String>,
    pub resources: Option<Vec<NewResource>>,
}
