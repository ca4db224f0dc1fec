//! Construction of topic version rows.
//!
//! These functions are the only place a `Topic` or `Resource` value is built
//! for writing. They never touch storage; the caller persists the result.

use crate::error::CoreError;
use crate::topic::{NewResource, NewTopic, Resource, Topic};
use crate::types::{new_id, Timestamp};

/// Build version 1 of a brand-new logical topic.
///
/// `created_at` and `updated_at` are both `now`. Resources are not included;
/// they are stamped separately once the row exists.
pub fn first_version(input: &NewTopic, now: Timestamp) -> Topic {
    Topic {
        id: new_id(),
        name: input.name.clone(),
        content: input.content.clone(),
        version: 1,
        created_at: now,
        updated_at: now,
        parent_topic_id: input.parent_topic_id.clone(),
        subtopics: Vec::new(),
        resources: Vec::new(),
    }
}

/// Derive the row that follows `current`.
///
/// Identity, name, parent and `created_at` are carried forward; `content`
/// falls back to the current content when `None`. Resources of `current` are
/// not copied. Fails with `Internal` once the version counter is exhausted.
pub fn next_version(
    current: &Topic,
    content: Option<String>,
    now: Timestamp,
) -> Result<Topic, CoreError> {
    let version = current.version.checked_add(1).ok_or_else(|| {
        CoreError::Internal(format!(
            "Topic {} has reached the maximum version {}",
            current.id, current.version
        ))
    })?;
    Ok(Topic {
        id: current.id.clone(),
        name: current.name.clone(),
        content: content.unwrap_or_else(|| current.content.clone()),
        version,
        created_at: current.created_at,
        updated_at: now,
        parent_topic_id: current.parent_topic_id.clone(),
        subtopics: Vec::new(),
        resources: Vec::new(),
    })
}

/// Bind a batch of submitted resources to one exact topic version.
pub fn stamp_resources(topic: &Topic, batch: &[NewResource], now: Timestamp) -> Vec<Resource> {
    batch
        .iter()
        .map(|r| Resource {
            id: new_id(),
            topic_id: topic.id.clone(),
            topic_version: topic.version,
            url: r.url.clone(),
            description: r.description.clone(),
            resource_type: r.resource_type,
            created_at: now,
            updated_at: now,
        })
        .collect()
}
