//! Input validation for topic and resource writes.
//!
//! Every check here runs before the first storage call of an operation, so a
//! rejected request never leaves a partial write behind.

use crate::error::CoreError;
use crate::topic::{NewResource, NewTopic};

/// Validate a topic name: anything but empty or whitespace-only.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Topic name cannot be empty".into()));
    }
    Ok(())
}

/// Validate topic content: anything but empty or whitespace-only.
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Topic content cannot be empty".into(),
        ));
    }
    Ok(())
}

/// Validate a single resource submission. The url is stored as given.
pub fn validate_resource(resource: &NewResource) -> Result<(), CoreError> {
    if resource.url.trim().is_empty() {
        return Err(CoreError::Validation("Resource url cannot be empty".into()));
    }
    Ok(())
}

/// Validate a batch of resource submissions, stopping at the first failure.
pub fn validate_resources(resources: &[NewResource]) -> Result<(), CoreError> {
    resources.iter().try_for_each(validate_resource)
}

/// Validate everything a topic creation needs before touching storage.
pub fn validate_new_topic(input: &NewTopic) -> Result<(), CoreError> {
    validate_name(&input.name)?;
    validate_content(&input.content)?;
    validate_resources(&input.resources)
}
