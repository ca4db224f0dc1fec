use crate::types::Version;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A write collided with an existing row, e.g. two updates racing for the
    /// same `(id, version)` pair.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a missing topic, optionally pinned to one version.
    pub fn topic_not_found(id: &str, version: Option<Version>) -> Self {
        let id = match version {
            Some(v) => format!("{id} (version {v})"),
            None => id.to_string(),
        };
        CoreError::NotFound {
            entity: "Topic",
            id,
        }
    }

    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::NotFound { .. } => "NOT_FOUND",
            CoreError::Validation(_) => "VALIDATION_ERROR",
            CoreError::Conflict(_) => "CONFLICT",
            CoreError::Storage(_) => "STORAGE_ERROR",
            CoreError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
