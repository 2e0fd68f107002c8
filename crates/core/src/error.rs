use crate::types::EntityId;

/// Domain-level failures surfaced to the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    /// A referenced entity (e.g. a movie's director) does not exist.
    #[error("Referenced {entity} with id {id} does not exist")]
    MissingReference { entity: &'static str, id: EntityId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors raised by repository implementations.
///
/// Persistence backends translate their native errors into this type so the
/// use-case layer never depends on a specific driver.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RepoError {
    /// A uniqueness or referential constraint rejected the write.
    #[error("Constraint {constraint} violated: {message}")]
    Conflict { constraint: String, message: String },

    /// Any other storage failure (connection lost, malformed query, ...).
    #[error("Storage backend error: {0}")]
    Backend(String),
}
