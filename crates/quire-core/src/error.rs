//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// Every variant is a store failure; "not found" is an `Ok(None)` lookup, never an error.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Rendering errors raised by a [`Renderer`](crate::ports::Renderer).
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Template rendering failed: {0}")]
    Render(String),
}
