use crate::types::DbId;

/// Domain-level error taxonomy shared across the workspace.
///
/// The API layer maps each variant onto an HTTP status; see
/// `campus_api::error`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A downstream service call failed or timed out.
    ///
    /// Only surfaced directly for single-branch passthrough endpoints;
    /// aggregate endpoints recover branch failures locally.
    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
