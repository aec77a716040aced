//! Error types for the root index.

use strata_types::ResourceId;

/// Errors that can occur during root index operations.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// No storage object owns the given resource identifier.
    #[error("no root mapping for resource: {0}")]
    RootNotFound(ResourceId),

    /// A mapping already exists for the given resource identifier.
    #[error("root mapping already present for resource: {0}")]
    AlreadyMapped(ResourceId),
}

/// Convenience alias for index results.
pub type IndexResult<T> = Result<T, IndexError>;
