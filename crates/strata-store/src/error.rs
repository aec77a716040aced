/// Errors from storage-object session operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No header exists at the requested path.
    #[error("no header at path: {0}")]
    HeaderNotFound(String),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for session operations.
pub type StoreResult<T> = Result<T, StoreError>;
