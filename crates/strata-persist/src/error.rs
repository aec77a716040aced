//! Error types for the persistence core.

use strata_types::{OperationKind, ResourceId};

/// Errors that can occur while persisting a resource operation.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Session read/write failure, propagated unchanged and never retried.
    #[error("storage access failure: {0}")]
    StorageAccess(#[from] strata_store::StoreError),

    /// Root resolution through the index failed.
    #[error("root resolution failure: {0}")]
    RootResolution(#[from] strata_index::IndexError),

    /// ACL path derivation requires the parent's header, which is absent.
    #[error("cannot derive ACL path: no header for parent resource {0}")]
    MissingParentHeader(ResourceId),

    /// An update targeted a resource with no existing header. This is a
    /// caller sequencing bug, never silently defaulted.
    #[error("update of {0} found no prior header")]
    MissingPriorHeader(ResourceId),

    /// The resource does not belong to the storage object it was persisted
    /// against.
    #[error("resource {resource} is not owned by storage object rooted at {root}")]
    OutsideObject {
        resource: ResourceId,
        root: ResourceId,
    },

    /// The operation is structurally invalid (e.g. a create with no create
    /// data).
    #[error("malformed operation: {0}")]
    MalformedOperation(String),

    /// This layer does not persist the given operation kind.
    #[error("operation kind {0} is not persisted by this layer")]
    UnsupportedOperation(OperationKind),
}

/// Convenience alias for persistence results.
pub type PersistResult<T> = Result<T, PersistError>;
