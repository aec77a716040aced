use strata_types::ResourceId;

use crate::error::IndexResult;

/// Lookup boundary from a logical resource to its owning storage object.
///
/// Implementations must be thread-safe (`Send + Sync`). An ACL companion is
/// always owned by the same storage object as its base resource, so
/// `resolve_root` must answer identically for an identifier and its ACL.
pub trait RootIndex: Send + Sync {
    /// Resolve a resource identifier to its owning root identifier.
    ///
    /// Returns `IndexError::RootNotFound` if no storage object owns the
    /// resource.
    fn resolve_root(&self, resource_id: &ResourceId) -> IndexResult<ResourceId>;

    /// Record that `resource_id` is owned by the storage object rooted at
    /// `root_id`.
    ///
    /// Returns `IndexError::AlreadyMapped` if the resource already has a
    /// mapping; ownership never changes while a resource exists.
    fn add_mapping(&self, resource_id: &ResourceId, root_id: &ResourceId) -> IndexResult<()>;

    /// Remove the mapping for `resource_id`.
    ///
    /// Returns `true` if a mapping existed. Called by the surrounding
    /// session layer when a resource is purged.
    fn remove_mapping(&self, resource_id: &ResourceId) -> IndexResult<bool>;
}
