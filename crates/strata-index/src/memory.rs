//! In-memory root index for testing and ephemeral use.

use std::collections::HashMap;
use std::sync::RwLock;

use strata_types::ResourceId;
use tracing::debug;

use crate::error::{IndexError, IndexResult};
use crate::traits::RootIndex;

/// An in-memory implementation of [`RootIndex`].
///
/// All mappings live in a `HashMap` behind a `RwLock` and are keyed by the
/// base identifier, so a resource and its ACL companion always resolve to
/// the same root. Data is lost when the index is dropped.
pub struct InMemoryRootIndex {
    roots: RwLock<HashMap<ResourceId, ResourceId>>,
}

impl InMemoryRootIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self {
            roots: RwLock::new(HashMap::new()),
        }
    }

    /// Number of mapped resources.
    pub fn len(&self) -> usize {
        self.roots.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no resources are mapped.
    pub fn is_empty(&self) -> bool {
        self.roots.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryRootIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl RootIndex for InMemoryRootIndex {
    fn resolve_root(&self, resource_id: &ResourceId) -> IndexResult<ResourceId> {
        let roots = self.roots.read().expect("lock poisoned");
        roots
            .get(&resource_id.base_id())
            .cloned()
            .ok_or_else(|| IndexError::RootNotFound(resource_id.clone()))
    }

    fn add_mapping(&self, resource_id: &ResourceId, root_id: &ResourceId) -> IndexResult<()> {
        let base = resource_id.base_id();
        let mut roots = self.roots.write().expect("lock poisoned");
        if roots.contains_key(&base) {
            return Err(IndexError::AlreadyMapped(base));
        }
        debug!(resource = %base, root = %root_id, "adding root mapping");
        roots.insert(base, root_id.clone());
        Ok(())
    }

    fn remove_mapping(&self, resource_id: &ResourceId) -> IndexResult<bool> {
        let mut roots = self.roots.write().expect("lock poisoned");
        Ok(roots.remove(&resource_id.base_id()).is_some())
    }
}

impl std::fmt::Debug for InMemoryRootIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRootIndex")
            .field("mappings", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rid(s: &str) -> ResourceId {
        ResourceId::new(s).unwrap()
    }

    #[test]
    fn add_and_resolve_mapping() {
        let index = InMemoryRootIndex::new();
        index.add_mapping(&rid("obj/a"), &rid("obj")).unwrap();

        let root = index.resolve_root(&rid("obj/a")).unwrap();
        assert_eq!(root, rid("obj"));
    }

    #[test]
    fn resolve_unmapped_is_not_found() {
        let index = InMemoryRootIndex::new();
        let err = index.resolve_root(&rid("ghost")).unwrap_err();
        assert!(matches!(err, IndexError::RootNotFound(_)));
    }

    #[test]
    fn root_maps_to_itself() {
        let index = InMemoryRootIndex::new();
        index.add_mapping(&rid("obj"), &rid("obj")).unwrap();
        assert_eq!(index.resolve_root(&rid("obj")).unwrap(), rid("obj"));
    }

    #[test]
    fn acl_resolves_through_base() {
        let index = InMemoryRootIndex::new();
        index.add_mapping(&rid("obj/a"), &rid("obj")).unwrap();

        let root = index.resolve_root(&rid("obj/a").acl()).unwrap();
        assert_eq!(root, rid("obj"));
    }

    #[test]
    fn duplicate_mapping_rejected() {
        let index = InMemoryRootIndex::new();
        index.add_mapping(&rid("obj/a"), &rid("obj")).unwrap();

        let err = index.add_mapping(&rid("obj/a"), &rid("other")).unwrap_err();
        assert!(matches!(err, IndexError::AlreadyMapped(_)));
        assert_eq!(index.resolve_root(&rid("obj/a")).unwrap(), rid("obj"));
    }

    #[test]
    fn remove_mapping() {
        let index = InMemoryRootIndex::new();
        index.add_mapping(&rid("obj/a"), &rid("obj")).unwrap();

        assert!(index.remove_mapping(&rid("obj/a")).unwrap());
        assert!(index.resolve_root(&rid("obj/a")).is_err());
        assert!(!index.remove_mapping(&rid("obj/a")).unwrap());
    }

    #[test]
    fn len_and_is_empty() {
        let index = InMemoryRootIndex::new();
        assert!(index.is_empty());

        index.add_mapping(&rid("obj"), &rid("obj")).unwrap();
        index.add_mapping(&rid("obj/a"), &rid("obj")).unwrap();
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn acl_and_base_share_one_mapping() {
        let index = InMemoryRootIndex::new();
        index.add_mapping(&rid("obj/a").acl(), &rid("obj")).unwrap();

        // The mapping is keyed by the base id.
        let err = index.add_mapping(&rid("obj/a"), &rid("obj")).unwrap_err();
        assert!(matches!(err, IndexError::AlreadyMapped(_)));
        assert_eq!(index.len(), 1);
    }
}
