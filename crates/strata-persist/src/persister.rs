//! The resource persister: operation in, two deterministic writes out.

use std::sync::Arc;

use strata_index::RootIndex;
use strata_store::{ObjectSession, StoreError};
use strata_types::{OperationKind, ResourceHeader, ResourceId, ResourceOperation};
use tracing::debug;

use crate::error::{PersistError, PersistResult};
use crate::headers::build_header;
use crate::paths;

/// Persists create and update operations into a storage-object session.
///
/// Each persist call makes exactly two writes, in a fixed order: the
/// content bytes first, then the header referencing them. A reader that
/// observes a committed header is therefore guaranteed the content already
/// exists. Delete is rejected here; tombstoning is the surrounding session
/// layer's job.
///
/// The persister holds the root index only for [`persist_resolved`]; the
/// core [`persist`] takes an already-resolved root, so callers that batch
/// operations against one storage object resolve once.
///
/// At most one persist call may be in flight per session at a time.
///
/// [`persist`]: Self::persist
/// [`persist_resolved`]: Self::persist_resolved
pub struct ResourcePersister {
    index: Arc<dyn RootIndex>,
}

impl ResourcePersister {
    /// Create a persister backed by the given root index.
    pub fn new(index: Arc<dyn RootIndex>) -> Self {
        Self { index }
    }

    /// Resolve the operation's owning root through the index, then persist.
    pub fn persist_resolved(
        &self,
        session: &dyn ObjectSession,
        operation: &ResourceOperation,
    ) -> PersistResult<ResourceHeader> {
        let root_id = self.index.resolve_root(&operation.resource_id)?;
        self.persist(session, operation, &root_id)
    }

    /// Persist one operation into the storage object rooted at `root_id`.
    ///
    /// Any session failure aborts immediately; writes already made are left
    /// for the outer transaction manager to commit or roll back atomically.
    pub fn persist(
        &self,
        session: &dyn ObjectSession,
        operation: &ResourceOperation,
        root_id: &ResourceId,
    ) -> PersistResult<ResourceHeader> {
        match operation.kind {
            OperationKind::Create | OperationKind::Update => {}
            OperationKind::Delete => {
                return Err(PersistError::UnsupportedOperation(operation.kind));
            }
        }

        debug!(
            resource = %operation.resource_id,
            kind = %operation.kind,
            root = %root_id,
            "persisting resource"
        );

        let header_path = paths::header_path(root_id, &operation.resource_id)?;
        let content_path = self.resolve_content_path(session, operation, root_id)?;

        // Content before header: a committed header must never reference
        // content that was not written.
        let outcome = session.write_content(&content_path, &operation.payload)?;

        let prior = match operation.kind {
            OperationKind::Update => Some(self.read_prior_header(session, operation, &header_path)?),
            _ => None,
        };
        let object_root = operation.resource_id == *root_id;
        let header = build_header(prior, operation, &outcome, object_root, &content_path)?;

        session.write_header(&header_path, &header)?;
        Ok(header)
    }

    /// Content path for the operation's resource.
    ///
    /// For an ACL companion this reads the parent's header through the
    /// session first, since the ACL's path shape depends on the parent's
    /// interaction model. The read happens before any write for the ACL
    /// itself, and sees parents persisted earlier in the same session.
    fn resolve_content_path(
        &self,
        session: &dyn ObjectSession,
        operation: &ResourceOperation,
        root_id: &ResourceId,
    ) -> PersistResult<String> {
        if !operation.resource_id.is_acl() {
            return paths::content_path(root_id, &operation.resource_id);
        }

        let parent_id = operation.resource_id.base_id();
        debug!(parent = %parent_id, "reading parent header for ACL path derivation");
        let parent_header_path = paths::header_path(root_id, &parent_id)?;
        let parent = session
            .read_header(&parent_header_path)
            .map_err(|err| match err {
                StoreError::HeaderNotFound(_) => PersistError::MissingParentHeader(parent_id),
                other => PersistError::StorageAccess(other),
            })?;

        paths::acl_content_path(
            parent.interaction_model.is_structured(),
            root_id,
            &operation.resource_id,
        )
    }

    fn read_prior_header(
        &self,
        session: &dyn ObjectSession,
        operation: &ResourceOperation,
        header_path: &str,
    ) -> PersistResult<ResourceHeader> {
        session.read_header(header_path).map_err(|err| match err {
            StoreError::HeaderNotFound(_) => {
                PersistError::MissingPriorHeader(operation.resource_id.clone())
            }
            other => PersistError::StorageAccess(other),
        })
    }
}

impl std::fmt::Debug for ResourcePersister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourcePersister").finish_non_exhaustive()
    }
}
