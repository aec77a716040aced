use strata_types::ResourceHeader;

use crate::error::StoreResult;
use crate::outcome::WriteOutcome;

/// Read/write boundary over one storage-object session.
///
/// All implementations must satisfy these invariants:
/// - A session is bound to a single storage object; every path is relative
///   to that object's root.
/// - Reads observe writes made earlier in the same session, before commit
///   (read-your-own-writes). A parent and its ACL may be persisted in one
///   session, and the ACL's path derivation reads the parent's header.
/// - At most one persist call is in flight per session at a time; callers
///   serialize access. Exclusivity across sessions targeting the same
///   storage object belongs to the surrounding transaction manager.
/// - Commit, rollback, and version layout are the backend's concern; the
///   session surfaces failures immediately and never retries.
pub trait ObjectSession: Send + Sync {
    /// Read the header at the given relative path.
    ///
    /// Returns `StoreError::HeaderNotFound` if no header exists there.
    fn read_header(&self, path: &str) -> StoreResult<ResourceHeader>;

    /// Write content bytes at the given relative path.
    ///
    /// Returns the recorded [`WriteOutcome`]; its timestamp is the one the
    /// persister stamps into the resource's header for this version.
    fn write_content(&self, path: &str, bytes: &[u8]) -> StoreResult<WriteOutcome>;

    /// Write a header at the given relative path, replacing any prior one.
    fn write_header(&self, path: &str, header: &ResourceHeader) -> StoreResult<()>;
}
