use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use strata_types::ResourceHeader;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::outcome::WriteOutcome;
use crate::traits::ObjectSession;

/// In-memory, HashMap-based storage-object session.
///
/// Intended for tests and embedding. Headers and content are held in memory
/// behind `RwLock`s and cloned on read/write. Reads see every write made
/// through the same session, which is exactly the read-your-own-writes
/// guarantee the persister requires.
pub struct InMemorySession {
    headers: RwLock<HashMap<String, ResourceHeader>>,
    content: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemorySession {
    /// Create a new empty session.
    pub fn new() -> Self {
        Self {
            headers: RwLock::new(HashMap::new()),
            content: RwLock::new(HashMap::new()),
        }
    }

    /// Content bytes at a path, if any. Test/inspection helper.
    pub fn content(&self, path: &str) -> Option<Vec<u8>> {
        self.content.read().expect("lock poisoned").get(path).cloned()
    }

    /// Number of header files in the session.
    pub fn header_count(&self) -> usize {
        self.headers.read().expect("lock poisoned").len()
    }

    /// Number of content files in the session.
    pub fn content_count(&self) -> usize {
        self.content.read().expect("lock poisoned").len()
    }

    /// Sorted list of every path written through this session.
    pub fn all_paths(&self) -> Vec<String> {
        let headers = self.headers.read().expect("lock poisoned");
        let content = self.content.read().expect("lock poisoned");
        let mut paths: Vec<String> = headers.keys().chain(content.keys()).cloned().collect();
        paths.sort();
        paths.dedup();
        paths
    }
}

impl Default for InMemorySession {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectSession for InMemorySession {
    fn read_header(&self, path: &str) -> StoreResult<ResourceHeader> {
        let headers = self.headers.read().expect("lock poisoned");
        headers
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::HeaderNotFound(path.to_string()))
    }

    fn write_content(&self, path: &str, bytes: &[u8]) -> StoreResult<WriteOutcome> {
        let outcome = WriteOutcome::record(bytes, Utc::now());
        debug!(path, size = outcome.content_size, "writing content");
        let mut content = self.content.write().expect("lock poisoned");
        content.insert(path.to_string(), bytes.to_vec());
        Ok(outcome)
    }

    fn write_header(&self, path: &str, header: &ResourceHeader) -> StoreResult<()> {
        debug!(path, resource = %header.resource_id, "writing header");
        let mut headers = self.headers.write().expect("lock poisoned");
        headers.insert(path.to_string(), header.clone());
        Ok(())
    }
}

impl std::fmt::Debug for InMemorySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySession")
            .field("headers", &self.header_count())
            .field("content_files", &self.content_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use strata_types::{InteractionModel, ResourceId};

    use super::*;

    fn make_header(id: &str) -> ResourceHeader {
        let resource_id = ResourceId::new(id).unwrap();
        ResourceHeader {
            parent_id: resource_id.clone(),
            resource_id,
            interaction_model: InteractionModel::Structured,
            created_by: "alice".to_string(),
            created_date: Utc::now(),
            last_modified_by: "alice".to_string(),
            last_modified_date: Utc::now(),
            archival_group: false,
            object_root: true,
            content_path: "root.nt".to_string(),
        }
    }

    #[test]
    fn write_and_read_header() {
        let session = InMemorySession::new();
        let header = make_header("obj");
        session.write_header(".meta/root.json", &header).unwrap();

        let read_back = session.read_header(".meta/root.json").unwrap();
        assert_eq!(read_back, header);
    }

    #[test]
    fn read_missing_header_is_not_found() {
        let session = InMemorySession::new();
        let err = session.read_header(".meta/ghost.json").unwrap_err();
        assert!(matches!(err, StoreError::HeaderNotFound(_)));
    }

    #[test]
    fn header_rewrite_replaces_prior() {
        let session = InMemorySession::new();
        let mut header = make_header("obj");
        session.write_header(".meta/root.json", &header).unwrap();

        header.last_modified_by = "bob".to_string();
        session.write_header(".meta/root.json", &header).unwrap();

        let read_back = session.read_header(".meta/root.json").unwrap();
        assert_eq!(read_back.last_modified_by, "bob");
        assert_eq!(session.header_count(), 1);
    }

    #[test]
    fn write_content_returns_outcome() {
        let session = InMemorySession::new();
        let outcome = session.write_content("root.nt", b"<s> <p> <o> .").unwrap();
        assert_eq!(outcome.content_size, 13);
        assert_eq!(session.content("root.nt").unwrap(), b"<s> <p> <o> .");
    }

    #[test]
    fn read_your_own_writes_within_session() {
        // A header written through the session is visible to a later read
        // in the same session, before any commit.
        let session = InMemorySession::new();
        let header = make_header("obj");
        session.write_header(".meta/a.json", &header).unwrap();
        assert!(session.read_header(".meta/a.json").is_ok());
    }

    #[test]
    fn headers_and_content_are_separate_namespaces() {
        let session = InMemorySession::new();
        session.write_content("root.nt", b"data").unwrap();
        // A content write never satisfies a header read at the same path.
        assert!(session.read_header("root.nt").is_err());
    }

    #[test]
    fn all_paths_sorted_and_deduped() {
        let session = InMemorySession::new();
        session.write_content("b.nt", b"b").unwrap();
        session.write_content("a.nt", b"a").unwrap();
        session
            .write_header(".meta/a.json", &make_header("obj"))
            .unwrap();

        let paths = session.all_paths();
        assert_eq!(paths, vec![".meta/a.json", "a.nt", "b.nt"]);
    }

    #[test]
    fn debug_format() {
        let session = InMemorySession::new();
        session.write_content("x.nt", b"x").unwrap();
        let debug = format!("{session:?}");
        assert!(debug.contains("InMemorySession"));
        assert!(debug.contains("content_files"));
    }
}
