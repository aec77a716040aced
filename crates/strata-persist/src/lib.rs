//! Persistence core for Strata.
//!
//! Translates abstract resource operations (create, update) into a
//! deterministic pair of file writes inside a versioned storage object: the
//! resource's content bytes and its metadata header. The header records
//! provenance and is versioned alongside the content.
//!
//! # Layers
//!
//! - [`paths`] -- pure derivation of content and header paths within a
//!   storage object, including the ACL special case that branches on the
//!   parent resource's interaction model
//! - [`headers`] -- pure construction/merge of [`ResourceHeader`] values
//!   from a prior header, the operation, and the content write outcome
//! - [`ResourcePersister`] -- the orchestrator: derive paths, write
//!   content, build the header, write the header, in that fixed order
//!
//! A committed header therefore always references content that already
//! exists. The persister performs no retries and no partial-failure
//! recovery; commit and rollback belong to the surrounding transaction
//! manager.
//!
//! [`ResourceHeader`]: strata_types::ResourceHeader

pub mod error;
pub mod headers;
pub mod paths;
pub mod persister;

pub use error::{PersistError, PersistResult};
pub use persister::ResourcePersister;
