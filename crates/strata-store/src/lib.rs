//! Storage-object session boundary for Strata.
//!
//! A *storage object* is a versioned, append-only unit holding one or more
//! resources' content and header files. This crate defines the session
//! interface through which the persistence core reads and writes paths
//! inside a single storage object, without knowing how versions are laid
//! out or committed.
//!
//! # Key Types
//!
//! - [`ObjectSession`] -- the read/write boundary consumed by the persister
//! - [`WriteOutcome`] -- timestamp, size, and digest recorded for a content
//!   write; headers are stamped from it so header and content agree on a
//!   version's provenance
//! - [`InMemorySession`] -- `HashMap`-backed session for tests and embedding
//!
//! # Design Rules
//!
//! 1. Paths are relative to the storage object root; the session never
//!    interprets them beyond key lookup.
//! 2. A session observes its own uncommitted writes (read-your-own-writes).
//! 3. One persist call in flight per session; the session is not a
//!    concurrency primitive.
//! 4. All I/O errors are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod outcome;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use memory::InMemorySession;
pub use outcome::WriteOutcome;
pub use traits::ObjectSession;
