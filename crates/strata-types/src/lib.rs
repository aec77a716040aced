//! Foundation types for Strata, the versioned resource persistence layer.
//!
//! This crate provides the core identifier, header, and operation types used
//! throughout the Strata system. Every other Strata crate depends on
//! `strata-types`.
//!
//! # Key Types
//!
//! - [`ResourceId`] — Hierarchical logical identifier for a resource, with an
//!   ACL flag distinguishing a resource from its access-control companion
//! - [`InteractionModel`] — Tag classifying a resource as structured (RDF)
//!   or opaque (binary)
//! - [`ResourceHeader`] — The versioned metadata record persisted alongside
//!   every resource's content
//! - [`ResourceOperation`] — A create/update/delete request against a
//!   logical resource, with optional relaxed-mode provenance overrides

pub mod error;
pub mod header;
pub mod id;
pub mod model;
pub mod operation;

pub use error::TypeError;
pub use header::ResourceHeader;
pub use id::ResourceId;
pub use model::InteractionModel;
pub use operation::{CreateSpec, OperationKind, RelaxedOverrides, ResourceOperation};
