//! Root index for Strata.
//!
//! Every resource lives inside exactly one storage object, anchored by that
//! object's *root* resource. The [`RootIndex`] trait resolves a logical
//! resource identifier to its owning root identifier; the persistence core
//! consumes it to decide which storage object an operation targets.
//!
//! Mappings are maintained by the surrounding session/transaction layer as
//! resources are created and deleted; this crate only defines the lookup
//! boundary and an in-memory backend for tests and embedding.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{IndexError, IndexResult};
pub use memory::InMemoryRootIndex;
pub use traits::RootIndex;
