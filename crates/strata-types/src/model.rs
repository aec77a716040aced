use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag classifying a resource's kind.
///
/// The interaction model is recorded in the resource's header at creation
/// and is immutable thereafter. Path derivation for ACL companions branches
/// on the *parent's* interaction model, so the tag must survive header
/// round-trips unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionModel {
    /// Structured, RDF-bearing resource.
    Structured,
    /// Opaque binary resource.
    Opaque,
}

impl InteractionModel {
    /// Returns `true` for RDF-bearing resources.
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured)
    }
}

impl fmt::Display for InteractionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured => write!(f, "structured"),
            Self::Opaque => write!(f, "opaque"),
        }
    }
}
