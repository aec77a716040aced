use std::fmt;

use chrono::{DateTime, Utc};

use crate::id::ResourceId;
use crate::model::InteractionModel;

/// The kind of a resource operation.
///
/// Dispatch on this tag is exhaustive everywhere: a new variant must be
/// handled at every match site before the code compiles again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Create,
    Update,
    Delete,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Relaxed-mode provenance overrides.
///
/// Normally provenance is derived from the current write: the operation's
/// principal and the storage layer's write timestamp. A migrating or
/// backfilling caller can instead supply these fields explicitly; any field
/// present here replaces the derived value unconditionally, on creates and
/// updates alike.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelaxedOverrides {
    pub created_by: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl RelaxedOverrides {
    /// Returns `true` if no override is present.
    pub fn is_empty(&self) -> bool {
        self.created_by.is_none()
            && self.created_date.is_none()
            && self.last_modified_by.is_none()
            && self.last_modified_date.is_none()
    }
}

/// Data present only on create operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateSpec {
    /// The containing resource.
    pub parent_id: ResourceId,
    /// Structured or opaque; immutable once persisted.
    pub interaction_model: InteractionModel,
    /// Marks the new resource as a self-contained archival unit.
    pub archival_group: bool,
}

/// A single create/update/delete request against a logical resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceOperation {
    /// The resource this operation targets.
    pub resource_id: ResourceId,
    /// Create, update, or delete.
    pub kind: OperationKind,
    /// Principal on whose behalf the operation runs.
    pub user_principal: String,
    /// Opaque content bytes (serialized triples for structured resources).
    pub payload: Vec<u8>,
    /// Present iff `kind == Create`.
    pub create: Option<CreateSpec>,
    /// Relaxed-mode provenance overrides, empty by default.
    pub relaxed: RelaxedOverrides,
}

impl ResourceOperation {
    /// A create operation for a new resource under `parent_id`.
    pub fn create(
        resource_id: ResourceId,
        parent_id: ResourceId,
        interaction_model: InteractionModel,
        user_principal: impl Into<String>,
    ) -> Self {
        Self {
            resource_id,
            kind: OperationKind::Create,
            user_principal: user_principal.into(),
            payload: Vec::new(),
            create: Some(CreateSpec {
                parent_id,
                interaction_model,
                archival_group: false,
            }),
            relaxed: RelaxedOverrides::default(),
        }
    }

    /// An update operation against an existing resource.
    pub fn update(resource_id: ResourceId, user_principal: impl Into<String>) -> Self {
        Self {
            resource_id,
            kind: OperationKind::Update,
            user_principal: user_principal.into(),
            payload: Vec::new(),
            create: None,
            relaxed: RelaxedOverrides::default(),
        }
    }

    /// A delete operation. Not persisted by this layer; the surrounding
    /// session tombstones the resource.
    pub fn delete(resource_id: ResourceId, user_principal: impl Into<String>) -> Self {
        Self {
            resource_id,
            kind: OperationKind::Delete,
            user_principal: user_principal.into(),
            payload: Vec::new(),
            create: None,
            relaxed: RelaxedOverrides::default(),
        }
    }

    /// Attach the content payload.
    pub fn with_payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Mark a create operation as an archival group. No effect on other
    /// operation kinds.
    pub fn with_archival_group(mut self, archival_group: bool) -> Self {
        if let Some(spec) = self.create.as_mut() {
            spec.archival_group = archival_group;
        }
        self
    }

    /// Attach relaxed-mode provenance overrides.
    pub fn with_relaxed(mut self, relaxed: RelaxedOverrides) -> Self {
        self.relaxed = relaxed;
        self
    }
}
