use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::ResourceId;
use crate::model::InteractionModel;

/// Versioned metadata record persisted alongside a resource's content.
///
/// One header exists per resource and is rewritten on every persisted
/// version. `parent_id`, `interaction_model`, `archival_group`,
/// `created_by`, and `created_date` are set at creation and never change
/// through ordinary updates; only a relaxed-mode override on a later
/// operation may rewrite the provenance fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceHeader {
    /// The resource this header describes.
    pub resource_id: ResourceId,
    /// The containing resource. Immutable once set.
    pub parent_id: ResourceId,
    /// Structured or opaque. Immutable once set.
    pub interaction_model: InteractionModel,
    /// Principal that created the first version.
    pub created_by: String,
    /// Timestamp of the first version's content write.
    pub created_date: DateTime<Utc>,
    /// Principal that wrote the current version.
    pub last_modified_by: String,
    /// Timestamp of the current version's content write.
    pub last_modified_date: DateTime<Utc>,
    /// Marks a self-contained archival unit. Set only at creation.
    pub archival_group: bool,
    /// `true` iff this resource's identifier equals the owning storage
    /// object's root identifier.
    pub object_root: bool,
    /// Relative path within the storage object holding the content bytes.
    pub content_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip_preserves_every_field() {
        let header = ResourceHeader {
            resource_id: ResourceId::new("obj/a").unwrap(),
            parent_id: ResourceId::new("obj").unwrap(),
            interaction_model: InteractionModel::Opaque,
            created_by: "alice".to_string(),
            created_date: "2024-03-01T10:00:00Z".parse().unwrap(),
            last_modified_by: "bob".to_string(),
            last_modified_date: "2024-03-02T11:30:00Z".parse().unwrap(),
            archival_group: true,
            object_root: false,
            content_path: "a".to_string(),
        };
        let json = serde_json::to_string(&header).unwrap();
        let parsed: ResourceHeader = serde_json::from_str(&json).unwrap();
        assert_eq!(header, parsed);
    }
}
