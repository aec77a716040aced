//! Pure construction and merging of resource headers.
//!
//! [`build_header`] turns `(prior header, operation, write outcome,
//! context)` into the header to persist for this version, without touching
//! the session. The persister performs the session read for updates and
//! passes the prior header in, which keeps every merge rule directly
//! testable against plain values.

use strata_store::WriteOutcome;
use strata_types::{OperationKind, RelaxedOverrides, ResourceHeader, ResourceOperation};

use crate::error::{PersistError, PersistResult};

/// Build the header to persist for one operation.
///
/// - `Create` constructs a fresh header from the operation's create data
///   and stamps creation provenance from the outcome.
/// - `Update` merges into `prior`, which must be present; an update with no
///   prior header is a sequencing bug surfaced as
///   [`PersistError::MissingPriorHeader`].
///
/// Both branches then stamp modification provenance from the outcome (a
/// freshly created header has identical creation and modification stamps),
/// and finally apply relaxed-mode overrides. Overrides win unconditionally
/// whenever present, on creates and updates alike, so a migrating caller
/// can reproduce historical provenance exactly.
pub fn build_header(
    prior: Option<ResourceHeader>,
    operation: &ResourceOperation,
    outcome: &WriteOutcome,
    object_root: bool,
    content_path: &str,
) -> PersistResult<ResourceHeader> {
    let mut header = match operation.kind {
        OperationKind::Create => {
            let spec = operation.create.as_ref().ok_or_else(|| {
                PersistError::MalformedOperation(format!(
                    "create of {} carries no create data",
                    operation.resource_id
                ))
            })?;
            ResourceHeader {
                resource_id: operation.resource_id.clone(),
                parent_id: spec.parent_id.clone(),
                interaction_model: spec.interaction_model,
                created_by: operation.user_principal.clone(),
                created_date: outcome.time_written,
                last_modified_by: operation.user_principal.clone(),
                last_modified_date: outcome.time_written,
                archival_group: spec.archival_group,
                object_root,
                content_path: content_path.to_string(),
            }
        }
        OperationKind::Update => prior.ok_or_else(|| {
            PersistError::MissingPriorHeader(operation.resource_id.clone())
        })?,
        OperationKind::Delete => {
            return Err(PersistError::UnsupportedOperation(operation.kind));
        }
    };

    header.last_modified_by = operation.user_principal.clone();
    header.last_modified_date = outcome.time_written;

    apply_relaxed_overrides(&mut header, &operation.relaxed);
    Ok(header)
}

/// Replace derived provenance with any explicitly supplied values.
///
/// This is the only path by which the write-once provenance fields change
/// after creation.
fn apply_relaxed_overrides(header: &mut ResourceHeader, relaxed: &RelaxedOverrides) {
    if let Some(by) = &relaxed.last_modified_by {
        header.last_modified_by = by.clone();
    }
    if let Some(date) = relaxed.last_modified_date {
        header.last_modified_date = date;
    }
    if let Some(by) = &relaxed.created_by {
        header.created_by = by.clone();
    }
    if let Some(date) = relaxed.created_date {
        header.created_date = date;
    }
}
