//! Pure derivation of content and header paths within a storage object.
//!
//! Every path is a deterministic function of the owning root identifier and
//! the resource identifier (plus, for ACL companions, the parent's
//! interaction model). The same inputs always yield the same paths, which
//! is what keeps a resource's header and content consistent across its
//! create and every subsequent update.
//!
//! # Layout
//!
//! Within a storage object rooted at `obj`:
//!
//! - headers live under `.meta/`: `.meta/~root.json` for the root resource,
//!   `.meta/a/b.json` for a descendant `obj/a/b`, with `~acl` appended for
//!   ACL companions
//! - structured content: `~root.nt` / `a/b.nt`
//! - ACL content next to a structured parent: `a/b~acl.nt`
//! - ACL content next to an opaque parent follows the parent's associated
//!   description (`a/b~desc.nt`), giving `a/b~desc~acl.nt`
//!
//! Identifier segments may not contain `~`, so decorated stems never
//! collide with stems derived from other identifiers.

use strata_types::ResourceId;

use crate::error::{PersistError, PersistResult};

/// Directory within a storage object holding header files.
const HEADER_DIR: &str = ".meta";

/// Reserved stem for the storage object's root resource.
const ROOT_STEM: &str = "~root";

/// Decoration appended for ACL companions.
const ACL_DECORATION: &str = "~acl";

/// Decoration for an opaque resource's associated description.
const DESC_DECORATION: &str = "~desc";

/// Relative path of the header file for a resource.
///
/// Independent of the resource's interaction model; ACL companions get
/// their own header file, decorated with `~acl`.
pub fn header_path(root: &ResourceId, resource: &ResourceId) -> PersistResult<String> {
    let mut stem = base_stem(root, resource)?;
    if resource.is_acl() {
        stem.push_str(ACL_DECORATION);
    }
    Ok(format!("{HEADER_DIR}/{stem}.json"))
}

/// Relative path of the content file for a non-ACL resource.
pub fn content_path(root: &ResourceId, resource: &ResourceId) -> PersistResult<String> {
    let stem = base_stem(root, resource)?;
    Ok(format!("{stem}.nt"))
}

/// Relative path of the content file for an ACL companion.
///
/// The two parent kinds map to distinct shapes: an ACL attached to a
/// structured resource sits directly beside it, while an ACL attached to an
/// opaque resource sits beside the parent's associated description.
pub fn acl_content_path(
    parent_is_structured: bool,
    root: &ResourceId,
    resource: &ResourceId,
) -> PersistResult<String> {
    let stem = base_stem(root, resource)?;
    if parent_is_structured {
        Ok(format!("{stem}{ACL_DECORATION}.nt"))
    } else {
        Ok(format!("{stem}{DESC_DECORATION}{ACL_DECORATION}.nt"))
    }
}

/// The undecorated stem for a resource within its storage object.
fn base_stem(root: &ResourceId, resource: &ResourceId) -> PersistResult<String> {
    let rel = resource
        .relative_to(root)
        .ok_or_else(|| PersistError::OutsideObject {
            resource: resource.clone(),
            root: root.clone(),
        })?;
    if rel.is_empty() {
        Ok(ROOT_STEM.to_string())
    } else {
        Ok(rel.to_string())
    }
}
