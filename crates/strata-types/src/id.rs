use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Suffix used when rendering the ACL companion of a resource.
const ACL_SUFFIX: &str = "#acl";

/// Logical identifier for a resource.
///
/// Identifiers are hierarchical, slash-separated paths (`"objects/a/b"`).
/// An ACL companion shares its base resource's path and carries the `acl`
/// flag;
/// it renders with a `#acl` suffix (`"objects/a/b#acl"`). The flag lives on
/// the identifier rather than in the path so that an ACL can never collide
/// with an ordinary child segment.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceId {
    path: String,
    acl: bool,
}

impl ResourceId {
    /// Create an identifier from a hierarchical path.
    ///
    /// The path must be non-empty, must not start or end with `/`, and no
    /// segment may be empty or contain `#` or `~`. Tilde is reserved for
    /// storage-path decorations (`~acl`, `~desc`), so a derived storage
    /// path can never collide with one derived from another identifier.
    pub fn new(path: impl Into<String>) -> Result<Self, TypeError> {
        let path = path.into();
        validate_path(&path)?;
        Ok(Self { path, acl: false })
    }

    /// The ACL companion of this identifier.
    ///
    /// The ACL of an ACL is the ACL itself.
    pub fn acl(&self) -> Self {
        Self {
            path: self.path.clone(),
            acl: true,
        }
    }

    /// Returns `true` if this identifies an ACL companion.
    pub fn is_acl(&self) -> bool {
        self.acl
    }

    /// The identifier this ACL is attached to.
    ///
    /// For a non-ACL identifier this is the identifier itself.
    pub fn base_id(&self) -> Self {
        Self {
            path: self.path.clone(),
            acl: false,
        }
    }

    /// The raw hierarchical path, without the ACL marker.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The path of this resource relative to an owning root.
    ///
    /// Returns `Some("")` when this identifier's path equals the root's,
    /// `Some(rest)` when it is a descendant, and `None` when it lies
    /// outside the root's subtree. The ACL flag is ignored; callers that
    /// care about it consult [`is_acl`](Self::is_acl).
    pub fn relative_to(&self, root: &ResourceId) -> Option<&str> {
        if self.path == root.path {
            return Some("");
        }
        self.path.strip_prefix(&root.path).and_then(|rest| rest.strip_prefix('/'))
    }

    /// Parse from the display form (`"a/b"` or `"a/b#acl"`).
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        match s.strip_suffix(ACL_SUFFIX) {
            Some(base) => Ok(Self::new(base)?.acl()),
            None => Self::new(s),
        }
    }
}

fn validate_path(path: &str) -> Result<(), TypeError> {
    if path.is_empty() {
        return Err(TypeError::InvalidId("empty path".to_string()));
    }
    for segment in path.split('/') {
        if segment.is_empty() {
            return Err(TypeError::InvalidId(format!(
                "empty segment in {path:?}"
            )));
        }
        if segment.contains('#') || segment.contains('~') {
            return Err(TypeError::InvalidId(format!(
                "segment {segment:?} contains a reserved character"
            )));
        }
    }
    Ok(())
}

impl fmt::Debug for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceId({self})")
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.acl {
            write!(f, "{}{ACL_SUFFIX}", self.path)
        } else {
            write!(f, "{}", self.path)
        }
    }
}
