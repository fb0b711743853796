//! Core type definitions for the resource graph

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Well-known type tags
pub mod tags {
    pub const CONTAINER: &str = "container";
    pub const BASIC_CONTAINER: &str = "basic-container";
    pub const DIRECT_CONTAINER: &str = "direct-container";
    pub const INDIRECT_CONTAINER: &str = "indirect-container";
    pub const BINARY: &str = "binary";
    pub const BINARY_DESCRIPTION: &str = "binary-description";
}

/// Rejected resource path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid resource path {path:?}: {reason}")]
pub struct InvalidPath {
    pub path: String,
    pub reason: &'static str,
}

/// Identity of a resource: its absolute path in the hierarchy
///
/// `/` is the root; every other path is `/`-separated, non-empty segments
/// with no trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceId(String);

impl ResourceId {
    /// Parse and validate a path
    pub fn new(path: impl Into<String>) -> Result<Self, InvalidPath> {
        let path = path.into();
        let invalid = |reason| InvalidPath {
            path: path.clone(),
            reason,
        };
        if !path.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }
        if path.len() > 1 {
            if path.ends_with('/') {
                return Err(invalid("must not end with '/'"));
            }
            if path[1..].split('/').any(str::is_empty) {
                return Err(invalid("empty path segment"));
            }
        }
        Ok(ResourceId(path))
    }

    /// The root resource
    pub fn root() -> Self {
        ResourceId("/".to_string())
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments, empty for the root
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Path of the parent, `None` for the root
    pub fn parent(&self) -> Option<ResourceId> {
        if self.is_root() {
            return None;
        }
        match self.0.rfind('/') {
            Some(0) => Some(ResourceId::root()),
            Some(pos) => Some(ResourceId(self.0[..pos].to_string())),
            None => None,
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ResourceId {
    type Error = InvalidPath;

    fn try_from(path: String) -> Result<Self, Self::Error> {
        ResourceId::new(path)
    }
}

impl TryFrom<&str> for ResourceId {
    type Error = InvalidPath;

    fn try_from(path: &str) -> Result<Self, Self::Error> {
        ResourceId::new(path)
    }
}

impl From<ResourceId> for String {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}

/// Type tag carried by a resource (e.g., "direct-container", "binary")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TypeTag(String);

impl TypeTag {
    pub fn new(tag: impl Into<String>) -> Self {
        TypeTag(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TypeTag {
    fn from(s: String) -> Self {
        TypeTag(s)
    }
}

impl From<&str> for TypeTag {
    fn from(s: &str) -> Self {
        TypeTag(s.to_string())
    }
}

/// Set of type tags on a resource
pub type TypeTags = BTreeSet<TypeTag>;

/// Check a tag set for a well-known tag
pub fn has_tag(tags: &TypeTags, tag: &str) -> bool {
    tags.iter().any(|t| t.as_str() == tag)
}

/// LDP container variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Basic,
    Direct,
    Indirect,
}

/// Kind of a resource, derived once from its type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Container(ContainerKind),
    Binary,
    BinaryDescription,
    Plain,
}

impl ResourceKind {
    /// Classify a tag set. Indirect wins over direct, direct over basic.
    ///
    /// Container tags win over `binary` and `binary-description`: a
    /// resource that holds children is projected as a container, so a
    /// resource tagged both `container` and `binary` has no content pairing.
    pub fn classify(tags: &TypeTags) -> Self {
        if has_tag(tags, tags::INDIRECT_CONTAINER) {
            ResourceKind::Container(ContainerKind::Indirect)
        } else if has_tag(tags, tags::DIRECT_CONTAINER) {
            ResourceKind::Container(ContainerKind::Direct)
        } else if has_tag(tags, tags::BASIC_CONTAINER) || has_tag(tags, tags::CONTAINER) {
            ResourceKind::Container(ContainerKind::Basic)
        } else if has_tag(tags, tags::BINARY) {
            ResourceKind::Binary
        } else if has_tag(tags, tags::BINARY_DESCRIPTION) {
            ResourceKind::BinaryDescription
        } else {
            ResourceKind::Plain
        }
    }

    /// Direct and indirect containers take part in membership derivation
    pub fn is_membership_container(&self) -> bool {
        matches!(
            self,
            ResourceKind::Container(ContainerKind::Direct | ContainerKind::Indirect)
        )
    }

    pub fn is_container(&self) -> bool {
        matches!(self, ResourceKind::Container(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_set(names: &[&str]) -> TypeTags {
        names.iter().map(|n| TypeTag::from(*n)).collect()
    }

    #[test]
    fn test_resource_id_validation() {
        assert!(ResourceId::new("/").unwrap().is_root());
        assert_eq!(ResourceId::new("/a/b").unwrap().as_str(), "/a/b");

        assert!(ResourceId::new("a/b").is_err());
        assert!(ResourceId::new("/a/").is_err());
        assert!(ResourceId::new("/a//b").is_err());
        assert!(ResourceId::new("").is_err());
    }

    #[test]
    fn test_resource_id_parent() {
        let id = ResourceId::new("/a/b/c").unwrap();
        assert_eq!(id.parent(), Some(ResourceId::new("/a/b").unwrap()));
        assert_eq!(ResourceId::new("/a").unwrap().parent(), Some(ResourceId::root()));
        assert_eq!(ResourceId::root().parent(), None);
        assert_eq!(id.segments().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(ResourceId::root().segments().count(), 0);
    }

    #[test]
    fn test_resource_id_serde() {
        let id: ResourceId = serde_json::from_str("\"/books/1\"").unwrap();
        assert_eq!(id.as_str(), "/books/1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"/books/1\"");
        assert!(serde_json::from_str::<ResourceId>("\"books\"").is_err());
    }

    #[test]
    fn test_classification() {
        assert_eq!(
            ResourceKind::classify(&tag_set(&["indirect-container", "direct-container"])),
            ResourceKind::Container(ContainerKind::Indirect)
        );
        assert_eq!(
            ResourceKind::classify(&tag_set(&["direct-container", "basic-container"])),
            ResourceKind::Container(ContainerKind::Direct)
        );
        assert_eq!(
            ResourceKind::classify(&tag_set(&["container"])),
            ResourceKind::Container(ContainerKind::Basic)
        );
        assert_eq!(ResourceKind::classify(&tag_set(&["binary"])), ResourceKind::Binary);
        assert_eq!(
            ResourceKind::classify(&tag_set(&["binary-description"])),
            ResourceKind::BinaryDescription
        );
        assert_eq!(ResourceKind::classify(&tag_set(&[])), ResourceKind::Plain);
        assert_eq!(
            ResourceKind::classify(&tag_set(&["binary", "container"])),
            ResourceKind::Container(ContainerKind::Basic)
        );
    }

    #[test]
    fn test_membership_container() {
        assert!(ResourceKind::Container(ContainerKind::Direct).is_membership_container());
        assert!(ResourceKind::Container(ContainerKind::Indirect).is_membership_container());
        assert!(!ResourceKind::Container(ContainerKind::Basic).is_membership_container());
        assert!(!ResourceKind::Plain.is_membership_container());
    }
}
