//! Resource implementation for the repository graph

use super::property::{PropertyValue, PropertyValues};
use super::types::{has_tag, ResourceId, ResourceKind, TypeTag, TypeTags};
use indexmap::IndexMap;

/// A resource in the repository hierarchy
///
/// Resources carry:
/// - A path-based identity
/// - A set of type tags
/// - Multi-valued properties, in insertion order
/// - Ordered children and an optional parent
/// - The binary/description pairing, when tagged as one of the two
#[derive(Debug, Clone)]
pub struct Resource {
    /// Unique identifier for this resource
    pub id: ResourceId,

    /// Type tags
    pub tags: TypeTags,

    /// Properties associated with this resource
    pub properties: IndexMap<String, PropertyValues>,

    /// Children in creation order
    pub children: Vec<ResourceId>,

    /// Parent resource, `None` for the root
    pub parent: Option<ResourceId>,

    /// For a description: the binary it describes
    pub described: Option<ResourceId>,

    /// For a binary: its description
    pub description: Option<ResourceId>,
}

impl Resource {
    pub fn new(id: ResourceId, tags: impl IntoIterator<Item = TypeTag>) -> Self {
        let parent = id.parent();
        Resource {
            id,
            tags: tags.into_iter().collect(),
            properties: IndexMap::new(),
            children: Vec::new(),
            parent,
            described: None,
            description: None,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        has_tag(&self.tags, tag)
    }

    pub fn add_tag(&mut self, tag: impl Into<TypeTag>) {
        self.tags.insert(tag.into());
    }

    pub fn kind(&self) -> ResourceKind {
        ResourceKind::classify(&self.tags)
    }

    pub fn get_property(&self, name: &str) -> Option<&PropertyValues> {
        self.properties.get(name)
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Replace the values of a property, returning the previous ones
    pub(crate) fn set_property(
        &mut self,
        name: impl Into<String>,
        values: PropertyValues,
    ) -> Option<PropertyValues> {
        self.properties.insert(name.into(), values)
    }

    /// Reference-typed values, with the property each is stored under
    pub(crate) fn references(&self) -> impl Iterator<Item = (&str, &ResourceId)> {
        self.properties.iter().flat_map(|(name, values)| {
            values
                .iter()
                .filter_map(PropertyValue::as_reference)
                .map(move |target| (name.as_str(), target))
        })
    }
}
