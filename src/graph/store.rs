//! In-memory resource store
//!
//! A reference backend for [`ResourceModel`]: resources keyed by path, with
//! an index of incoming references kept current on every property write.

use super::model::{Reference, RepositoryError, RepositoryResult, ResourceModel};
use super::property::PropertyValues;
use super::resource::Resource;
use super::types::{tags, ResourceId, TypeTag, TypeTags};
use crate::rdf::NamespaceRegistry;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::debug;

/// In-memory resource storage
///
/// - resources: ResourceId -> Resource, in creation order
/// - incoming: target -> references pointing at it, in write order
#[derive(Debug, Clone)]
pub struct ResourceStore {
    resources: IndexMap<ResourceId, Resource>,
    incoming: FxHashMap<ResourceId, Vec<Reference>>,
    namespaces: NamespaceRegistry,
}

impl ResourceStore {
    /// Create a store holding only the root, a basic container
    pub fn new() -> Self {
        Self::with_namespaces(NamespaceRegistry::new())
    }

    pub fn with_namespaces(namespaces: NamespaceRegistry) -> Self {
        let root = Resource::new(ResourceId::root(), vec![TypeTag::from(tags::BASIC_CONTAINER)]);
        let mut resources = IndexMap::new();
        resources.insert(root.id.clone(), root);
        Self {
            resources,
            incoming: FxHashMap::default(),
            namespaces,
        }
    }

    /// Create a resource under an existing parent
    pub fn create_resource<T>(
        &mut self,
        path: &str,
        tags: impl IntoIterator<Item = T>,
    ) -> RepositoryResult<ResourceId>
    where
        T: Into<TypeTag>,
    {
        let id = ResourceId::new(path)?;
        if self.resources.contains_key(&id) {
            return Err(RepositoryError::ResourceAlreadyExists(id));
        }
        let parent_id = id
            .parent()
            .ok_or_else(|| RepositoryError::ResourceAlreadyExists(id.clone()))?;
        let parent = self
            .resources
            .get_mut(&parent_id)
            .ok_or_else(|| RepositoryError::ParentNotFound(id.clone()))?;
        parent.children.push(id.clone());

        let resource = Resource::new(id.clone(), tags.into_iter().map(Into::into));
        debug!("Created resource {} with tags {:?}", id, resource.tags);
        self.resources.insert(id.clone(), resource);
        Ok(id)
    }

    pub fn get_resource(&self, id: &ResourceId) -> Option<&Resource> {
        self.resources.get(id)
    }

    pub fn has_resource(&self, id: &ResourceId) -> bool {
        self.resources.contains_key(id)
    }

    /// Replace the values of a property, keeping the reference index current
    pub fn set_property(
        &mut self,
        id: &ResourceId,
        name: impl Into<String>,
        values: PropertyValues,
    ) -> RepositoryResult<()> {
        let name = name.into();
        let resource = self
            .resources
            .get_mut(id)
            .ok_or_else(|| RepositoryError::ResourceNotFound(id.clone()))?;

        if let Some(previous) = resource.set_property(name.clone(), values.clone()) {
            for target in previous.iter().filter_map(|v| v.as_reference()) {
                if let Some(refs) = self.incoming.get_mut(target) {
                    refs.retain(|r| !(r.origin == *id && r.property == name));
                }
            }
        }
        let reference = Reference {
            origin: id.clone(),
            property: name.clone(),
        };
        for target in values.iter().filter_map(|v| v.as_reference()) {
            // One entry per (origin, property), however often the target repeats
            let refs = self.incoming.entry(target.clone()).or_default();
            if !refs.contains(&reference) {
                refs.push(reference.clone());
            }
        }
        Ok(())
    }

    pub fn add_tag(&mut self, id: &ResourceId, tag: impl Into<TypeTag>) -> RepositoryResult<()> {
        self.resources
            .get_mut(id)
            .ok_or_else(|| RepositoryError::ResourceNotFound(id.clone()))?
            .add_tag(tag);
        Ok(())
    }

    /// Pair a binary with the resource that describes it
    pub fn pair_binary(
        &mut self,
        binary: &ResourceId,
        description: &ResourceId,
    ) -> RepositoryResult<()> {
        let invalid = |reason| RepositoryError::InvalidPairing {
            binary: binary.clone(),
            description: description.clone(),
            reason,
        };
        if !self.lookup(binary)?.has_tag(tags::BINARY) {
            return Err(invalid("binary is not tagged as a binary"));
        }
        if !self.lookup(description)?.has_tag(tags::BINARY_DESCRIPTION) {
            return Err(invalid("description is not tagged as a binary description"));
        }

        // Unlink the previous partners of both sides
        let stale_description = self
            .resources
            .get_mut(binary)
            .and_then(|r| r.description.replace(description.clone()));
        let stale_binary = self
            .resources
            .get_mut(description)
            .and_then(|r| r.described.replace(binary.clone()));
        if let Some(stale) = stale_description.filter(|d| d != description) {
            if let Some(resource) = self.resources.get_mut(&stale) {
                resource.described = None;
            }
            debug!("Unpaired description {} from {}", stale, binary);
        }
        if let Some(stale) = stale_binary.filter(|b| b != binary) {
            if let Some(resource) = self.resources.get_mut(&stale) {
                resource.description = None;
            }
            debug!("Unpaired binary {} from {}", stale, description);
        }
        Ok(())
    }

    pub fn namespaces_mut(&mut self) -> &mut NamespaceRegistry {
        &mut self.namespaces
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.values()
    }

    fn lookup(&self, id: &ResourceId) -> RepositoryResult<&Resource> {
        self.resources
            .get(id)
            .ok_or_else(|| RepositoryError::ResourceNotFound(id.clone()))
    }
}

impl Default for ResourceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceModel for ResourceStore {
    fn type_tags(&self, id: &ResourceId) -> RepositoryResult<TypeTags> {
        Ok(self.lookup(id)?.tags.clone())
    }

    fn property(&self, id: &ResourceId, name: &str) -> RepositoryResult<Option<PropertyValues>> {
        Ok(self.lookup(id)?.get_property(name).cloned())
    }

    fn properties(&self, id: &ResourceId) -> RepositoryResult<Vec<(String, PropertyValues)>> {
        Ok(self
            .lookup(id)?
            .properties
            .iter()
            .map(|(name, values)| (name.clone(), values.clone()))
            .collect())
    }

    fn incoming_references(
        &self,
        id: &ResourceId,
        relation: &str,
    ) -> RepositoryResult<Vec<Reference>> {
        self.lookup(id)?;
        Ok(self
            .incoming
            .get(id)
            .map(|refs| {
                refs.iter()
                    .filter(|r| r.property == relation)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn children(&self, id: &ResourceId) -> RepositoryResult<Vec<ResourceId>> {
        Ok(self.lookup(id)?.children.clone())
    }

    fn parent(&self, id: &ResourceId) -> RepositoryResult<Option<ResourceId>> {
        Ok(self.lookup(id)?.parent.clone())
    }

    fn described_binary_of(&self, id: &ResourceId) -> RepositoryResult<Option<ResourceId>> {
        Ok(self.lookup(id)?.described.clone())
    }

    fn description_of(&self, id: &ResourceId) -> RepositoryResult<Option<ResourceId>> {
        Ok(self.lookup(id)?.description.clone())
    }

    fn namespaces(&self) -> &NamespaceRegistry {
        &self.namespaces
    }
}
