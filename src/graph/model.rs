//! Read-only view of a repository consumed by the projection contexts
//!
//! Every query is fallible: a backend that cannot answer reports a
//! [`RepositoryError`], which the projection surfaces unchanged.

use super::property::PropertyValues;
use super::types::{InvalidPath, ResourceId, ResourceKind, TypeTags};
use crate::rdf::NamespaceRegistry;
use thiserror::Error;

/// Errors raised by the resource model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    #[error("Resource {0} not found")]
    ResourceNotFound(ResourceId),

    #[error("Resource {0} already exists")]
    ResourceAlreadyExists(ResourceId),

    #[error("Parent of {0} does not exist")]
    ParentNotFound(ResourceId),

    #[error(transparent)]
    InvalidPath(#[from] InvalidPath),

    #[error("Cannot pair {binary} with {description}: {reason}")]
    InvalidPairing {
        binary: ResourceId,
        description: ResourceId,
        reason: &'static str,
    },

    /// The backend could not answer (I/O, session closed, ...)
    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// An incoming reference: `origin` points at a resource through `property`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    pub origin: ResourceId,
    pub property: String,
}

/// Read-only access to the resource graph
pub trait ResourceModel {
    /// Type tags of a resource
    fn type_tags(&self, id: &ResourceId) -> RepositoryResult<TypeTags>;

    /// Values of a property, `None` when the resource lacks it
    fn property(&self, id: &ResourceId, name: &str) -> RepositoryResult<Option<PropertyValues>>;

    /// All properties, in stored order
    fn properties(&self, id: &ResourceId) -> RepositoryResult<Vec<(String, PropertyValues)>>;

    /// Resources holding a reference to `id` under the property `relation`,
    /// in the order the references were written
    fn incoming_references(
        &self,
        id: &ResourceId,
        relation: &str,
    ) -> RepositoryResult<Vec<Reference>>;

    /// Children in their natural order
    fn children(&self, id: &ResourceId) -> RepositoryResult<Vec<ResourceId>>;

    fn parent(&self, id: &ResourceId) -> RepositoryResult<Option<ResourceId>>;

    /// For a binary description: the binary it describes
    fn described_binary_of(&self, id: &ResourceId) -> RepositoryResult<Option<ResourceId>>;

    /// For a binary: its description
    fn description_of(&self, id: &ResourceId) -> RepositoryResult<Option<ResourceId>>;

    /// Registry used to map predicates to local property names
    fn namespaces(&self) -> &NamespaceRegistry;

    /// Kind of a resource, classified from its tags
    fn kind(&self, id: &ResourceId) -> RepositoryResult<ResourceKind> {
        Ok(ResourceKind::classify(&self.type_tags(id)?))
    }

    fn has_property(&self, id: &ResourceId, name: &str) -> RepositoryResult<bool> {
        Ok(self.property(id, name)?.is_some())
    }
}
