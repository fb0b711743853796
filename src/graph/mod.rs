//! Repository resource graph
//!
//! The hierarchical, property-bearing graph that gets projected to RDF:
//! - Resources identified by path, with type tags and ordered children
//! - Multi-valued properties holding references, pseudo-references or literals
//! - The [`ResourceModel`] trait the projection reads through
//! - An in-memory [`ResourceStore`] backend, seeded from snapshots

pub mod model;
pub mod property;
pub mod resource;
pub mod snapshot;
pub mod store;
pub mod types;

// Re-export main types
pub use model::{Reference, RepositoryError, RepositoryResult, ResourceModel};
pub use property::{PropertyValue, PropertyValues};
pub use resource::Resource;
pub use snapshot::{RepositorySnapshot, ResourceSpec, SnapshotError, SnapshotResult};
pub use store::ResourceStore;
pub use types::{tags, ContainerKind, InvalidPath, ResourceId, ResourceKind, TypeTag, TypeTags};

/// Property naming the resource a container reports membership about
pub const MEMBERSHIP_RESOURCE: &str = "ldp:membershipResource";

/// Property holding a container's membership predicate
pub const HAS_MEMBER_RELATION: &str = "ldp:hasMemberRelation";

/// Property holding an indirect container's inserted content relation
pub const INSERTED_CONTENT_RELATION: &str = "ldp:insertedContentRelation";
