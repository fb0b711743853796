//! LDP Projection
//!
//! Projects the resources of a hierarchical content repository to RDF, the
//! way a Linked Data Platform server publishes them.
//!
//! # Architecture
//!
//! - [`graph`]: the repository model (resources, type tags, properties,
//!   children, binary pairings) behind the [`ResourceModel`] trait, with an
//!   in-memory [`ResourceStore`] and YAML/JSON snapshots
//! - [`identifier`]: translation between resource paths and public IRIs
//! - [`rdf`]: triples, vocabulary and namespace prefixes
//! - [`context`]: independent producers of triples about one topic,
//!   most notably LDP membership for direct and indirect containers
//! - [`projection`]: composition of contexts into one lazy triple stream
//!
//! ## Example Usage
//!
//! ```rust
//! use ldp_projection::{Projection, ProjectionConfig, ResourceId, ResourceStore};
//! use ldp_projection::graph::PropertyValue;
//!
//! let mut store = ResourceStore::new();
//! let shelf = store.create_resource("/shelf", ["direct-container"]).unwrap();
//! store.create_resource("/shelf/dune", ["container"]).unwrap();
//! store
//!     .set_property(&shelf, "ldp:membershipResource", vec![PropertyValue::Reference(ResourceId::root())])
//!     .unwrap();
//! store
//!     .set_property(&shelf, "ldp:hasMemberRelation", vec![PropertyValue::Uri("http://purl.org/dc/terms/hasPart".into())])
//!     .unwrap();
//!
//! let config = ProjectionConfig::default();
//! let translator = config.translator().unwrap();
//! let projection = Projection::core(&store);
//!
//! let triples = projection.project_all(&ResourceId::root(), &translator).unwrap();
//! assert_eq!(
//!     triples[0].to_string(),
//!     "<http://localhost:8080/rest/> <http://purl.org/dc/terms/hasPart> <http://localhost:8080/rest/shelf/dune> ."
//! );
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod context;
pub mod error;
pub mod graph;
pub mod identifier;
pub mod projection;
pub mod rdf;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigResult, ContextKind, ProjectionConfig};

pub use context::{
    ContentRdfContext, HierarchyRdfContext, LdpContainerRdfContext, MembershipSubject,
    PropertiesRdfContext, RdfContext, TripleStream, TypeRdfContext,
};

pub use error::{ProjectionError, ProjectionResult};

pub use graph::{
    PropertyValue, RepositoryError, RepositoryResult, RepositorySnapshot, ResourceId,
    ResourceKind, ResourceModel, ResourceStore,
};

pub use identifier::{BaseUriTranslator, IdentifierTranslator, TranslationError};

pub use projection::Projection;

pub use rdf::{NamedNode, NamespaceRegistry, RdfObject, RdfPredicate, Triple};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
