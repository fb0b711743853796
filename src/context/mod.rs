//! RDF contexts
//!
//! A context answers one question about a topic resource ("what is it
//! paired with", "which memberships does it carry", ...) as a lazy stream
//! of triples. The topic of every context is `translator.forward(resource)`.
//! Contexts only read from the resource model; re-running one against an
//! unchanged model yields the same triples in the same order.

mod content;
mod hierarchy;
mod ldp_container;
mod properties;
pub mod stream;
mod types;
mod value;

pub use content::ContentRdfContext;
pub use hierarchy::HierarchyRdfContext;
pub use ldp_container::{LdpContainerRdfContext, MembershipSubject, MembershipTriples};
pub use properties::PropertiesRdfContext;
pub use stream::{FailFast, TripleStream};
pub use types::TypeRdfContext;
pub use value::ValueConverter;

use crate::graph::ResourceId;
use crate::identifier::IdentifierTranslator;

/// Producer of triples about a topic resource
pub trait RdfContext {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Triples about `resource`, computed as they are pulled
    fn triples_for<'a>(
        &'a self,
        resource: &'a ResourceId,
        translator: &'a dyn IdentifierTranslator,
    ) -> TripleStream<'a>;
}
