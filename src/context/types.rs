//! rdf:type triples

use super::stream::{self, TripleStream};
use super::RdfContext;
use crate::error::ProjectionResult;
use crate::graph::{ContainerKind, ResourceId, ResourceKind, ResourceModel};
use crate::identifier::IdentifierTranslator;
use crate::rdf::{vocab, Triple};

/// Types a resource as an LDP container, non-RDF source or RDF source
pub struct TypeRdfContext<'m, M: ResourceModel + ?Sized> {
    model: &'m M,
}

impl<'m, M: ResourceModel + ?Sized> TypeRdfContext<'m, M> {
    pub fn new(model: &'m M) -> Self {
        Self { model }
    }

    fn types(
        &self,
        resource: &ResourceId,
        translator: &dyn IdentifierTranslator,
    ) -> ProjectionResult<Vec<Triple>> {
        let classes: &[&'static str] = match self.model.kind(resource)? {
            ResourceKind::Container(kind) => match kind {
                ContainerKind::Basic => &[vocab::LDP_CONTAINER, vocab::LDP_BASIC_CONTAINER],
                ContainerKind::Direct => &[vocab::LDP_CONTAINER, vocab::LDP_DIRECT_CONTAINER],
                ContainerKind::Indirect => &[vocab::LDP_CONTAINER, vocab::LDP_INDIRECT_CONTAINER],
            },
            ResourceKind::Binary => &[vocab::LDP_NON_RDF_SOURCE],
            ResourceKind::BinaryDescription | ResourceKind::Plain => &[vocab::LDP_RDF_SOURCE],
        };

        let topic = translator.forward(resource)?;
        Ok(classes
            .iter()
            .map(|&class| {
                Triple::new(
                    topic.clone(),
                    vocab::predicate(vocab::RDF_TYPE),
                    vocab::node(class),
                )
            })
            .collect())
    }
}

impl<'m, M: ResourceModel + ?Sized> RdfContext for TypeRdfContext<'m, M> {
    fn name(&self) -> &'static str {
        "type"
    }

    fn triples_for<'a>(
        &'a self,
        resource: &'a ResourceId,
        translator: &'a dyn IdentifierTranslator,
    ) -> TripleStream<'a> {
        stream::batch(move || self.types(resource, translator))
    }
}
