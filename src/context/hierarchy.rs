//! Parent and containment triples

use super::stream::{self, TripleStream};
use super::RdfContext;
use crate::error::ProjectionResult;
use crate::graph::{ResourceId, ResourceKind, ResourceModel};
use crate::identifier::IdentifierTranslator;
use crate::rdf::{vocab, Triple};

/// `fedora:hasParent` to the parent, `ldp:contains` to each child
///
/// Binaries contain nothing. A child that is a binary description is
/// published as the binary it describes.
pub struct HierarchyRdfContext<'m, M: ResourceModel + ?Sized> {
    model: &'m M,
}

impl<'m, M: ResourceModel + ?Sized> HierarchyRdfContext<'m, M> {
    pub fn new(model: &'m M) -> Self {
        Self { model }
    }

    fn hierarchy(
        &self,
        resource: &ResourceId,
        translator: &dyn IdentifierTranslator,
    ) -> ProjectionResult<Vec<Triple>> {
        let topic = translator.forward(resource)?;
        let mut triples = Vec::new();

        if let Some(parent) = self.model.parent(resource)? {
            triples.push(Triple::new(
                topic.clone(),
                vocab::predicate(vocab::FEDORA_HAS_PARENT),
                translator.forward(&parent)?,
            ));
        }

        if self.model.kind(resource)? == ResourceKind::Binary {
            return Ok(triples);
        }
        for child in self.model.children(resource)? {
            let member = match self.model.kind(&child)? {
                ResourceKind::BinaryDescription => {
                    self.model.described_binary_of(&child)?.unwrap_or(child)
                }
                _ => child,
            };
            triples.push(Triple::new(
                topic.clone(),
                vocab::predicate(vocab::LDP_CONTAINS),
                translator.forward(&member)?,
            ));
        }
        Ok(triples)
    }
}

impl<'m, M: ResourceModel + ?Sized> RdfContext for HierarchyRdfContext<'m, M> {
    fn name(&self) -> &'static str {
        "hierarchy"
    }

    fn triples_for<'a>(
        &'a self,
        resource: &'a ResourceId,
        translator: &'a dyn IdentifierTranslator,
    ) -> TripleStream<'a> {
        stream::batch(move || self.hierarchy(resource, translator))
    }
}
