//! Plain property triples

use super::stream::{self, TripleStream};
use super::value::ValueConverter;
use super::RdfContext;
use crate::error::ProjectionResult;
use crate::graph::{ResourceId, ResourceModel};
use crate::identifier::IdentifierTranslator;
use crate::rdf::{NamespaceRegistry, RdfPredicate, Triple};
use tracing::trace;

/// One triple per stored property value
///
/// Property names are expanded to predicates through the namespace
/// registry; a reference variant (`name_ref`) is published under the
/// predicate of its base name. Names that do not expand are internal and
/// skipped.
pub struct PropertiesRdfContext<'m, M: ResourceModel + ?Sized> {
    model: &'m M,
    namespaces: &'m NamespaceRegistry,
}

impl<'m, M: ResourceModel + ?Sized> PropertiesRdfContext<'m, M> {
    pub fn new(model: &'m M, namespaces: &'m NamespaceRegistry) -> Self {
        Self { model, namespaces }
    }

    fn predicate_for(&self, name: &str) -> Option<RdfPredicate> {
        let base = self.namespaces.base_property_name(name).unwrap_or(name);
        let iri = self.namespaces.expand(base).ok()?;
        RdfPredicate::new(iri).ok()
    }

    fn property_triples(
        &self,
        resource: &ResourceId,
        translator: &dyn IdentifierTranslator,
    ) -> ProjectionResult<Vec<Triple>> {
        let topic = translator.forward(resource)?;
        let mut triples = Vec::new();
        for (name, values) in self.model.properties(resource)? {
            let Some(predicate) = self.predicate_for(&name) else {
                trace!("Skipping property {} on {}", name, resource);
                continue;
            };
            let converter = ValueConverter::new(translator, resource, &name);
            for object in converter.convert_all(&values)? {
                triples.push(Triple::new(topic.clone(), predicate.clone(), object));
            }
        }
        Ok(triples)
    }
}

impl<'m, M: ResourceModel + ?Sized> RdfContext for PropertiesRdfContext<'m, M> {
    fn name(&self) -> &'static str {
        "properties"
    }

    fn triples_for<'a>(
        &'a self,
        resource: &'a ResourceId,
        translator: &'a dyn IdentifierTranslator,
    ) -> TripleStream<'a> {
        stream::batch(move || self.property_triples(resource, translator))
    }
}
