//! Binary/description pairing

use super::stream::{self, TripleStream};
use super::RdfContext;
use crate::error::ProjectionResult;
use crate::graph::{ResourceId, ResourceKind, ResourceModel};
use crate::identifier::IdentifierTranslator;
use crate::rdf::{vocab, Triple};
use tracing::trace;

/// Links a binary and the resource that describes it
///
/// A description yields `(topic, describes, binary)`, a binary yields
/// `(topic, describedby, description)`; anything else yields nothing.
pub struct ContentRdfContext<'m, M: ResourceModel + ?Sized> {
    model: &'m M,
}

impl<'m, M: ResourceModel + ?Sized> ContentRdfContext<'m, M> {
    pub fn new(model: &'m M) -> Self {
        Self { model }
    }

    fn pairing(
        &self,
        resource: &ResourceId,
        translator: &dyn IdentifierTranslator,
    ) -> ProjectionResult<Option<Triple>> {
        let (predicate, paired) = match self.model.kind(resource)? {
            ResourceKind::BinaryDescription => {
                (vocab::DESCRIBES, self.model.described_binary_of(resource)?)
            }
            ResourceKind::Binary => (vocab::DESCRIBED_BY, self.model.description_of(resource)?),
            _ => return Ok(None),
        };
        let Some(paired) = paired else {
            trace!("{} has no paired resource", resource);
            return Ok(None);
        };

        let topic = translator.forward(resource)?;
        let object = translator.forward(&paired)?;
        Ok(Some(Triple::new(topic, vocab::predicate(predicate), object)))
    }
}

impl<'m, M: ResourceModel + ?Sized> RdfContext for ContentRdfContext<'m, M> {
    fn name(&self) -> &'static str {
        "content"
    }

    fn triples_for<'a>(
        &'a self,
        resource: &'a ResourceId,
        translator: &'a dyn IdentifierTranslator,
    ) -> TripleStream<'a> {
        stream::deferred(move || self.pairing(resource, translator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ResourceStore;
    use crate::identifier::BaseUriTranslator;

    fn translator() -> BaseUriTranslator {
        BaseUriTranslator::new("http://localhost/rest").unwrap()
    }

    fn paired_store() -> (ResourceStore, ResourceId, ResourceId) {
        let mut store = ResourceStore::new();
        let binary = store.create_resource("/file", ["binary"]).unwrap();
        let description = store
            .create_resource("/file/fcr:metadata", ["binary-description"])
            .unwrap();
        store.pair_binary(&binary, &description).unwrap();
        (store, binary, description)
    }

    fn project(store: &ResourceStore, id: &ResourceId) -> Vec<String> {
        let translator = translator();
        let context = ContentRdfContext::new(store);
        context
            .triples_for(id, &translator)
            .map(|t| t.unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_description_describes_binary() {
        let (store, _, description) = paired_store();
        assert_eq!(
            project(&store, &description),
            vec!["<http://localhost/rest/file/fcr:metadata> <http://www.iana.org/assignments/relation/describes> <http://localhost/rest/file> ."]
        );
    }

    #[test]
    fn test_binary_is_described_by() {
        let (store, binary, _) = paired_store();
        assert_eq!(
            project(&store, &binary),
            vec!["<http://localhost/rest/file> <http://www.iana.org/assignments/relation/describedby> <http://localhost/rest/file/fcr:metadata> ."]
        );
    }

    #[test]
    fn test_plain_resource_is_empty() {
        let mut store = ResourceStore::new();
        let plain = store.create_resource("/plain", ["container"]).unwrap();
        assert!(project(&store, &plain).is_empty());
    }

    #[test]
    fn test_unpaired_binary_is_empty() {
        let mut store = ResourceStore::new();
        let binary = store.create_resource("/file", ["binary"]).unwrap();
        assert!(project(&store, &binary).is_empty());
    }

    #[test]
    fn test_missing_resource_fails() {
        let store = ResourceStore::new();
        let translator = translator();
        let context = ContentRdfContext::new(&store);
        let missing = ResourceId::new("/missing").unwrap();
        let results: Vec<_> = context.triples_for(&missing, &translator).collect();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
    }
}
