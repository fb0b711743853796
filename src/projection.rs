//! Projection of a resource to RDF
//!
//! Composes the configured contexts into one lazy stream per topic. The
//! stream is single-pass; run `project` again for a fresh one.

use crate::config::{ContextKind, ProjectionConfig};
use crate::context::{
    ContentRdfContext, FailFast, HierarchyRdfContext, LdpContainerRdfContext,
    PropertiesRdfContext, RdfContext, TripleStream, TypeRdfContext,
};
use crate::error::ProjectionResult;
use crate::graph::{ResourceId, ResourceModel};
use crate::identifier::IdentifierTranslator;
use crate::rdf::Triple;
use tracing::debug;

/// Ordered set of contexts projecting resources of one model
pub struct Projection<'m> {
    contexts: Vec<Box<dyn RdfContext + 'm>>,
}

impl<'m> Projection<'m> {
    /// Compose the contexts named by `config`
    pub fn new<M>(model: &'m M, config: &ProjectionConfig) -> Self
    where
        M: ResourceModel + ?Sized + 'm,
    {
        let namespaces = model.namespaces();
        let contexts = config
            .contexts
            .iter()
            .map(|kind| -> Box<dyn RdfContext + 'm> {
                match kind {
                    ContextKind::Type => Box::new(TypeRdfContext::new(model)),
                    ContextKind::Properties => {
                        Box::new(PropertiesRdfContext::new(model, namespaces))
                    }
                    ContextKind::Hierarchy => Box::new(HierarchyRdfContext::new(model)),
                    ContextKind::Content => Box::new(ContentRdfContext::new(model)),
                    ContextKind::LdpContainer => Box::new(
                        LdpContainerRdfContext::new(model, namespaces)
                            .with_subject(config.membership_subject),
                    ),
                }
            })
            .collect();
        Self { contexts }
    }

    /// Only the binary pairing and LDP membership contexts
    pub fn core<M>(model: &'m M) -> Self
    where
        M: ResourceModel + ?Sized + 'm,
    {
        let config = ProjectionConfig {
            contexts: vec![ContextKind::Content, ContextKind::LdpContainer],
            ..Default::default()
        };
        Self::new(model, &config)
    }

    /// Compose arbitrary contexts
    pub fn with_contexts(contexts: Vec<Box<dyn RdfContext + 'm>>) -> Self {
        Self { contexts }
    }

    pub fn context_names(&self) -> Vec<&'static str> {
        self.contexts.iter().map(|c| c.name()).collect()
    }

    /// Lazy stream of every triple the contexts produce for `resource`
    ///
    /// Contexts run in order; the stream ends after the first error.
    pub fn project<'a>(
        &'a self,
        resource: &'a ResourceId,
        translator: &'a dyn IdentifierTranslator,
    ) -> TripleStream<'a> {
        debug!(
            "Projecting {} through {} contexts",
            resource,
            self.contexts.len()
        );
        let triples = self.contexts.iter().flat_map(move |context| {
            debug!("Running {} context for {}", context.name(), resource);
            context.triples_for(resource, translator)
        });
        Box::new(FailFast::new(triples))
    }

    /// Collect the projection, failing on the first error
    pub fn project_all(
        &self,
        resource: &ResourceId,
        translator: &dyn IdentifierTranslator,
    ) -> ProjectionResult<Vec<Triple>> {
        self.project(resource, translator).collect()
    }
}
