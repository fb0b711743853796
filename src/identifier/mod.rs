//! Identifier translation
//!
//! Maps resource identities to the IRIs they are published under and back.
//! The two directions are separate total functions over the translator's
//! domain, with `reverse(forward(r)) == r` for every resource.

mod translator;

pub use translator::BaseUriTranslator;

use crate::graph::{InvalidPath, ResourceId};
use crate::rdf::NamedNode;
use thiserror::Error;

/// Translation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// Base IRI could not be parsed
    #[error("Invalid base IRI {iri}: {reason}")]
    InvalidBase { iri: String, reason: String },

    /// IRI is not under the translator's base
    #[error("IRI {0} is outside of the repository")]
    OutOfDomain(String),

    /// IRI is under the base but does not name a resource path
    #[error("IRI {iri} does not name a resource: {reason}")]
    InvalidResourceIri { iri: String, reason: String },

    #[error(transparent)]
    InvalidPath(#[from] InvalidPath),
}

pub type TranslationResult<T> = Result<T, TranslationError>;

/// Bidirectional mapping between resources and subject/object IRIs
pub trait IdentifierTranslator {
    /// IRI a resource is published under
    fn forward(&self, id: &ResourceId) -> TranslationResult<NamedNode>;

    /// Resource published under an IRI
    fn reverse(&self, iri: &NamedNode) -> TranslationResult<ResourceId>;

    /// Whether an IRI lies within this translator's domain
    fn in_domain(&self, iri: &NamedNode) -> bool {
        self.reverse(iri).is_ok()
    }
}
