//! Namespace registry
//!
//! Maps between predicate IRIs and the local property names the repository
//! stores values under. A predicate whose namespace has a registered prefix
//! is stored as `prefix:local`; anything else uses the expanded
//! `{namespace}local` form.

use super::types::NamedNode;
use super::vocab::{FEDORA_NS, IANA_NS, LDP_NS, RDF_NS};
use indexmap::IndexMap;
use thiserror::Error;

/// Suffix of the property that carries the reference-typed variant of a
/// property.
pub const REFERENCE_PROPERTY_SUFFIX: &str = "_ref";

/// Prefix errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefixError {
    /// Unknown prefix
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// Name is neither `prefix:local` nor `{namespace}local`
    #[error("Invalid property name: {0}")]
    InvalidName(String),
}

pub type PrefixResult<T> = Result<T, PrefixError>;

/// Namespace (prefix → IRI mapping)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Prefix
    pub prefix: String,
    /// IRI
    pub iri: String,
}

impl Namespace {
    /// Create a new namespace
    pub fn new(prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            iri: iri.into(),
        }
    }
}

/// Namespace registry with common prefixes
#[derive(Debug, Clone)]
pub struct NamespaceRegistry {
    /// Prefix → IRI mappings, in registration order
    prefixes: IndexMap<String, String>,
}

impl NamespaceRegistry {
    /// Create a registry with the common RDF and repository prefixes
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.add_prefix("rdf", RDF_NS);
        registry.add_prefix("rdfs", "http://www.w3.org/2000/01/rdf-schema#");
        registry.add_prefix("xsd", "http://www.w3.org/2001/XMLSchema#");
        registry.add_prefix("owl", "http://www.w3.org/2002/07/owl#");
        registry.add_prefix("foaf", "http://xmlns.com/foaf/0.1/");
        registry.add_prefix("dc", "http://purl.org/dc/elements/1.1/");
        registry.add_prefix("dcterms", "http://purl.org/dc/terms/");
        registry.add_prefix("ldp", LDP_NS);
        registry.add_prefix("fedora", FEDORA_NS);
        registry.add_prefix("iana", IANA_NS);

        registry
    }

    /// Create a registry without any prefixes
    pub fn empty() -> Self {
        Self {
            prefixes: IndexMap::new(),
        }
    }

    /// Add (or rebind) a prefix
    pub fn add_prefix(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }

    /// Get IRI for a prefix
    pub fn get_iri(&self, prefix: &str) -> PrefixResult<&str> {
        self.prefixes
            .get(prefix)
            .map(|s| s.as_str())
            .ok_or_else(|| PrefixError::UnknownPrefix(prefix.to_string()))
    }

    /// Prefix registered for exactly this namespace IRI
    pub fn prefix_for(&self, namespace: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .find(|(_, iri)| iri.as_str() == namespace)
            .map(|(prefix, _)| prefix.as_str())
    }

    /// Expand a property name (`prefix:local` or `{namespace}local`) to a full IRI
    pub fn expand(&self, name: &str) -> PrefixResult<String> {
        if let Some(rest) = name.strip_prefix('{') {
            let (namespace, local) = rest
                .split_once('}')
                .ok_or_else(|| PrefixError::InvalidName(name.to_string()))?;
            return Ok(format!("{}{}", namespace, local));
        }
        let (prefix, local) = name
            .split_once(':')
            .ok_or_else(|| PrefixError::InvalidName(name.to_string()))?;
        let iri = self.get_iri(prefix)?;
        Ok(format!("{}{}", iri, local))
    }

    /// Compact an IRI using the registered prefixes
    pub fn compact(&self, iri: &str) -> Option<String> {
        let (namespace, local) = split_namespace(iri);
        self.prefix_for(namespace)
            .map(|prefix| format!("{}:{}", prefix, local))
    }

    /// Local property name that values of `predicate` are stored under
    pub fn resolve_local_property_name(&self, predicate: &NamedNode) -> String {
        let iri = predicate.as_str();
        match self.compact(iri) {
            Some(name) => name,
            None => {
                let (namespace, local) = split_namespace(iri);
                format!("{{{}}}{}", namespace, local)
            }
        }
    }

    /// Name of the property holding the reference-typed variant of `name`
    pub fn reference_variant_name(&self, name: &str) -> String {
        format!("{}{}", name, REFERENCE_PROPERTY_SUFFIX)
    }

    /// Base name of a reference variant, or `None` for ordinary names
    pub fn base_property_name<'n>(&self, name: &'n str) -> Option<&'n str> {
        name.strip_suffix(REFERENCE_PROPERTY_SUFFIX)
            .filter(|base| !base.is_empty())
    }

    /// Get all registered prefixes
    pub fn prefixes(&self) -> Vec<Namespace> {
        self.prefixes
            .iter()
            .map(|(prefix, iri)| Namespace::new(prefix.clone(), iri.clone()))
            .collect()
    }
}

impl Default for NamespaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Split an IRI after its last `#` or `/`
fn split_namespace(iri: &str) -> (&str, &str) {
    match iri.rfind(['#', '/']) {
        Some(pos) => iri.split_at(pos + 1),
        None => ("", iri),
    }
}
