//! RDF primitives for projection output
//!
//! - Terms and triples wrapping oxrdf
//! - The vocabulary the projection contexts emit
//! - The namespace registry that maps predicates to stored property names
//!
//! # Example
//!
//! ```rust
//! use ldp_projection::rdf::{Literal, NamedNode, RdfPredicate, Triple};
//!
//! let subject = NamedNode::new("http://example.org/alice").unwrap();
//! let predicate = RdfPredicate::new("http://xmlns.com/foaf/0.1/name").unwrap();
//! let triple = Triple::new(subject, predicate, Literal::new_simple_literal("Alice"));
//!
//! assert!(triple.object.is_literal());
//! ```

mod namespace;
mod types;
pub mod vocab;

pub use types::{Literal, NamedNode, RdfError, RdfObject, RdfPredicate, RdfResult, Triple};

pub use namespace::{
    Namespace, NamespaceRegistry, PrefixError, PrefixResult, REFERENCE_PROPERTY_SUFFIX,
};
