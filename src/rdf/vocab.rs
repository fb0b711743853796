//! Vocabulary used by the projection contexts

use super::types::{NamedNode, RdfPredicate};

pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const LDP_NS: &str = "http://www.w3.org/ns/ldp#";
pub const FEDORA_NS: &str = "http://fedora.info/definitions/v4/repository#";
pub const IANA_NS: &str = "http://www.iana.org/assignments/relation/";

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

pub const LDP_MEMBER: &str = "http://www.w3.org/ns/ldp#member";
pub const LDP_MEMBER_SUBJECT: &str = "http://www.w3.org/ns/ldp#MemberSubject";
pub const LDP_CONTAINS: &str = "http://www.w3.org/ns/ldp#contains";
pub const LDP_CONTAINER: &str = "http://www.w3.org/ns/ldp#Container";
pub const LDP_BASIC_CONTAINER: &str = "http://www.w3.org/ns/ldp#BasicContainer";
pub const LDP_DIRECT_CONTAINER: &str = "http://www.w3.org/ns/ldp#DirectContainer";
pub const LDP_INDIRECT_CONTAINER: &str = "http://www.w3.org/ns/ldp#IndirectContainer";
pub const LDP_RDF_SOURCE: &str = "http://www.w3.org/ns/ldp#RDFSource";
pub const LDP_NON_RDF_SOURCE: &str = "http://www.w3.org/ns/ldp#NonRDFSource";

pub const FEDORA_HAS_PARENT: &str = "http://fedora.info/definitions/v4/repository#hasParent";

pub const DESCRIBES: &str = "http://www.iana.org/assignments/relation/describes";
pub const DESCRIBED_BY: &str = "http://www.iana.org/assignments/relation/describedby";

/// Predicate for one of the constants above
pub fn predicate(iri: &'static str) -> RdfPredicate {
    RdfPredicate::from(NamedNode::new_unchecked(iri))
}

/// Named node for one of the constants above
pub fn node(iri: &'static str) -> NamedNode {
    NamedNode::new_unchecked(iri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_valid_iris() {
        for iri in [
            RDF_TYPE,
            LDP_MEMBER,
            LDP_MEMBER_SUBJECT,
            LDP_CONTAINS,
            LDP_CONTAINER,
            LDP_BASIC_CONTAINER,
            LDP_DIRECT_CONTAINER,
            LDP_INDIRECT_CONTAINER,
            LDP_RDF_SOURCE,
            LDP_NON_RDF_SOURCE,
            FEDORA_HAS_PARENT,
            DESCRIBES,
            DESCRIBED_BY,
        ] {
            assert!(NamedNode::new(iri).is_ok(), "{} should be a valid IRI", iri);
        }
    }

    #[test]
    fn test_constants_live_in_their_namespaces() {
        assert!(LDP_MEMBER.starts_with(LDP_NS));
        assert!(RDF_TYPE.starts_with(RDF_NS));
        assert!(FEDORA_HAS_PARENT.starts_with(FEDORA_NS));
        assert!(DESCRIBED_BY.starts_with(IANA_NS));
    }
}
