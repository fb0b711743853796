//! Base-IRI identifier translator

use super::{IdentifierTranslator, TranslationError, TranslationResult};
use crate::graph::ResourceId;
use crate::rdf::NamedNode;
use oxiri::Iri;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a path segment. `%` is included so decoding
/// restores the segment exactly.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Publishes resource `/a/b` as `{base}/a/b`, percent-encoding each segment
#[derive(Debug, Clone)]
pub struct BaseUriTranslator {
    /// Base IRI without a trailing slash
    base: String,
}

impl BaseUriTranslator {
    pub fn new(base: &str) -> TranslationResult<Self> {
        let parsed = Iri::parse(base.to_string()).map_err(|e| TranslationError::InvalidBase {
            iri: base.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(TranslationError::InvalidBase {
                iri: base.to_string(),
                reason: "base must not carry a query or fragment".to_string(),
            });
        }
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl IdentifierTranslator for BaseUriTranslator {
    fn forward(&self, id: &ResourceId) -> TranslationResult<NamedNode> {
        let mut iri = self.base.clone();
        if id.is_root() {
            iri.push('/');
        }
        for segment in id.segments() {
            iri.push('/');
            iri.extend(utf8_percent_encode(segment, SEGMENT));
        }
        NamedNode::new(iri.as_str()).map_err(|e| TranslationError::InvalidResourceIri {
            iri,
            reason: e.to_string(),
        })
    }

    fn reverse(&self, iri: &NamedNode) -> TranslationResult<ResourceId> {
        let value = iri.as_str();
        let path = value
            .strip_prefix(self.base.as_str())
            .ok_or_else(|| TranslationError::OutOfDomain(value.to_string()))?;
        if path.is_empty() || path == "/" {
            return Ok(ResourceId::root());
        }
        if !path.starts_with('/') {
            return Err(TranslationError::OutOfDomain(value.to_string()));
        }
        if path.contains(['?', '#']) {
            return Err(TranslationError::InvalidResourceIri {
                iri: value.to_string(),
                reason: "query strings and fragments do not name resources".to_string(),
            });
        }

        let mut decoded = String::with_capacity(path.len());
        for segment in path[1..].split('/') {
            let segment = percent_decode_str(segment).decode_utf8().map_err(|e| {
                TranslationError::InvalidResourceIri {
                    iri: value.to_string(),
                    reason: e.to_string(),
                }
            })?;
            decoded.push('/');
            decoded.push_str(&segment);
        }
        Ok(ResourceId::new(decoded)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> BaseUriTranslator {
        BaseUriTranslator::new("http://localhost:8080/rest/").unwrap()
    }

    fn id(path: &str) -> ResourceId {
        ResourceId::new(path).unwrap()
    }

    #[test]
    fn test_forward() {
        let t = translator();
        assert_eq!(t.base(), "http://localhost:8080/rest");
        assert_eq!(
            t.forward(&id("/a/b")).unwrap().as_str(),
            "http://localhost:8080/rest/a/b"
        );
        assert_eq!(
            t.forward(&ResourceId::root()).unwrap().as_str(),
            "http://localhost:8080/rest/"
        );
        assert_eq!(
            t.forward(&id("/a b/c#d")).unwrap().as_str(),
            "http://localhost:8080/rest/a%20b/c%23d"
        );
    }

    #[test]
    fn test_reverse() {
        let t = translator();
        let iri = NamedNode::new("http://localhost:8080/rest/a%20b/c").unwrap();
        assert_eq!(t.reverse(&iri).unwrap(), id("/a b/c"));

        let root = NamedNode::new("http://localhost:8080/rest").unwrap();
        assert_eq!(t.reverse(&root).unwrap(), ResourceId::root());
    }

    #[test]
    fn test_reverse_rejects_foreign_iris() {
        let t = translator();
        for iri in [
            "http://example.org/a",
            "http://localhost:8080/restful/a",
        ] {
            let iri = NamedNode::new(iri).unwrap();
            assert!(matches!(t.reverse(&iri), Err(TranslationError::OutOfDomain(_))));
            assert!(!t.in_domain(&iri));
        }

        let query = NamedNode::new("http://localhost:8080/rest/a?x=1").unwrap();
        assert!(matches!(
            t.reverse(&query),
            Err(TranslationError::InvalidResourceIri { .. })
        ));
        let empty_segment = NamedNode::new("http://localhost:8080/rest/a//b").unwrap();
        assert!(matches!(
            t.reverse(&empty_segment),
            Err(TranslationError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_round_trip() {
        let t = translator();
        for path in [
            "/",
            "/a",
            "/a/b/c",
            "/file/fcr:metadata",
            "/100%/done",
            "/spaces in/names",
            "/ünïcödé/名前",
            "/q?/h#/p|[x]",
        ] {
            let resource = id(path);
            let iri = t.forward(&resource).unwrap();
            assert_eq!(t.reverse(&iri).unwrap(), resource, "round trip of {}", path);
        }
    }

    #[test]
    fn test_invalid_base() {
        assert!(matches!(
            BaseUriTranslator::new("not a base"),
            Err(TranslationError::InvalidBase { .. })
        ));
        assert!(matches!(
            BaseUriTranslator::new("http://localhost/rest#frag"),
            Err(TranslationError::InvalidBase { .. })
        ));
    }
}
