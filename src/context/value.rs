//! Conversion of stored property values to RDF object terms

use crate::error::{ProjectionError, ProjectionResult};
use crate::graph::{PropertyValue, ResourceId};
use crate::identifier::IdentifierTranslator;
use crate::rdf::{Literal, NamedNode, RdfObject};
use chrono::{DateTime, SecondsFormat, Utc};
use oxrdf::vocab::xsd;

/// Converts values held by one property of one resource
pub struct ValueConverter<'a> {
    translator: &'a dyn IdentifierTranslator,
    resource: &'a ResourceId,
    property: &'a str,
}

impl<'a> ValueConverter<'a> {
    pub fn new(
        translator: &'a dyn IdentifierTranslator,
        resource: &'a ResourceId,
        property: &'a str,
    ) -> Self {
        Self {
            translator,
            resource,
            property,
        }
    }

    /// References become the target's IRI, pseudo-references their stored
    /// IRI, everything else a typed literal
    pub fn convert(&self, value: &PropertyValue) -> ProjectionResult<RdfObject> {
        let object: RdfObject = match value {
            PropertyValue::Reference(target) => self.translator.forward(target)?.into(),
            PropertyValue::Uri(iri) => NamedNode::new(iri.as_str())
                .map_err(|e| self.malformed(e.to_string()))?
                .into(),
            PropertyValue::String(s) => Literal::new_simple_literal(s.as_str()).into(),
            PropertyValue::Integer(i) => Literal::new_typed_literal(i.to_string(), xsd::LONG).into(),
            PropertyValue::Float(f) => {
                Literal::new_typed_literal(format_double(*f), xsd::DOUBLE).into()
            }
            PropertyValue::Boolean(b) => {
                Literal::new_typed_literal(b.to_string(), xsd::BOOLEAN).into()
            }
            PropertyValue::DateTime(ms) => {
                let instant = DateTime::<Utc>::from_timestamp_millis(*ms)
                    .ok_or_else(|| self.malformed(format!("timestamp {} out of range", ms)))?;
                Literal::new_typed_literal(
                    instant.to_rfc3339_opts(SecondsFormat::Millis, true),
                    xsd::DATE_TIME,
                )
                .into()
            }
        };
        Ok(object)
    }

    /// Convert every value, keeping their order
    pub fn convert_all(&self, values: &[PropertyValue]) -> ProjectionResult<Vec<RdfObject>> {
        values.iter().map(|v| self.convert(v)).collect()
    }

    fn malformed(&self, reason: String) -> ProjectionError {
        ProjectionError::malformed(self.resource, self.property, reason)
    }
}

/// xsd:double lexical form
fn format_double(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f == f64::INFINITY {
        "INF".to_string()
    } else if f == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        format!("{:E}", f)
    }
}
