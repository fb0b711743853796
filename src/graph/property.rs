//! Property value types for repository resources

use super::types::ResourceId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single stored property value
///
/// - `Reference`: graph-typed link to another resource; counted by
///   incoming-reference lookups
/// - `Uri`: pseudo-reference, a URI kept as a string
/// - literals: String, Integer, Float, Boolean, DateTime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    Reference(ResourceId),
    Uri(String),
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(i64), // Unix timestamp in milliseconds
}

impl PropertyValue {
    /// Target of a graph-typed reference
    pub fn as_reference(&self) -> Option<&ResourceId> {
        match self {
            PropertyValue::Reference(id) => Some(id),
            _ => None,
        }
    }

    /// String content of a `Uri` or `String` value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Uri(s) | PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, PropertyValue::Reference(_))
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Reference(_) => "Reference",
            PropertyValue::Uri(_) => "Uri",
            PropertyValue::String(_) => "String",
            PropertyValue::Integer(_) => "Integer",
            PropertyValue::Float(_) => "Float",
            PropertyValue::Boolean(_) => "Boolean",
            PropertyValue::DateTime(_) => "DateTime",
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Reference(id) => write!(f, "Reference({})", id),
            PropertyValue::Uri(s) => write!(f, "<{}>", s),
            PropertyValue::String(s) => write!(f, "\"{}\"", s),
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Float(fl) => write!(f, "{}", fl),
            PropertyValue::Boolean(b) => write!(f, "{}", b),
            PropertyValue::DateTime(dt) => write!(f, "DateTime({})", dt),
        }
    }
}

// Convenience conversions
impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl From<ResourceId> for PropertyValue {
    fn from(id: ResourceId) -> Self {
        PropertyValue::Reference(id)
    }
}

/// Values of one (possibly multi-valued) property, in stored order
pub type PropertyValues = Vec<PropertyValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_value_types() {
        assert_eq!(
            PropertyValue::Reference(ResourceId::root()).type_name(),
            "Reference"
        );
        assert_eq!(PropertyValue::Uri("urn:x".into()).type_name(), "Uri");
        assert_eq!(PropertyValue::Integer(42).type_name(), "Integer");
        assert_eq!(PropertyValue::DateTime(1234567890).type_name(), "DateTime");
    }

    #[test]
    fn test_property_value_conversions() {
        let string_prop: PropertyValue = "hello".into();
        assert_eq!(string_prop.as_str(), Some("hello"));

        let int_prop: PropertyValue = 42i64.into();
        assert_eq!(int_prop.as_integer(), Some(42));

        let reference: PropertyValue = ResourceId::new("/a").unwrap().into();
        assert!(reference.is_reference());
        assert_eq!(reference.as_str(), None);
        assert_eq!(reference.as_reference().map(|id| id.as_str()), Some("/a"));
    }

    #[test]
    fn test_property_value_serde() {
        let values: PropertyValues = serde_json::from_str(
            r#"[{"reference": "/a"}, {"uri": "http://example.org/x"}, {"string": "foo"}, {"integer": 3}]"#,
        )
        .unwrap();
        assert_eq!(values.len(), 4);
        assert!(values[0].is_reference());
        assert_eq!(values[1], PropertyValue::Uri("http://example.org/x".into()));
        assert_eq!(values[2].as_str(), Some("foo"));
        assert_eq!(values[3].as_integer(), Some(3));
    }
}
