//! Projection configuration
//!
//! Loaded from YAML or JSON; every field has a default, so an empty
//! document is a valid configuration.

use crate::context::MembershipSubject;
use crate::identifier::{BaseUriTranslator, TranslationError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid base URI: {0}")]
    InvalidBaseUri(#[from] TranslationError),

    #[error("At least one context must be enabled")]
    NoContexts,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// A context the projection can compose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextKind {
    Type,
    Properties,
    Hierarchy,
    Content,
    LdpContainer,
}

impl ContextKind {
    /// Every context, in default composition order
    pub fn all() -> Vec<Self> {
        vec![
            ContextKind::Type,
            ContextKind::Properties,
            ContextKind::Hierarchy,
            ContextKind::Content,
            ContextKind::LdpContainer,
        ]
    }
}

/// Projection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectionConfig {
    /// IRI resources are published under
    pub base_uri: String,

    /// Contexts to compose, in output order
    pub contexts: Vec<ContextKind>,

    /// Subject of membership triples
    pub membership_subject: MembershipSubject,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            base_uri: "http://localhost:8080/rest".to_string(),
            contexts: ContextKind::all(),
            membership_subject: MembershipSubject::default(),
        }
    }
}

impl ProjectionConfig {
    pub fn from_yaml_str(s: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load and validate a config file, choosing the format from its extension
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents)?,
            Some("json") => Self::from_json_str(&contents)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                ))
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.contexts.is_empty() {
            return Err(ConfigError::NoContexts);
        }
        BaseUriTranslator::new(&self.base_uri)?;
        Ok(())
    }

    /// Translator publishing resources under `base_uri`
    pub fn translator(&self) -> ConfigResult<BaseUriTranslator> {
        Ok(BaseUriTranslator::new(&self.base_uri)?)
    }
}
