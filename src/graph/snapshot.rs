//! Repository snapshots
//!
//! A serializable description of a repository, used to seed a
//! [`ResourceStore`] from YAML or JSON fixtures.

use super::model::RepositoryError;
use super::property::PropertyValues;
use super::store::ResourceStore;
use super::types::{ResourceId, TypeTag};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML snapshot: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported snapshot format: {0}")]
    UnsupportedFormat(String),

    #[error("Snapshot does not describe a consistent repository: {0}")]
    Repository(#[from] RepositoryError),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// One resource in a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSpec {
    pub path: ResourceId,

    #[serde(default)]
    pub tags: Vec<TypeTag>,

    #[serde(default)]
    pub properties: IndexMap<String, PropertyValues>,

    /// For a binary: path of its description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub described_by: Option<ResourceId>,
}

/// Serializable repository contents
///
/// Resources are listed parent first; the root always exists and may be
/// listed to give it tags or properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositorySnapshot {
    /// Extra namespace prefixes, on top of the defaults
    #[serde(default)]
    pub namespaces: IndexMap<String, String>,

    #[serde(default)]
    pub resources: Vec<ResourceSpec>,
}

impl RepositorySnapshot {
    pub fn from_yaml_str(s: &str) -> SnapshotResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> SnapshotResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a snapshot, choosing the format from the file extension
    pub fn load(path: impl AsRef<Path>) -> SnapshotResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents),
            Some("json") => Self::from_json_str(&contents),
            other => Err(SnapshotError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    /// Build a store holding these resources
    pub fn into_store(self) -> SnapshotResult<ResourceStore> {
        let mut store = ResourceStore::new();
        for (prefix, iri) in self.namespaces {
            store.namespaces_mut().add_prefix(prefix, iri);
        }

        let mut pairings = Vec::new();
        for spec in &self.resources {
            if spec.path.is_root() {
                for tag in &spec.tags {
                    store.add_tag(&spec.path, tag.clone())?;
                }
            } else {
                store.create_resource(spec.path.as_str(), spec.tags.iter().cloned())?;
            }
            if let Some(description) = &spec.described_by {
                pairings.push((spec.path.clone(), description.clone()));
            }
        }
        // References may point forward, so properties go in after every
        // resource exists
        for spec in self.resources {
            for (name, values) in spec.properties {
                store.set_property(&spec.path, name, values)?;
            }
        }
        for (binary, description) in pairings {
            store.pair_binary(&binary, &description)?;
        }

        info!("Loaded snapshot with {} resources", store.len());
        Ok(store)
    }
}
