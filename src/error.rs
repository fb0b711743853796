//! Projection errors

use crate::graph::{RepositoryError, ResourceId};
use crate::identifier::TranslationError;
use thiserror::Error;

/// Errors that abort a projection
///
/// A container lacking its membership configuration is not an error; it is
/// left out of the output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// The resource model could not answer a query
    #[error("Repository access failed: {0}")]
    RepositoryAccess(#[from] RepositoryError),

    /// A property did not hold the shape of value it must hold
    #[error("Malformed value in {property} on {resource}: {reason}")]
    MalformedPropertyValue {
        resource: ResourceId,
        property: String,
        reason: String,
    },

    #[error("Identifier translation failed: {0}")]
    Translation(#[from] TranslationError),
}

impl ProjectionError {
    pub fn malformed(
        resource: &ResourceId,
        property: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ProjectionError::MalformedPropertyValue {
            resource: resource.clone(),
            property: property.into(),
            reason: reason.into(),
        }
    }
}

pub type ProjectionResult<T> = Result<T, ProjectionError>;
