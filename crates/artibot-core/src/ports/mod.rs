//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or `url` types in any signature
//! - One method per remote operation, no hidden retries
//! - DTOs are decoded once, at the adapter boundary

pub mod artifactory;

use thiserror::Error;

pub use artifactory::{
    ArtifactoryPort, ArtifactoryPortError, ArtifactoryPortResult, BuildRecord, PromotionMessage,
    PromotionOptions, PromotionResponse, RepositorySummary,
};

use crate::settings::SettingsError;

/// Core error type for service operations.
///
/// A rejected dry run is not an error: it is a `PromotionOutcome::Failure`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The build to promote does not exist.
    #[error("No build found for {project} {version}")]
    BuildNotFound {
        /// Build name
        project: String,
        /// Build number
        version: String,
    },

    /// Any other failure talking to Artifactory.
    #[error("Artifactory error: {0}")]
    Artifactory(ArtifactoryPortError),

    /// Settings validation error.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

impl From<ArtifactoryPortError> for CoreError {
    fn from(err: ArtifactoryPortError) -> Self {
        match err {
            ArtifactoryPortError::BuildNotFound { name, number } => Self::BuildNotFound {
                project: name,
                version: number,
            },
            other => Self::Artifactory(other),
        }
    }
}
