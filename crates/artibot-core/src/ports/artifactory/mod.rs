//! Artifactory port definitions.
//!
//! This module defines the port trait and DTOs for Artifactory interaction.
//! The actual implementation lives in `artibot-artifactory`.

mod client;
mod error;
mod types;

pub use client::ArtifactoryPort;
pub use error::{ArtifactoryPortError, ArtifactoryPortResult};
pub use types::{
    BuildRecord, PromotionMessage, PromotionOptions, PromotionResponse, RepositorySummary,
};
