#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod replies;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    ChatUser, PROMOTION_COMMENT, PROMOTION_STATUS, PromotionOutcome, PromotionRequest,
    RepositoryList, STABLE_REPO,
};
pub use ports::{
    ArtifactoryPort, ArtifactoryPortError, ArtifactoryPortResult, BuildRecord, CoreError,
    PromotionMessage, PromotionOptions, PromotionResponse, RepositorySummary,
};
pub use services::{ArtifactoryHandler, PromotionService, RepositoryService};
pub use settings::{ArtifactorySettings, DEFAULT_BASE_PATH, SettingsError, validate_settings};

// mockall is exercised by the integration tests under tests/
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
