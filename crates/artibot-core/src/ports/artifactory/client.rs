//! Artifactory client port trait.

use super::error::ArtifactoryPortResult;
use super::types::{BuildRecord, PromotionOptions, PromotionResponse, RepositorySummary};
use async_trait::async_trait;

/// Port trait for Artifactory operations.
///
/// This trait defines the interface that the promotion workflow uses to
/// talk to Artifactory. The implementation lives in `artibot-artifactory`.
///
/// # Design
///
/// - Uses core-owned DTOs, not Artifactory wire types
/// - Returns `ArtifactoryPortError` for all failures
/// - No retries: every call maps to exactly one request
#[async_trait]
pub trait ArtifactoryPort: Send + Sync {
    /// Look up build `number` of build `name`.
    ///
    /// Fails with `ArtifactoryPortError::BuildNotFound` if no such build exists.
    async fn find_build(&self, name: &str, number: &str) -> ArtifactoryPortResult<BuildRecord>;

    /// Promote a build into `target_repo`.
    ///
    /// With `options.dry_run` set, Artifactory only validates the promotion
    /// and reports blocking problems in the response messages.
    async fn promote_build(
        &self,
        build: &BuildRecord,
        target_repo: &str,
        options: &PromotionOptions,
    ) -> ArtifactoryPortResult<PromotionResponse>;

    /// List every repository on the server, in server order.
    async fn list_repositories(&self) -> ArtifactoryPortResult<Vec<RepositorySummary>>;
}
