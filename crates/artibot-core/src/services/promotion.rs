//! Promotion service - dry-run-then-commit build promotion.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::{
    PROMOTION_COMMENT, PROMOTION_STATUS, PromotionOutcome, PromotionRequest, STABLE_REPO,
    artifact_path, browse_url,
};
use crate::ports::{ArtifactoryPort, CoreError, PromotionOptions};
use crate::settings::ArtifactorySettings;

/// Service that promotes builds into [`STABLE_REPO`].
///
/// A promotion is only committed after a dry run with the same options came
/// back without messages.
pub struct PromotionService {
    client: Arc<dyn ArtifactoryPort>,
    endpoint: String,
    base_path: String,
}

impl PromotionService {
    /// Create a new promotion service over the given client.
    pub fn new(client: Arc<dyn ArtifactoryPort>, settings: &ArtifactorySettings) -> Self {
        Self {
            client,
            endpoint: settings.endpoint_trimmed().to_string(),
            base_path: settings.base_path.clone(),
        }
    }

    /// Endpoint used in browse links and failure replies.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Promote `request.project` / `request.version`.
    ///
    /// A rejected dry run is returned as `PromotionOutcome::Failure`; a
    /// missing build or any transport failure is an error.
    pub async fn promote(&self, request: &PromotionRequest) -> Result<PromotionOutcome, CoreError> {
        if request.dest_differs_from_target() {
            debug!(
                from = %request.source_repo,
                to = %request.dest_repo,
                target = STABLE_REPO,
                "Requested repositories are ignored; promoting to the stable repository"
            );
        }

        let build = self
            .client
            .find_build(&request.project, &request.version)
            .await?;

        let options = PromotionOptions::new(
            PROMOTION_STATUS,
            PROMOTION_COMMENT,
            request.acting_user.audit_label(),
            Utc::now(),
        );

        let dry_run = self
            .client
            .promote_build(&build, STABLE_REPO, &options.with_dry_run(true))
            .await?;

        if !dry_run.is_clean() {
            let messages = dry_run.message_texts();
            warn!(
                project = %request.project,
                version = %request.version,
                count = messages.len(),
                "Dry-run promotion rejected"
            );
            return Ok(PromotionOutcome::Failure { messages });
        }

        let committed = self
            .client
            .promote_build(&build, STABLE_REPO, &options.with_dry_run(false))
            .await?;
        if !committed.is_clean() {
            warn!(
                messages = ?committed.message_texts(),
                "Promotion committed with messages"
            );
        }

        let artifact_path = artifact_path(&self.base_path, &request.project, &request.version);
        let browsable_url = browse_url(&self.endpoint, &artifact_path);

        info!(
            project = %request.project,
            version = %request.version,
            user = %request.acting_user.mention_name,
            repo = STABLE_REPO,
            "Build promoted"
        );

        Ok(PromotionOutcome::Success {
            artifact_path,
            browsable_url,
        })
    }
}
