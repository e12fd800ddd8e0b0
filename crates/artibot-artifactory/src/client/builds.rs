//! Build lookup and promotion.

use crate::error::{ArtifactoryError, ArtifactoryResult};
use crate::http::HttpBackend;
use crate::models::{BuildInfo, BuildInfoEnvelope, PromotionRequestBody, PromotionResponseBody};
use crate::url::{build_info_url, build_promote_url};
use tracing::debug;

use super::ArtifactoryClient;

impl<B: HttpBackend> ArtifactoryClient<B> {
    /// Fetch build info for `name` / `number`.
    pub(crate) async fn get_build(&self, name: &str, number: &str) -> ArtifactoryResult<BuildInfo> {
        let not_found = || ArtifactoryError::BuildNotFound {
            name: name.to_string(),
            number: number.to_string(),
        };

        // No build can be stored under a `.` or `..` name or number.
        let url = match build_info_url(&self.base_url, name, number) {
            Err(ArtifactoryError::DotSegment(_)) => return Err(not_found()),
            other => other?,
        };
        debug!(%url, "Looking up build");

        match self.backend.get_json::<BuildInfoEnvelope>(&url).await {
            Ok(envelope) => Ok(envelope.build_info),
            Err(ArtifactoryError::ApiRequestFailed { status: 404, .. }) => Err(not_found()),
            Err(e) => Err(e),
        }
    }

    /// Post a promotion for `name` / `number`.
    pub(crate) async fn post_promotion(
        &self,
        name: &str,
        number: &str,
        body: &PromotionRequestBody,
    ) -> ArtifactoryResult<PromotionResponseBody> {
        let url = build_promote_url(&self.base_url, name, number)?;
        debug!(%url, dry_run = body.dry_run, target = %body.target_repo, "Promoting build");
        self.backend.post_json(&url, body).await
    }
}
