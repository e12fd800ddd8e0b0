//! `ArtifactoryHandler` - the facade chat hosts call into.

use std::sync::Arc;

use crate::domain::PromotionRequest;
use crate::ports::{ArtifactoryPort, CoreError};
use crate::replies::{promotion_reply, repositories_reply};
use crate::settings::{ArtifactorySettings, validate_settings};

use super::{PromotionService, RepositoryService};

/// Composes the promotion and repository services over one client and turns
/// their results into chat replies.
///
/// Only a rejected dry run becomes a designed reply. Missing builds and
/// transport failures are returned to the host unchanged.
pub struct ArtifactoryHandler {
    promotions: PromotionService,
    repositories: RepositoryService,
}

impl ArtifactoryHandler {
    /// Create the handler, validating `settings` first.
    pub fn new(
        client: Arc<dyn ArtifactoryPort>,
        settings: &ArtifactorySettings,
    ) -> Result<Self, CoreError> {
        validate_settings(settings)?;
        Ok(Self {
            promotions: PromotionService::new(client.clone(), settings),
            repositories: RepositoryService::new(client),
        })
    }

    /// Access the promotion service.
    pub const fn promotions(&self) -> &PromotionService {
        &self.promotions
    }

    /// Access the repository service.
    pub const fn repositories_service(&self) -> &RepositoryService {
        &self.repositories
    }

    /// Promote a build and render the reply.
    pub async fn promote(&self, request: &PromotionRequest) -> Result<String, CoreError> {
        let outcome = self.promotions.promote(request).await?;
        Ok(promotion_reply(
            request,
            &outcome,
            self.promotions.endpoint(),
        ))
    }

    /// List repositories and render the reply.
    pub async fn repositories(&self) -> Result<String, CoreError> {
        let list = self.repositories.list().await?;
        Ok(repositories_reply(&list))
    }
}
