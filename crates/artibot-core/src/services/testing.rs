//! In-memory `ArtifactoryPort` shared by the service tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{
    ArtifactoryPort, ArtifactoryPortError, ArtifactoryPortResult, BuildRecord, PromotionOptions,
    PromotionResponse, RepositorySummary,
};

/// A recorded `promote_build` call.
#[derive(Debug, Clone)]
pub struct PromoteCall {
    pub build: BuildRecord,
    pub target_repo: String,
    pub options: PromotionOptions,
}

pub struct MockArtifactory {
    builds: Vec<BuildRecord>,
    dry_run_response: PromotionResponse,
    repositories: Vec<RepositorySummary>,
    fail_promote_with: Mutex<Option<ArtifactoryPortError>>,
    pub promote_calls: Mutex<Vec<PromoteCall>>,
}

impl MockArtifactory {
    pub fn new() -> Self {
        Self {
            builds: Vec::new(),
            dry_run_response: PromotionResponse::default(),
            repositories: Vec::new(),
            fail_promote_with: Mutex::new(None),
            promote_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_build(mut self, name: &str, number: &str) -> Self {
        self.builds.push(BuildRecord::new(name, number));
        self
    }

    pub fn with_dry_run_messages(mut self, messages: &[&str]) -> Self {
        self.dry_run_response = PromotionResponse::with_messages(messages.iter().copied());
        self
    }

    pub fn with_repositories(mut self, keys: &[&str]) -> Self {
        self.repositories = keys.iter().map(|k| RepositorySummary::new(*k)).collect();
        self
    }

    pub fn failing_promote(self, err: ArtifactoryPortError) -> Self {
        *self.fail_promote_with.lock().unwrap() = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<PromoteCall> {
        self.promote_calls.lock().unwrap().clone()
    }

    pub fn commit_calls(&self) -> Vec<PromoteCall> {
        self.calls()
            .into_iter()
            .filter(|c| !c.options.dry_run)
            .collect()
    }
}

#[async_trait]
impl ArtifactoryPort for MockArtifactory {
    async fn find_build(&self, name: &str, number: &str) -> ArtifactoryPortResult<BuildRecord> {
        self.builds
            .iter()
            .find(|b| b.name == name && b.number == number)
            .cloned()
            .ok_or_else(|| ArtifactoryPortError::BuildNotFound {
                name: name.to_string(),
                number: number.to_string(),
            })
    }

    async fn promote_build(
        &self,
        build: &BuildRecord,
        target_repo: &str,
        options: &PromotionOptions,
    ) -> ArtifactoryPortResult<PromotionResponse> {
        self.promote_calls.lock().unwrap().push(PromoteCall {
            build: build.clone(),
            target_repo: target_repo.to_string(),
            options: options.clone(),
        });
        if let Some(err) = self.fail_promote_with.lock().unwrap().take() {
            return Err(err);
        }
        if options.dry_run {
            Ok(self.dry_run_response.clone())
        } else {
            Ok(PromotionResponse::default())
        }
    }

    async fn list_repositories(&self) -> ArtifactoryPortResult<Vec<RepositorySummary>> {
        Ok(self.repositories.clone())
    }
}
