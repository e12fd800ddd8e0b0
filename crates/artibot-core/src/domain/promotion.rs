//! Promotion requests and their outcomes.

use serde::{Deserialize, Serialize};

use super::identity::ChatUser;

/// Repository every promotion targets, whatever the command names.
pub const STABLE_REPO: &str = "omnibus-stable-local";

/// Build status recorded on promotion.
pub const PROMOTION_STATUS: &str = "STABLE";

/// Audit comment attached to every promotion.
pub const PROMOTION_COMMENT: &str = "Promoted using the artibot artifactory handler. ChatOps FTW!";

/// A request to promote one build, as parsed from a chat command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionRequest {
    /// Build name (e.g. `chef-server`).
    pub project: String,
    /// Build number (e.g. `12.1.0`).
    pub version: String,
    /// Repository named after `from` in the command.
    pub source_repo: String,
    /// Repository named after `to` in the command.
    ///
    /// Kept for the audit log only: the promotion itself always goes to
    /// [`STABLE_REPO`].
    pub dest_repo: String,
    /// Who asked for the promotion.
    pub acting_user: ChatUser,
}

impl PromotionRequest {
    pub fn new(
        project: impl Into<String>,
        version: impl Into<String>,
        source_repo: impl Into<String>,
        dest_repo: impl Into<String>,
        acting_user: ChatUser,
    ) -> Self {
        Self {
            project: project.into(),
            version: version.into(),
            source_repo: source_repo.into(),
            dest_repo: dest_repo.into(),
            acting_user,
        }
    }

    /// Whether the command asked for a destination other than the stable repo.
    pub fn dest_differs_from_target(&self) -> bool {
        self.dest_repo != STABLE_REPO
    }
}

/// Result of a promotion attempt that reached the dry-run stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PromotionOutcome {
    /// Dry run was clean and the promotion was committed.
    Success {
        /// `<base_path>/<project>/<version>`
        artifact_path: String,
        /// Link to the promoted artifacts in the Artifactory web UI.
        browsable_url: String,
    },
    /// Dry run reported problems; nothing was committed.
    Failure {
        /// Message texts in the order Artifactory returned them.
        messages: Vec<String>,
    },
}

impl PromotionOutcome {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Join `base_path`, `project` and `version` with single slashes.
pub fn artifact_path(base_path: &str, project: &str, version: &str) -> String {
    let mut path = String::with_capacity(base_path.len() + project.len() + version.len() + 2);
    let leading = base_path.starts_with('/');
    for part in [base_path, project, version] {
        let part = part.trim_matches('/');
        if part.is_empty() {
            continue;
        }
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(part);
    }
    if leading {
        path.insert(0, '/');
    }
    path
}

/// Web UI link for an artifact path inside [`STABLE_REPO`].
pub fn browse_url(endpoint: &str, artifact_path: &str) -> String {
    format!(
        "{}/webapp/browserepo.html?pathId={STABLE_REPO}:{artifact_path}",
        endpoint.trim_end_matches('/')
    )
}
