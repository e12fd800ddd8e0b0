//! Core-owned DTOs for Artifactory operations.
//!
//! These types cross the boundary between `artibot-artifactory` and the
//! services. They carry only what the promotion workflow needs, not the full
//! Artifactory wire format.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A build known to Artifactory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRecord {
    /// Build name
    pub name: String,
    /// Build number
    pub number: String,
    /// Build start time as reported by Artifactory
    pub started: Option<String>,
    /// CI URL recorded with the build
    pub url: Option<String>,
}

impl BuildRecord {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            started: None,
            url: None,
        }
    }
}

/// Parameters of a build promotion.
///
/// Defaults match the Artifactory build-promotion API: move (not copy) the
/// build artifacts, leave dependencies alone, stop at the first failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionOptions {
    /// Status recorded on the build (e.g. `STABLE`).
    pub status: String,
    /// Free-text audit comment.
    pub comment: String,
    /// Who performed the promotion.
    pub ci_user: String,
    /// When the promotion was requested.
    pub timestamp: DateTime<Utc>,
    /// Validate only, do not commit.
    pub dry_run: bool,
    /// Copy instead of move.
    pub copy: bool,
    /// Promote the build artifacts.
    pub artifacts: bool,
    /// Promote the build dependencies.
    pub dependencies: bool,
    /// Dependency scopes to promote when `dependencies` is set.
    pub scopes: Vec<String>,
    /// Properties to attach to promoted artifacts.
    pub properties: BTreeMap<String, Vec<String>>,
    /// Abort on the first error.
    pub fail_fast: bool,
}

impl PromotionOptions {
    /// Options for a committing promotion with API defaults.
    pub fn new(
        status: impl Into<String>,
        comment: impl Into<String>,
        ci_user: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            status: status.into(),
            comment: comment.into(),
            ci_user: ci_user.into(),
            timestamp,
            dry_run: false,
            copy: false,
            artifacts: true,
            dependencies: false,
            scopes: Vec::new(),
            properties: BTreeMap::new(),
            fail_fast: true,
        }
    }

    /// The same options with the dry-run flag set to `dry_run`.
    #[must_use]
    pub fn with_dry_run(&self, dry_run: bool) -> Self {
        Self {
            dry_run,
            ..self.clone()
        }
    }
}

/// One message from a promotion response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionMessage {
    /// Severity as reported by Artifactory (`error`, `warning`, ...).
    pub level: Option<String>,
    /// Human-readable text.
    pub message: String,
}

impl PromotionMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            level: None,
            message: message.into(),
        }
    }
}

/// Response to a promotion call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionResponse {
    /// Problems found. Empty means the promotion is (or would be) clean.
    #[serde(default)]
    pub messages: Vec<PromotionMessage>,
}

impl PromotionResponse {
    pub fn with_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            messages: messages.into_iter().map(PromotionMessage::new).collect(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }

    /// Message texts in response order.
    pub fn message_texts(&self) -> Vec<String> {
        self.messages.iter().map(|m| m.message.clone()).collect()
    }
}

/// Summary of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Unique repository key
    pub key: String,
    /// `LOCAL`, `REMOTE`, `VIRTUAL`, ...
    pub repo_type: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Repository URL
    pub url: Option<String>,
}

impl RepositorySummary {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            repo_type: None,
            description: None,
            url: None,
        }
    }
}
