//! Internal API request and response types for the Artifactory REST API.
//!
//! These types are internal to `artibot-artifactory` and are not exposed to
//! consumers. External consumers should use the port DTOs defined in
//! `artibot-core`.

use std::collections::BTreeMap;

use artibot_core::PromotionOptions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp layout Artifactory expects in promotion requests
/// (`yyyy-MM-dd'T'HH:mm:ss.SSSZ`).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

// ============================================================================
// Builds
// ============================================================================

/// Response of `GET /api/build/{name}/{number}`.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildInfoEnvelope {
    #[serde(rename = "buildInfo")]
    pub build_info: BuildInfo,
}

/// The parts of `buildInfo` the promotion workflow uses.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildInfo {
    pub name: String,
    pub number: String,
    pub started: Option<String>,
    pub url: Option<String>,
}

/// Body of `POST /api/build/promote/{name}/{number}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionRequestBody {
    pub status: String,
    pub comment: String,
    pub ci_user: String,
    pub timestamp: String,
    pub dry_run: bool,
    pub target_repo: String,
    pub copy: bool,
    pub artifacts: bool,
    pub dependencies: bool,
    pub scopes: Vec<String>,
    pub properties: BTreeMap<String, Vec<String>>,
    pub fail_fast: bool,
}

impl PromotionRequestBody {
    pub fn new(target_repo: &str, options: &PromotionOptions) -> Self {
        Self {
            status: options.status.clone(),
            comment: options.comment.clone(),
            ci_user: options.ci_user.clone(),
            timestamp: format_timestamp(&options.timestamp),
            dry_run: options.dry_run,
            target_repo: target_repo.to_string(),
            copy: options.copy,
            artifacts: options.artifacts,
            dependencies: options.dependencies,
            scopes: options.scopes.clone(),
            properties: options.properties.clone(),
            fail_fast: options.fail_fast,
        }
    }
}

/// Response of a promotion call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromotionResponseBody {
    #[serde(default)]
    pub messages: Vec<PromotionMessageBody>,
}

/// Artifactory may omit `message`; the entry still blocks the promotion.
#[derive(Debug, Clone, Deserialize)]
pub struct PromotionMessageBody {
    pub level: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Repositories
// ============================================================================

/// One entry of `GET /api/repositories`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryEntry {
    pub key: String,
    #[serde(rename = "type")]
    pub repo_type: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

// ============================================================================
// Errors
// ============================================================================

/// Artifactory's error body: `{"errors": [{"status": 404, "message": "..."}]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub errors: Vec<ApiErrorEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEntry {
    pub message: String,
}

/// Extract the error messages from a response body, if it is an Artifactory
/// error document.
pub fn parse_error_message(body: &str) -> Option<String> {
    let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
    let messages: Vec<&str> = parsed
        .errors
        .iter()
        .map(|e| e.message.as_str())
        .filter(|m| !m.is_empty())
        .collect();
    if messages.is_empty() {
        None
    } else {
        Some(messages.join("; "))
    }
}
