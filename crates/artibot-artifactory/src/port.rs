//! Port trait implementation for `ArtifactoryClient`.
//!
//! This module implements the core-owned `ArtifactoryPort` trait for
//! `ArtifactoryClient`, handling the conversion between internal wire types
//! and core DTOs.

use artibot_core::{
    ArtifactoryPort, ArtifactoryPortError, ArtifactoryPortResult, BuildRecord, PromotionMessage,
    PromotionOptions, PromotionResponse, RepositorySummary,
};
use async_trait::async_trait;

use crate::client::ArtifactoryClient;
use crate::error::ArtifactoryError;
use crate::http::HttpBackend;
use crate::models::{BuildInfo, PromotionRequestBody, PromotionResponseBody, RepositoryEntry};

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ArtifactoryError` to core `ArtifactoryPortError`.
pub(crate) fn map_error(err: ArtifactoryError) -> ArtifactoryPortError {
    match err {
        ArtifactoryError::ApiRequestFailed { status, url, message } => {
            if status == 401 || status == 403 {
                ArtifactoryPortError::Unauthorized { status }
            } else {
                ArtifactoryPortError::ApiRequestFailed {
                    status,
                    message: message.unwrap_or(url),
                }
            }
        }
        ArtifactoryError::BuildNotFound { name, number } => {
            ArtifactoryPortError::BuildNotFound { name, number }
        }
        ArtifactoryError::Network(e) => ArtifactoryPortError::Network {
            message: e.to_string(),
        },
        e @ (ArtifactoryError::InvalidUrl(_)
        | ArtifactoryError::DotSegment(_)
        | ArtifactoryError::Certificate { .. }
        | ArtifactoryError::Proxy(_)
        | ArtifactoryError::ClientBuild(_)) => ArtifactoryPortError::Configuration {
            message: e.to_string(),
        },
        ArtifactoryError::JsonParse(e) => ArtifactoryPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Type Conversions
// ============================================================================

fn to_build_record(info: BuildInfo) -> BuildRecord {
    BuildRecord {
        name: info.name,
        number: info.number,
        started: info.started,
        url: info.url,
    }
}

fn to_promotion_response(body: PromotionResponseBody) -> PromotionResponse {
    PromotionResponse {
        messages: body
            .messages
            .into_iter()
            .map(|m| PromotionMessage {
                level: m.level,
                message: m.message.unwrap_or_default(),
            })
            .collect(),
    }
}

fn to_repository_summary(entry: RepositoryEntry) -> RepositorySummary {
    RepositorySummary {
        key: entry.key,
        repo_type: entry.repo_type,
        description: entry.description,
        url: entry.url,
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> ArtifactoryPort for ArtifactoryClient<B> {
    async fn find_build(&self, name: &str, number: &str) -> ArtifactoryPortResult<BuildRecord> {
        let info = self.get_build(name, number).await.map_err(map_error)?;
        Ok(to_build_record(info))
    }

    async fn promote_build(
        &self,
        build: &BuildRecord,
        target_repo: &str,
        options: &PromotionOptions,
    ) -> ArtifactoryPortResult<PromotionResponse> {
        let body = PromotionRequestBody::new(target_repo, options);
        let response = self
            .post_promotion(&build.name, &build.number, &body)
            .await
            .map_err(map_error)?;
        Ok(to_promotion_response(response))
    }

    async fn list_repositories(&self) -> ArtifactoryPortResult<Vec<RepositorySummary>> {
        let entries = self.get_repositories().await.map_err(map_error)?;
        Ok(entries.into_iter().map(to_repository_summary).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::fake_client;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn options() -> PromotionOptions {
        PromotionOptions::new(
            "STABLE",
            "Promoted",
            "Jane (ID: 7, Mention name: jane)",
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_map_error_statuses() {
        let unauthorized = map_error(ArtifactoryError::ApiRequestFailed {
            status: 401,
            url: "https://af/api/repositories".to_string(),
            message: None,
        });
        assert!(matches!(
            unauthorized,
            ArtifactoryPortError::Unauthorized { status: 401 }
        ));

        let forbidden = map_error(ArtifactoryError::ApiRequestFailed {
            status: 403,
            url: "https://af/api/repositories".to_string(),
            message: None,
        });
        assert!(matches!(
            forbidden,
            ArtifactoryPortError::Unauthorized { status: 403 }
        ));

        let server = map_error(ArtifactoryError::ApiRequestFailed {
            status: 500,
            url: "https://af/api/repositories".to_string(),
            message: None,
        });
        assert!(matches!(
            server,
            ArtifactoryPortError::ApiRequestFailed { status: 500, ref message }
                if message == "https://af/api/repositories"
        ));
    }

    #[test]
    fn test_map_error_prefers_body_message() {
        let err = map_error(ArtifactoryError::ApiRequestFailed {
            status: 409,
            url: "https://af/api/build/promote/chef/1".to_string(),
            message: Some("Build already promoted".to_string()),
        });
        assert!(matches!(
            err,
            ArtifactoryPortError::ApiRequestFailed { status: 409, ref message }
                if message == "Build already promoted"
        ));
    }

    #[test]
    fn test_map_error_dot_segment() {
        let err = map_error(ArtifactoryError::DotSegment("..".to_string()));
        assert!(matches!(err, ArtifactoryPortError::Configuration { .. }));
    }

    #[test]
    fn test_map_error_configuration() {
        let err = map_error(ArtifactoryError::Proxy("bad scheme".to_string()));
        assert!(matches!(err, ArtifactoryPortError::Configuration { .. }));

        let err = map_error(ArtifactoryError::Certificate {
            path: "/etc/client.pem".to_string(),
            message: "missing".to_string(),
        });
        assert!(matches!(
            err,
            ArtifactoryPortError::Configuration { ref message } if message.contains("/etc/client.pem")
        ));
    }

    #[tokio::test]
    async fn test_find_build() {
        let backend = FakeBackend::new().with_get(
            "/api/build/chef/12.0.3",
            CannedResponse::ok(json!({
                "buildInfo": {"name": "chef", "number": "12.0.3", "url": "https://ci/job/chef/42"}
            })),
        );
        let client = fake_client(backend);

        let build = client.find_build("chef", "12.0.3").await.unwrap();
        assert_eq!(build.name, "chef");
        assert_eq!(build.number, "12.0.3");
        assert_eq!(build.url.as_deref(), Some("https://ci/job/chef/42"));
    }

    #[tokio::test]
    async fn test_find_build_missing() {
        let backend = FakeBackend::new().with_get(
            "/api/build/",
            CannedResponse::status(
                404,
                json!({"errors": [{"status": 404, "message": "No build was found"}]}),
            ),
        );
        let client = fake_client(backend);

        let err = client.find_build("chef", "99").await.unwrap_err();
        assert!(matches!(
            err,
            ArtifactoryPortError::BuildNotFound { ref name, ref number } if name == "chef" && number == "99"
        ));
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let backend = FakeBackend::new()
            .with_get("/api/repositories", CannedResponse::status(401, json!({})));
        let client = fake_client(backend);

        let err = client.list_repositories().await.unwrap_err();
        assert!(matches!(err, ArtifactoryPortError::Unauthorized { status: 401 }));
    }

    #[tokio::test]
    async fn test_promote_build_dry_run_messages() {
        let backend = FakeBackend::new().with_post(
            "/api/build/promote/chef/12.0.3",
            CannedResponse::ok(json!({
                "messages": [{"level": "error", "message": "Target repository does not exist"}]
            })),
        );
        let requests = backend.requests();
        let client = fake_client(backend);

        let build = BuildRecord::new("chef", "12.0.3");
        let response = client
            .promote_build(&build, "omnibus-stable-local", &options().with_dry_run(true))
            .await
            .unwrap();

        assert_eq!(
            response.message_texts(),
            vec!["Target repository does not exist"]
        );
        assert_eq!(response.messages[0].level.as_deref(), Some("error"));

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(
            requests[0].url,
            "https://af.example.com/artifactory/api/build/promote/chef/12.0.3"
        );
        let body = requests[0].body.as_ref().unwrap();
        assert_eq!(body["dryRun"], true);
        assert_eq!(body["status"], "STABLE");
        assert_eq!(body["ciUser"], "Jane (ID: 7, Mention name: jane)");
        assert_eq!(body["timestamp"], "2024-03-01T10:00:00.000+0000");
        assert_eq!(body["targetRepo"], "omnibus-stable-local");
    }

    #[tokio::test]
    async fn test_promote_build_message_without_text_still_blocks() {
        let backend = FakeBackend::new().with_post(
            "/api/build/promote/chef/12.0.3",
            CannedResponse::ok(json!({"messages": [{"level": "error"}]})),
        );
        let client = fake_client(backend);

        let response = client
            .promote_build(
                &BuildRecord::new("chef", "12.0.3"),
                "omnibus-stable-local",
                &options().with_dry_run(true),
            )
            .await
            .unwrap();

        assert!(!response.is_clean());
        assert_eq!(response.message_texts(), vec![String::new()]);
        assert_eq!(response.messages[0].level.as_deref(), Some("error"));
    }

    #[tokio::test]
    async fn test_promote_build_commit_is_clean() {
        let backend = FakeBackend::new().with_post(
            "/api/build/promote/",
            CannedResponse::ok(json!({"messages": []})),
        );
        let client = fake_client(backend);

        let response = client
            .promote_build(&BuildRecord::new("chef", "1"), "omnibus-stable-local", &options())
            .await
            .unwrap();
        assert!(response.is_clean());
    }

    #[tokio::test]
    async fn test_list_repositories() {
        let backend = FakeBackend::new().with_get(
            "/api/repositories",
            CannedResponse::ok(json!([
                {"key": "omnibus-stable-local", "type": "LOCAL", "url": "https://af/omnibus-stable-local"},
                {"key": "jcenter", "type": "REMOTE"}
            ])),
        );
        let client = fake_client(backend);

        let repos = client.list_repositories().await.unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].key, "omnibus-stable-local");
        assert_eq!(repos[0].repo_type.as_deref(), Some("LOCAL"));
        assert_eq!(repos[1].key, "jcenter");
    }

    #[tokio::test]
    async fn test_invalid_json_is_invalid_response() {
        let backend = FakeBackend::new()
            .with_get("/api/repositories", CannedResponse::ok(json!({"not": "a list"})));
        let client = fake_client(backend);

        let err = client.list_repositories().await.unwrap_err();
        assert!(matches!(err, ArtifactoryPortError::InvalidResponse { .. }));
    }
}
