//! HTTP backend abstraction for the Artifactory API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with basic auth on every request.

use crate::config::ArtifactoryClientConfig;
use crate::error::{ArtifactoryError, ArtifactoryResult};
use crate::models::parse_error_message;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that exchange JSON with Artifactory.
///
/// This is an implementation detail - external code should use the
/// `ArtifactoryPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// `GET` a URL and deserialize the JSON response.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ArtifactoryResult<T>;

    /// `POST` a JSON body and deserialize the JSON response.
    async fn post_json<B, T>(&self, url: &Url, body: &B) -> ArtifactoryResult<T>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned + Send;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Every request is sent exactly once. Non-2xx responses become
/// `ArtifactoryError::ApiRequestFailed`, carrying the messages of an
/// Artifactory error body when there is one.
pub struct ReqwestBackend {
    client: reqwest::Client,
    username: String,
    password: String,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    ///
    /// Fails if the client certificate cannot be loaded or the proxy is
    /// invalid.
    pub fn new(config: &ArtifactoryClientConfig) -> ArtifactoryResult<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone());

        if let Some(ref path) = config.ssl_pem_file {
            let certificate_error = |message: String| ArtifactoryError::Certificate {
                path: path.display().to_string(),
                message,
            };
            let pem = std::fs::read(path).map_err(|e| certificate_error(e.to_string()))?;
            let identity =
                reqwest::Identity::from_pem(&pem).map_err(|e| certificate_error(e.to_string()))?;
            builder = builder.identity(identity);
        }

        if config.ssl_verify == Some(false) {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref proxy_config) = config.proxy {
            let mut proxy = reqwest::Proxy::all(proxy_config.url())
                .map_err(|e| ArtifactoryError::Proxy(e.to_string()))?;
            if let (Some(user), Some(pass)) = (&proxy_config.username, &proxy_config.password) {
                proxy = proxy.basic_auth(user, pass);
            }
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| ArtifactoryError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// Send an authenticated request and fail on non-2xx statuses.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> ArtifactoryResult<reqwest::Response> {
        let response = request
            .basic_auth(&self.username, Some(&self.password))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        debug!(%url, status = status.as_u16(), "Artifactory response");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ArtifactoryError::ApiRequestFailed {
            status: status.as_u16(),
            url: url.to_string(),
            message: parse_error_message(&body),
        })
    }
}

/// Decode a JSON body. Malformed documents are `JsonParse` errors.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ArtifactoryResult<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ArtifactoryResult<T> {
        let response = self.send(self.client.get(url.as_str()), url).await?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, url: &Url, body: &B) -> ArtifactoryResult<T>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned + Send,
    {
        let request = self.client.post(url.as_str()).json(body);
        let response = self.send(request, url).await?;
        decode(response).await
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
