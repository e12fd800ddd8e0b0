//! Artifactory client for build promotion and repository listing.
//!
//! This module provides the main client interface for interacting with
//! the Artifactory REST API.

mod builds;
mod repositories;

use artibot_core::ArtifactoryPortResult;
use url::Url;

use crate::config::ArtifactoryClientConfig;
use crate::error::ArtifactoryResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::port::map_error;
use crate::url::normalize_base_url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Artifactory client using the reqwest HTTP backend.
pub type DefaultArtifactoryClient = ArtifactoryClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for interacting with the Artifactory REST API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultArtifactoryClient` for production code.
pub struct ArtifactoryClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
}

impl DefaultArtifactoryClient {
    /// Create a client for the server described by `config`.
    ///
    /// Fails with `ArtifactoryPortError::Configuration` when the endpoint is
    /// not a URL, the client certificate cannot be loaded or the proxy is
    /// rejected.
    pub fn new(config: &ArtifactoryClientConfig) -> ArtifactoryPortResult<Self> {
        Self::build(config).map_err(map_error)
    }

    /// Build the client and its HTTP connection from `config`.
    pub(crate) fn build(config: &ArtifactoryClientConfig) -> ArtifactoryResult<Self> {
        let base_url = normalize_base_url(&config.endpoint)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self { backend, base_url })
    }
}

impl<B: HttpBackend> ArtifactoryClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(base_url: Url, backend: B) -> Self {
        Self { backend, base_url }
    }

    /// Base URL all API paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
