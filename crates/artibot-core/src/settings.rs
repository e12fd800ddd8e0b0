//! Settings domain types and validation.
//!
//! These are the connection settings for the Artifactory server. They are
//! pure data; where they come from (flags, environment, `.env`) is decided by
//! the host at the composition root.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default repository path prefix under which builds are laid out.
pub const DEFAULT_BASE_PATH: &str = "com/getchef";

/// Connection settings for an Artifactory server.
///
/// `username`, `password` and `endpoint` are mandatory; everything else is
/// optional and passed through to the HTTP client unchanged.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ArtifactorySettings {
    /// Artifactory user for basic auth.
    pub username: String,

    /// Password or API key for basic auth.
    pub password: String,

    /// Base URL of the Artifactory server (e.g. `https://artifactory.example.com/artifactory`).
    pub endpoint: String,

    /// Repository path prefix that builds live under.
    pub base_path: String,

    /// PEM file holding a client certificate and key for mutual TLS.
    pub ssl_pem_file: Option<String>,

    /// Whether to verify the server certificate. `None` keeps the client default.
    pub ssl_verify: Option<bool>,

    /// Username for an authenticating HTTP proxy.
    pub proxy_username: Option<String>,

    /// Password for an authenticating HTTP proxy.
    pub proxy_password: Option<String>,

    /// Proxy host, with or without a scheme.
    pub proxy_address: Option<String>,

    /// Proxy port.
    pub proxy_port: Option<u16>,
}

impl Default for ArtifactorySettings {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            endpoint: String::new(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            ssl_pem_file: None,
            ssl_verify: None,
            proxy_username: None,
            proxy_password: None,
            proxy_address: None,
            proxy_port: None,
        }
    }
}

impl ArtifactorySettings {
    /// Create settings from the three mandatory values, defaulting the rest.
    pub fn new(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Endpoint with any trailing slashes removed, ready for URL templating.
    pub fn endpoint_trimmed(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }

    /// Whether a proxy is configured.
    pub const fn has_proxy(&self) -> bool {
        self.proxy_address.is_some()
    }
}

// Manual impl so credentials never end up in logs.
impl fmt::Debug for ArtifactorySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArtifactorySettings")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("base_path", &self.base_path)
            .field("ssl_pem_file", &self.ssl_pem_file)
            .field("ssl_verify", &self.ssl_verify)
            .field("proxy_username", &self.proxy_username)
            .field(
                "proxy_password",
                &self.proxy_password.as_ref().map(|_| "<redacted>"),
            )
            .field("proxy_address", &self.proxy_address)
            .field("proxy_port", &self.proxy_port)
            .finish()
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Missing required setting: {0}")]
    MissingRequired(&'static str),

    #[error("Endpoint must be an http:// or https:// URL, got '{0}'")]
    InvalidEndpoint(String),

    #[error("Base path cannot be empty")]
    EmptyBasePath,

    #[error("SSL PEM file path cannot be empty")]
    EmptyPemFile,

    #[error("Proxy {0} is set but proxy_address is not")]
    ProxyWithoutAddress(&'static str),

    #[error("Proxy credentials need both proxy_username and proxy_password")]
    IncompleteProxyCredentials,
}

/// Validate settings values.
pub fn validate_settings(settings: &ArtifactorySettings) -> Result<(), SettingsError> {
    if settings.username.trim().is_empty() {
        return Err(SettingsError::MissingRequired("username"));
    }
    if settings.password.is_empty() {
        return Err(SettingsError::MissingRequired("password"));
    }

    let endpoint = settings.endpoint.trim();
    if endpoint.is_empty() {
        return Err(SettingsError::MissingRequired("endpoint"));
    }
    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        return Err(SettingsError::InvalidEndpoint(settings.endpoint.clone()));
    }

    if settings.base_path.trim_matches('/').trim().is_empty() {
        return Err(SettingsError::EmptyBasePath);
    }

    if settings
        .ssl_pem_file
        .as_ref()
        .is_some_and(|p| p.trim().is_empty())
    {
        return Err(SettingsError::EmptyPemFile);
    }

    if settings.proxy_address.is_none() {
        if settings.proxy_port.is_some() {
            return Err(SettingsError::ProxyWithoutAddress("proxy_port"));
        }
        if settings.proxy_username.is_some() || settings.proxy_password.is_some() {
            return Err(SettingsError::ProxyWithoutAddress("credentials"));
        }
    }

    if settings.proxy_username.is_some() != settings.proxy_password.is_some() {
        return Err(SettingsError::IncompleteProxyCredentials);
    }

    Ok(())
}
