//! Public configuration for the Artifactory client.
//!
//! This module provides a stable public API for configuring the client.
//! The HTTP backend is built from this once, at the composition root.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use artibot_core::ArtifactorySettings;

/// HTTP proxy the client should tunnel through.
#[derive(Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Proxy host, optionally with a scheme (`http://` is assumed otherwise).
    pub address: String,
    /// Proxy port.
    pub port: Option<u16>,
    /// Username for proxy basic auth.
    pub username: Option<String>,
    /// Password for proxy basic auth.
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Proxy without credentials.
    pub fn new(address: impl Into<String>, port: Option<u16>) -> Self {
        Self {
            address: address.into(),
            port,
            username: None,
            password: None,
        }
    }

    /// Set proxy basic-auth credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Proxy URL as handed to the HTTP client.
    pub fn url(&self) -> String {
        let address = self.address.trim_end_matches('/');
        let mut url = if address.contains("://") {
            address.to_string()
        } else {
            format!("http://{address}")
        };
        if let Some(port) = self.port {
            url.push_str(&format!(":{port}"));
        }
        url
    }
}

impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("address", &self.address)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Configuration for the Artifactory client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use artibot_artifactory::{ArtifactoryClientConfig, ProxyConfig};
/// use std::time::Duration;
///
/// let config = ArtifactoryClientConfig::new("https://artifactory.example.com/artifactory", "ci", "secret")
///     .with_timeout(Duration::from_secs(60))
///     .with_ssl_verify(Some(false))
///     .with_proxy(Some(ProxyConfig::new("proxy.internal", Some(3128))));
/// ```
#[derive(Clone)]
pub struct ArtifactoryClientConfig {
    /// Base URL of the Artifactory server
    pub(crate) endpoint: String,
    /// Basic-auth user
    pub(crate) username: String,
    /// Basic-auth password or API key
    pub(crate) password: String,
    /// PEM file with client certificate and private key
    pub(crate) ssl_pem_file: Option<PathBuf>,
    /// Server certificate verification; `None` keeps the client default
    pub(crate) ssl_verify: Option<bool>,
    /// Optional HTTP proxy
    pub(crate) proxy: Option<ProxyConfig>,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl ArtifactoryClientConfig {
    /// Create a configuration for `endpoint` with basic-auth credentials.
    pub fn new(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: username.into(),
            password: password.into(),
            ssl_pem_file: None,
            ssl_verify: None,
            proxy: None,
            timeout: Duration::from_secs(30),
            user_agent: concat!("artibot-artifactory/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Load a client TLS identity from a PEM file.
    #[must_use]
    pub fn with_ssl_pem_file(mut self, path: Option<PathBuf>) -> Self {
        self.ssl_pem_file = path;
        self
    }

    /// Turn server certificate verification on or off.
    #[must_use]
    pub const fn with_ssl_verify(mut self, verify: Option<bool>) -> Self {
        self.ssl_verify = verify;
        self
    }

    /// Route requests through an HTTP proxy.
    #[must_use]
    pub fn with_proxy(mut self, proxy: Option<ProxyConfig>) -> Self {
        self.proxy = proxy;
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl fmt::Debug for ArtifactoryClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArtifactoryClientConfig")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("ssl_pem_file", &self.ssl_pem_file)
            .field("ssl_verify", &self.ssl_verify)
            .field("proxy", &self.proxy)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl From<&ArtifactorySettings> for ArtifactoryClientConfig {
    fn from(settings: &ArtifactorySettings) -> Self {
        let proxy = settings.proxy_address.as_ref().map(|address| ProxyConfig {
            address: address.clone(),
            port: settings.proxy_port,
            username: settings.proxy_username.clone(),
            password: settings.proxy_password.clone(),
        });

        Self::new(
            settings.endpoint.clone(),
            settings.username.clone(),
            settings.password.clone(),
        )
        .with_ssl_pem_file(settings.ssl_pem_file.as_ref().map(PathBuf::from))
        .with_ssl_verify(settings.ssl_verify)
        .with_proxy(proxy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ArtifactoryClientConfig::new("https://af.example.com", "ci", "pw");
        assert_eq!(config.endpoint(), "https://af.example.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.contains("artibot-artifactory"));
        assert!(config.ssl_pem_file.is_none());
        assert!(config.ssl_verify.is_none());
        assert!(config.proxy.is_none());
    }

    #[test]
    fn test_from_settings() {
        let mut settings = ArtifactorySettings::new("https://af.example.com", "ci", "pw");
        settings.ssl_pem_file = Some("/etc/artibot/client.pem".to_string());
        settings.ssl_verify = Some(false);
        settings.proxy_address = Some("proxy.internal".to_string());
        settings.proxy_port = Some(3128);
        settings.proxy_username = Some("bot".to_string());
        settings.proxy_password = Some("hunter2".to_string());

        let config = ArtifactoryClientConfig::from(&settings);

        assert_eq!(
            config.ssl_pem_file,
            Some(PathBuf::from("/etc/artibot/client.pem"))
        );
        assert_eq!(config.ssl_verify, Some(false));
        let proxy = config.proxy.unwrap();
        assert_eq!(proxy.url(), "http://proxy.internal:3128");
        assert_eq!(proxy.username.as_deref(), Some("bot"));
    }

    #[test]
    fn test_proxy_url_keeps_scheme() {
        let proxy = ProxyConfig::new("https://proxy.internal/", None);
        assert_eq!(proxy.url(), "https://proxy.internal");
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let config = ArtifactoryClientConfig::new("https://af.example.com", "ci", "topsecret")
            .with_proxy(Some(
                ProxyConfig::new("proxy", Some(8080)).with_credentials("bot", "proxysecret"),
            ));
        let debug = format!("{config:?}");
        assert!(!debug.contains("topsecret"));
        assert!(!debug.contains("proxysecret"));
    }
}
