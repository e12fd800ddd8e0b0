//! Internal error types for Artifactory operations.
//!
//! These errors are internal to `artibot-artifactory` and are mapped to core
//! port errors at the boundary.

use thiserror::Error;

/// Result type alias for Artifactory operations.
pub type ArtifactoryResult<T> = Result<T, ArtifactoryError>;

/// Errors related to Artifactory API operations.
#[derive(Debug, Error)]
pub enum ArtifactoryError {
    /// API request failed with an HTTP error status.
    #[error("Artifactory request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Messages from an Artifactory `errors` body, if any
        message: Option<String>,
    },

    /// The requested build was not found.
    #[error("Build '{name}' number '{number}' not found")]
    BuildNotFound {
        /// Build name
        name: String,
        /// Build number
        number: String,
    },

    /// The client TLS identity could not be loaded.
    #[error("Cannot load client certificate {path}: {message}")]
    Certificate {
        /// PEM file path
        path: String,
        /// What went wrong
        message: String,
    },

    /// A path token would be resolved as `.` or `..` instead of sent as-is.
    #[error("'{0}' cannot be used as a path segment")]
    DotSegment(String),

    /// The proxy settings were rejected by the HTTP client.
    #[error("Invalid proxy configuration: {0}")]
    Proxy(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = ArtifactoryError::ApiRequestFailed {
            status: 500,
            url: "https://af.example.com/api/repositories".to_string(),
            message: None,
        };
        let msg = error.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("/api/repositories"));
    }

    #[test]
    fn test_build_not_found_error_message() {
        let error = ArtifactoryError::BuildNotFound {
            name: "chef-server".to_string(),
            number: "12.1.0".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("chef-server"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_certificate_error_message() {
        let error = ArtifactoryError::Certificate {
            path: "/etc/client.pem".to_string(),
            message: "No such file or directory".to_string(),
        };
        assert!(error.to_string().contains("/etc/client.pem"));
    }
}
