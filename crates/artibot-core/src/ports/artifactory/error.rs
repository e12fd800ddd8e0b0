//! Error types for Artifactory port operations.

use thiserror::Error;

/// Errors from Artifactory port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum ArtifactoryPortError {
    /// No build record exists for the name/number pair.
    #[error("Build not found: {name} {number}")]
    BuildNotFound {
        /// Build name
        name: String,
        /// Build number
        number: String,
    },

    /// Credentials were rejected.
    #[error("Artifactory rejected the credentials (status {status})")]
    Unauthorized {
        /// 401 or 403
        status: u16,
    },

    /// Artifactory answered with an unexpected error status.
    #[error("Artifactory request failed with status {status}: {message}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// Error detail from the response body, or the URL
        message: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// Invalid response from the API.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Client configuration error (bad URL, unreadable certificate, bad proxy).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for Artifactory port operations.
pub type ArtifactoryPortResult<T> = Result<T, ArtifactoryPortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArtifactoryPortError::BuildNotFound {
            name: "chef-server".to_string(),
            number: "12.1.0".to_string(),
        };
        assert!(err.to_string().contains("chef-server"));
        assert!(err.to_string().contains("12.1.0"));

        let err = ArtifactoryPortError::Unauthorized { status: 401 };
        assert!(err.to_string().contains("401"));
    }
}
