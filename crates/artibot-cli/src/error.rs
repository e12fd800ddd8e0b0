//! CLI-specific error types and mappings.
//!
//! This module provides error types for the command host and mappings
//! from `CoreError` to exit codes and user-facing messages.

use artibot_core::{ArtifactoryPortError, CoreError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The message or arguments did not describe something we can do.
    #[error("{0}")]
    Usage(String),

    /// Settings are missing or rejected.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Artifactory could not be reached or answered with an error.
    #[error("Artifactory unavailable: {0}")]
    Unavailable(String),

    /// Artifactory answered with something we could not understand.
    #[error("Internal error: {0}")]
    Software(String),

    /// Terminal IO error.
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 2: Misuse of shell command (unknown chat command, missing build)
    /// - 69: `EX_UNAVAILABLE`
    /// - 70: `EX_SOFTWARE`
    /// - 74: `EX_IOERR`
    /// - 78: `EX_CONFIG`
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            Self::Unavailable(_) => 69,
            Self::Software(_) => 70,
            Self::Io(_) => 74,
            Self::Config(_) => 78,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::BuildNotFound { .. } => Self::Usage(err.to_string()),
            CoreError::Settings(settings_err) => Self::Config(settings_err.to_string()),
            CoreError::Artifactory(port_err) => Self::from(port_err),
        }
    }
}

impl From<ArtifactoryPortError> for CliError {
    fn from(err: ArtifactoryPortError) -> Self {
        match err {
            ArtifactoryPortError::BuildNotFound { .. } => Self::Usage(err.to_string()),
            ArtifactoryPortError::Unauthorized { .. }
            | ArtifactoryPortError::Configuration { .. } => Self::Config(err.to_string()),
            ArtifactoryPortError::ApiRequestFailed { .. } | ArtifactoryPortError::Network { .. } => {
                Self::Unavailable(err.to_string())
            }
            ArtifactoryPortError::InvalidResponse { .. } => Self::Software(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artibot_core::SettingsError;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Usage(String::new()).exit_code(), 2);
        assert_eq!(CliError::Unavailable(String::new()).exit_code(), 69);
        assert_eq!(CliError::Software(String::new()).exit_code(), 70);
        assert_eq!(CliError::Config(String::new()).exit_code(), 78);
    }

    #[test]
    fn test_core_error_mapping() {
        let err = CliError::from(CoreError::BuildNotFound {
            project: "chef".to_string(),
            version: "1.0".to_string(),
        });
        assert!(matches!(err, CliError::Usage(ref m) if m.contains("chef")));

        let err = CliError::from(CoreError::Settings(SettingsError::MissingRequired("password")));
        assert_eq!(err.exit_code(), 78);

        let err = CliError::from(CoreError::Artifactory(ArtifactoryPortError::Network {
            message: "connection refused".to_string(),
        }));
        assert_eq!(err.exit_code(), 69);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_unauthorized_is_config_error() {
        let err = CliError::from(ArtifactoryPortError::Unauthorized { status: 401 });
        assert_eq!(err.exit_code(), 78);
    }
}
