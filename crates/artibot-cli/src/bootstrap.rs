//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the command host. The Artifactory client is built here, once, and
//! injected into the core handler; command handlers only ever see the
//! composed `CliContext`.

use std::sync::Arc;

use artibot_artifactory::{ArtifactoryClientConfig, DefaultArtifactoryClient};
use artibot_core::{ArtifactoryHandler, ArtifactoryPort, ArtifactorySettings, validate_settings};
use tracing::debug;

use crate::error::CliError;
use crate::router::Router;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Artifactory connection settings.
    pub settings: ArtifactorySettings,
    /// Name the bot answers to.
    pub robot_name: String,
}

impl CliConfig {
    pub fn new(settings: ArtifactorySettings, robot_name: impl Into<String>) -> Self {
        Self {
            settings,
            robot_name: robot_name.into(),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    handler: ArtifactoryHandler,
    router: Router,
}

impl CliContext {
    /// Access the core handler.
    pub const fn handler(&self) -> &ArtifactoryHandler {
        &self.handler
    }

    /// Access the command router.
    pub const fn router(&self) -> &Router {
        &self.router
    }
}

/// Bootstrap the CLI application.
///
/// Validates the settings, builds the HTTP client and composes the handler.
/// Nothing is sent to Artifactory until the first command.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    validate_settings(&config.settings).map_err(|e| CliError::Config(e.to_string()))?;

    let client_config = ArtifactoryClientConfig::from(&config.settings);
    debug!(?client_config, "Building Artifactory client");
    let client: Arc<dyn ArtifactoryPort> = Arc::new(DefaultArtifactoryClient::new(&client_config)?);

    bootstrap_with(client, config)
}

/// Bootstrap with a custom Artifactory port (for testing).
pub fn bootstrap_with(
    client: Arc<dyn ArtifactoryPort>,
    config: CliConfig,
) -> Result<CliContext, CliError> {
    let router = Router::new(&config.robot_name)
        .map_err(|e| CliError::Config(format!("invalid robot name: {e}")))?;
    let handler = ArtifactoryHandler::new(client, &config.settings)?;

    Ok(CliContext { handler, router })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_rejects_missing_credentials() {
        let settings = ArtifactorySettings::new("https://af.example.com", "", "pw");
        let result = bootstrap(CliConfig::new(settings, "artibot"));
        assert!(matches!(result, Err(CliError::Config(ref m)) if m.contains("username")));
    }

    #[test]
    fn test_bootstrap_builds_client_without_network() {
        let settings = ArtifactorySettings::new("https://af.example.com/artifactory", "ci", "pw");
        let ctx = bootstrap(CliConfig::new(settings, "artibot")).unwrap();
        assert_eq!(ctx.router().robot_name(), "artibot");
    }

    #[test]
    fn test_bootstrap_reports_unreadable_pem() {
        let mut settings = ArtifactorySettings::new("https://af.example.com", "ci", "pw");
        settings.ssl_pem_file = Some("/nonexistent/artibot.pem".to_string());
        let result = bootstrap(CliConfig::new(settings, "artibot"));
        assert!(matches!(result, Err(CliError::Config(ref m)) if m.contains("artibot.pem")));
    }
}
