//! Connection and identity arguments.
//!
//! Every flag falls back to an environment variable, and `main` loads a
//! `.env` file before parsing, so settings resolve as flags, then the
//! environment, then `.env`, then defaults.

use artibot_core::{ArtifactorySettings, ChatUser, DEFAULT_BASE_PATH};
use clap::Args;
use clap::builder::BoolishValueParser;

/// Artifactory connection settings.
#[derive(Args, Debug, Clone, Default)]
pub struct ArtifactoryArgs {
    /// Artifactory user for basic auth
    #[arg(long = "artifactory-username", env = "ARTIFACTORY_USERNAME", global = true)]
    pub username: Option<String>,

    /// Artifactory password or API key
    #[arg(
        long = "artifactory-password",
        env = "ARTIFACTORY_PASSWORD",
        global = true,
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Base URL of the Artifactory server
    #[arg(long = "artifactory-endpoint", env = "ARTIFACTORY_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Repository path prefix builds live under
    #[arg(
        long = "artifactory-base-path",
        env = "ARTIFACTORY_BASE_PATH",
        global = true,
        default_value = DEFAULT_BASE_PATH
    )]
    pub base_path: String,

    /// PEM file with a client certificate and key
    #[arg(long = "artifactory-ssl-pem-file", env = "ARTIFACTORY_SSL_PEM_FILE", global = true)]
    pub ssl_pem_file: Option<String>,

    /// Verify the server certificate (true/false)
    #[arg(
        long = "artifactory-ssl-verify",
        env = "ARTIFACTORY_SSL_VERIFY",
        global = true,
        value_parser = BoolishValueParser::new()
    )]
    pub ssl_verify: Option<bool>,

    /// HTTP proxy user
    #[arg(long = "artifactory-proxy-username", env = "ARTIFACTORY_PROXY_USERNAME", global = true)]
    pub proxy_username: Option<String>,

    /// HTTP proxy password
    #[arg(
        long = "artifactory-proxy-password",
        env = "ARTIFACTORY_PROXY_PASSWORD",
        global = true,
        hide_env_values = true
    )]
    pub proxy_password: Option<String>,

    /// HTTP proxy host
    #[arg(long = "artifactory-proxy-address", env = "ARTIFACTORY_PROXY_ADDRESS", global = true)]
    pub proxy_address: Option<String>,

    /// HTTP proxy port
    #[arg(long = "artifactory-proxy-port", env = "ARTIFACTORY_PROXY_PORT", global = true)]
    pub proxy_port: Option<u16>,
}

impl ArtifactoryArgs {
    /// Resolved settings. Missing required values are left empty for
    /// validation to report.
    pub fn to_settings(&self) -> ArtifactorySettings {
        ArtifactorySettings {
            username: self.username.clone().unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
            endpoint: self.endpoint.clone().unwrap_or_default(),
            base_path: self.base_path.clone(),
            ssl_pem_file: self.ssl_pem_file.clone(),
            ssl_verify: self.ssl_verify,
            proxy_username: self.proxy_username.clone(),
            proxy_password: self.proxy_password.clone(),
            proxy_address: self.proxy_address.clone(),
            proxy_port: self.proxy_port,
        }
    }
}

/// The chat user commands are issued as.
#[derive(Args, Debug, Clone)]
pub struct UserArgs {
    /// Display name of the acting user
    #[arg(long = "user-name", env = "ARTIBOT_USER_NAME", default_value = "Shell User")]
    pub name: String,

    /// Chat id of the acting user
    #[arg(long = "user-id", env = "ARTIBOT_USER_ID", default_value = "1")]
    pub id: String,

    /// Mention name of the acting user
    #[arg(long = "mention-name", env = "ARTIBOT_USER_MENTION_NAME", default_value = "Shell User")]
    pub mention_name: String,
}

impl UserArgs {
    pub fn to_chat_user(&self) -> ChatUser {
        ChatUser::new(&self.name, &self.id, &self.mention_name)
    }
}
