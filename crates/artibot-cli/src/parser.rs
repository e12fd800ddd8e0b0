//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;
use crate::config::ArtifactoryArgs;

/// Command-line interface for the artibot chat-ops host.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser, Debug)]
#[command(name = "artibot")]
#[command(about = "Promote Artifactory builds and list repositories from chat commands")]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Name the bot answers to when a message is addressed to it
    #[arg(long = "robot-name", env = "ARTIBOT_ROBOT_NAME", default_value = "artibot", global = true)]
    pub robot_name: String,

    #[command(flatten)]
    pub artifactory: ArtifactoryArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["artibot", "--verbose", "--robot-name", "lita", "help"]);
        assert!(cli.verbose);
        assert_eq!(cli.robot_name, "lita");
        assert!(matches!(cli.command, Some(Commands::Help)));
    }

    #[test]
    fn test_say_collects_words() {
        let cli = Cli::parse_from([
            "artibot",
            "say",
            "--user-name",
            "Jane",
            "artifactory",
            "promote",
            "chef",
            "1.0",
            "from",
            "current",
            "to",
            "stable",
        ]);
        let Some(Commands::Say { text, user }) = cli.command else {
            panic!("expected say command");
        };
        assert_eq!(text.join(" "), "artifactory promote chef 1.0 from current to stable");
        assert_eq!(user.name, "Jane");
    }

    #[test]
    fn test_help_subcommand_is_chat_help() {
        let cli = Cli::parse_from(["artibot", "help"]);
        assert!(matches!(cli.command, Some(Commands::Help)));
        assert!(Cli::try_parse_from(["artibot", "--help"]).is_err());
    }

    #[test]
    fn test_say_requires_text() {
        assert!(Cli::try_parse_from(["artibot", "say"]).is_err());
    }

    #[test]
    fn test_connection_flags() {
        let cli = Cli::parse_from([
            "artibot",
            "config",
            "--artifactory-endpoint",
            "https://af.example.com",
            "--artifactory-ssl-verify",
            "no",
            "--artifactory-proxy-port",
            "3128",
        ]);
        assert_eq!(
            cli.artifactory.endpoint.as_deref(),
            Some("https://af.example.com")
        );
        assert_eq!(cli.artifactory.ssl_verify, Some(false));
        assert_eq!(cli.artifactory.proxy_port, Some(3128));
    }
}
