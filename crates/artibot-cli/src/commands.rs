//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

use crate::config::UserArgs;

/// Available commands for the artibot host.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one chat message to the bot and print the reply
    Say {
        /// The message, e.g. "artifactory repos"
        #[arg(required = true)]
        text: Vec<String>,

        #[command(flatten)]
        user: UserArgs,
    },

    /// Chat with the bot interactively, one message per line
    Shell {
        #[command(flatten)]
        user: UserArgs,
    },

    /// List the chat commands the bot understands
    Help,

    /// Show the resolved Artifactory settings
    Config,
}
