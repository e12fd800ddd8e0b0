//! Help command handler.

use crate::router::Router;

/// One line per chat command.
pub fn help_text() -> String {
    Router::help_entries()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the chat command help.
pub fn execute() {
    println!("{}", help_text());
}
