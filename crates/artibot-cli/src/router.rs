//! Chat command grammar.
//!
//! Every command the bot understands is a row in a static route table: a
//! case-insensitive pattern anchored at the start of the message, a help
//! entry, and a function that turns the captures into a typed command.
//! Text after a match is ignored.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex, RegexBuilder};

// ============================================================================
// Patterns
// ============================================================================

fn pattern(source: &str) -> Regex {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .expect("route pattern is a valid regex")
}

static PROMOTE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"^artifact(?:ory)?\s+promote\s+(?P<artifact>[\w\-\.\+]+)\s+(?P<version>[\w\-\.\+]+)\s+from\s+(?P<from>[\w\-]+)\s+to\s+(?P<to>[\w\-]+)",
    )
});

static REPOSITORIES: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^artifact(?:ory)?\s+repos(?:itories)?"));

static HELP: LazyLock<Regex> = LazyLock::new(|| pattern(r"^help\b"));

// ============================================================================
// Commands
// ============================================================================

/// A chat message the bot knows how to answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// `artifactory promote <artifact> <version> from <from> to <to>`
    Promote {
        artifact: String,
        version: String,
        from: String,
        to: String,
    },
    /// `artifactory repos`
    Repositories,
    /// `help`
    Help,
}

/// One line of the help listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    pub command: &'static str,
    pub description: &'static str,
}

impl fmt::Display for HelpEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.command, self.description)
    }
}

struct Route {
    pattern: &'static LazyLock<Regex>,
    help: HelpEntry,
    build: fn(&Captures<'_>) -> ParsedCommand,
}

static ROUTES: &[Route] = &[
    Route {
        pattern: &PROMOTE,
        help: HelpEntry {
            command: "artifactory promote",
            description: "promote <artifact> <version> from <from-repo> to <to-repo>",
        },
        build: |caps| ParsedCommand::Promote {
            artifact: caps["artifact"].to_string(),
            version: caps["version"].to_string(),
            from: caps["from"].to_string(),
            to: caps["to"].to_string(),
        },
    },
    Route {
        pattern: &REPOSITORIES,
        help: HelpEntry {
            command: "artifactory repos",
            description: "list artifact repositories",
        },
        build: |_| ParsedCommand::Repositories,
    },
];

// ============================================================================
// Router
// ============================================================================

/// Matches chat messages against the route table.
///
/// Messages may be addressed to the bot (`artibot: ...`, `artibot, ...`,
/// `@artibot ...`); the address is stripped before matching.
#[derive(Debug, Clone)]
pub struct Router {
    robot_name: String,
    address: Regex,
}

impl Router {
    /// Create a router that answers to `robot_name`.
    pub fn new(robot_name: &str) -> Result<Self, regex::Error> {
        let address = RegexBuilder::new(&format!(
            r"^\s*@?{}[:,]?\s+",
            regex::escape(robot_name)
        ))
        .case_insensitive(true)
        .build()?;

        Ok(Self {
            robot_name: robot_name.to_string(),
            address,
        })
    }

    pub fn robot_name(&self) -> &str {
        &self.robot_name
    }

    /// The message with any leading address to the bot removed.
    pub fn strip_address<'a>(&self, message: &'a str) -> &'a str {
        let message = message.trim();
        self.address
            .find(message)
            .map_or(message, |m| &message[m.end()..])
    }

    /// Parse a chat message into a command, or `None` if nothing matches.
    pub fn parse(&self, message: &str) -> Option<ParsedCommand> {
        let text = self.strip_address(message);

        if HELP.is_match(text) {
            return Some(ParsedCommand::Help);
        }

        ROUTES.iter().find_map(|route| {
            route
                .pattern
                .captures(text)
                .map(|caps| (route.build)(&caps))
        })
    }

    /// Help entries in route order.
    pub fn help_entries() -> impl Iterator<Item = &'static HelpEntry> {
        ROUTES.iter().map(|route| &route.help)
    }
}
