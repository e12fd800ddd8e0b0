//! The chat user a command is acting on behalf of.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of the chat user who issued a command.
///
/// Recorded in the Artifactory audit trail of every promotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatUser {
    /// Display name.
    pub name: String,
    /// Chat platform user id.
    pub id: String,
    /// Handle used to mention the user.
    pub mention_name: String,
}

impl ChatUser {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        mention_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            mention_name: mention_name.into(),
        }
    }

    /// The `ciUser` value sent with a promotion.
    pub fn audit_label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ChatUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (ID: {}, Mention name: {})",
            self.name, self.id, self.mention_name
        )
    }
}
