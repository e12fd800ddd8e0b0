//! Route one chat message to the core handler.

use artibot_core::{ChatUser, PromotionRequest};
use tracing::{debug, info};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::help::help_text;
use crate::router::ParsedCommand;

/// Answer `message` on behalf of `user`.
///
/// Returns `Ok(None)` when the message matches no route. A rejected
/// promotion is a reply, not an error.
pub async fn respond(
    ctx: &CliContext,
    message: &str,
    user: &ChatUser,
) -> Result<Option<String>, CliError> {
    let Some(command) = ctx.router().parse(message) else {
        debug!(message, "No route matched");
        return Ok(None);
    };

    let reply = match command {
        ParsedCommand::Help => help_text(),
        ParsedCommand::Repositories => ctx.handler().repositories().await?,
        ParsedCommand::Promote {
            artifact,
            version,
            from,
            to,
        } => {
            info!(
                user = %user.mention_name,
                %artifact,
                %version,
                %from,
                %to,
                "Promotion requested"
            );
            let request = PromotionRequest::new(artifact, version, from, to, user.clone());
            ctx.handler().promote(&request).await?
        }
    };

    Ok(Some(reply))
}
