//! Say command handler: one message in, one reply out.

use anyhow::Result;
use artibot_core::ChatUser;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::dispatch::respond;

/// Send `message` as `user` and print the reply.
///
/// A message that matches no command is a usage error.
pub async fn execute(ctx: &CliContext, message: &str, user: &ChatUser) -> Result<()> {
    match respond(ctx, message, user).await? {
        Some(reply) => {
            println!("{reply}");
            Ok(())
        }
        None => Err(CliError::Usage(format!(
            "I don't know how to answer \"{message}\". Try `{} help`.",
            ctx.router().robot_name()
        ))
        .into()),
    }
}
