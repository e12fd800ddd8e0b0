//! Interactive shell handler.
//!
//! Reads one chat message per line until `exit`, `quit` or EOF. Failed
//! commands are reported and the loop carries on.

use anyhow::Result;
use artibot_core::ChatUser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, warn};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::dispatch::respond;

/// What to do with one line of input.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Skip,
    Exit,
    Message(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() {
        Line::Skip
    } else if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
        Line::Exit
    } else {
        Line::Message(line)
    }
}

/// Run the interactive loop.
pub async fn execute(ctx: &CliContext, user: &ChatUser) -> Result<()> {
    let mut editor = DefaultEditor::new().map_err(|e| CliError::Io(e.to_string()))?;
    let prompt = format!("{} > ", ctx.router().robot_name());

    println!(
        "Chatting with {} as {}. Type `help` for commands, `exit` to leave.",
        ctx.router().robot_name(),
        user.name
    );

    loop {
        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(CliError::Io(e.to_string()).into()),
        };

        let message = match classify(&line) {
            Line::Skip => continue,
            Line::Exit => break,
            Line::Message(message) => message,
        };
        record_history(&mut editor, message);

        match respond(ctx, message, user).await {
            Ok(Some(reply)) => println!("{reply}"),
            Ok(None) => println!("Sorry, I don't understand. Type `help` for commands."),
            Err(e) => {
                warn!(error = %e, "Command failed");
                eprintln!("Error: {e}");
            }
        }
    }

    Ok(())
}

/// History is a convenience; a failed write only costs recall.
fn record_history(editor: &mut DefaultEditor, line: &str) {
    if let Err(e) = editor.add_history_entry(line) {
        debug!(error = %e, "Could not record history entry");
    }
}
