//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, sets up logging and dispatches to the
//! handlers. Errors are printed once here and mapped to an exit code.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use artibot_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Help => handlers::help::execute(),
        Commands::Config => handlers::config::execute(&cli.artifactory.to_settings()),
        Commands::Say { text, user } => {
            let ctx = bootstrap(CliConfig::new(cli.artifactory.to_settings(), cli.robot_name))?;
            handlers::say::execute(&ctx, &text.join(" "), &user.to_chat_user()).await?;
        }
        Commands::Shell { user } => {
            let ctx = bootstrap(CliConfig::new(cli.artifactory.to_settings(), cli.robot_name))?;
            handlers::shell::execute(&ctx, &user.to_chat_user()).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
