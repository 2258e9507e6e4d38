//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Build the shared [`CommandContext`] for commands that need state.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::config_context::CommandContext;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = cli.command {
        return commands::completions::run(shell);
    }

    let ctx = CommandContext::from_cli(&cli)?;

    match cli.command {
        Commands::Init { force } => commands::init::run(&ctx, force).await,
        Commands::Login => commands::login::run(&ctx).await,
        Commands::Search {
            query,
            earliest,
            latest,
        } => commands::search::run(&ctx, &query, earliest, latest).await,
        Commands::Clear => commands::clear::run(&ctx).await,
        Commands::Status { reference, raw } => {
            commands::status::run(&ctx, reference.as_deref(), raw).await
        }
        Commands::Results {
            reference,
            count,
            raw,
        } => commands::results::run(&ctx, reference.as_deref(), count, raw).await,
        Commands::Completions { .. } => Ok(()),
    }
}
