//! `clear`: drop history entries whose job no longer exists.
//!
//! An authentication failure aborts before anything is saved.

use anyhow::Result;

use crate::config_context::CommandContext;

pub async fn run(ctx: &CommandContext) -> Result<()> {
    let mut client = ctx.load_client()?;
    let report = client.prune_history().await?;
    ctx.state_file.save(client.state())?;

    tracing::info!(
        kept = report.kept,
        removed = report.removed,
        "Cleared expired searches"
    );
    Ok(())
}
