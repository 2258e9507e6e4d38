//! `results`: print the rows of a search job, one per line.

use anyhow::Result;

use crate::config_context::CommandContext;
use crate::error::CliError;

pub async fn run(
    ctx: &CommandContext,
    reference: Option<&str>,
    count: u64,
    raw: bool,
) -> Result<()> {
    let client = ctx.load_client()?;
    let reference = reference.ok_or(CliError::MissingArgument("search ID"))?;
    let sid = client.resolve_reference(reference);

    if raw {
        println!("{}", client.results_raw(sid, count).await?);
        return Ok(());
    }

    for record in client.results(sid, count).await? {
        println!("{}", record.to_line());
    }
    Ok(())
}
