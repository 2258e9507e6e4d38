//! `login`: obtain a fresh session token and store it.

use anyhow::{Context, Result};
use splunk_client::SplunkClient;
use tracing::info;

use crate::config_context::CommandContext;
use crate::interactive::credentials;

pub async fn run(ctx: &CommandContext) -> Result<()> {
    let mut client = ctx.load_client()?;
    renew(&mut client, ctx).await?;
    ctx.state_file.save(client.state())?;
    Ok(())
}

/// Resolve credentials and renew the client's session.
pub(crate) async fn renew(client: &mut SplunkClient, ctx: &CommandContext) -> Result<()> {
    let (username, password) = credentials(ctx.username.as_deref(), ctx.password.as_deref())?;
    let address = client.base_url().to_string();

    client
        .renew_session(&username, &password)
        .await
        .with_context(|| format!("unable to authenticate with {}", address))?;

    info!(username = %username, address = %address, "Logged in");
    Ok(())
}
