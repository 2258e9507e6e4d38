//! `init`: create the state file for a Splunk instance.
//!
//! Asks before replacing an existing file, then logs in and saves.

use anyhow::Result;
use splunk_config::ClientState;
use splunk_config::constants::DEFAULT_SPLUNK_PORT;
use tracing::info;

use crate::config_context::CommandContext;
use crate::error::CliError;
use crate::interactive::{confirm, prompt_line};

pub async fn run(ctx: &CommandContext, force: bool) -> Result<()> {
    if ctx.state_file.exists() && !force {
        let question = format!(
            "Init file {} already exists. Do you want to overwrite?",
            ctx.state_file.path().display()
        );
        if !confirm(&question)? {
            return Err(CliError::UserAborted.into());
        }
    }

    let address = match &ctx.base_url {
        Some(url) => url.clone(),
        None => prompt_line(&format!(
            "Splunk Address (e.g. https://localhost:{}): ",
            DEFAULT_SPLUNK_PORT
        ))?,
    };
    if address.is_empty() {
        return Err(CliError::MissingArgument("the Splunk address").into());
    }

    let state = ClientState::new(&address)?;
    let mut client = ctx.client(state)?;
    super::login::renew(&mut client, ctx).await?;

    ctx.state_file.save(client.state())?;
    info!(path = %ctx.state_file.path().display(), "Initialized state file");
    Ok(())
}
