//! State file and connection settings shared by command handlers.
//!
//! Responsibilities:
//! - Resolve the state file path (flag, `SPLUNK_CONFIG_PATH`, `~/.splunk`).
//! - Load and save [`ClientState`] with user-facing error context.
//! - Build a [`SplunkClient`] from state plus connection flags.
//!
//! Does NOT handle:
//! - CLI argument definitions (see `args` module).
//!
//! Invariants:
//! - A state file that fails to load is reported and never overwritten.

use anyhow::{Context, Result};
use splunk_client::SplunkClient;
use splunk_config::{ClientState, resolve_state_path, validate_timeout_secs};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::args::Cli;
use crate::error::CliError;

/// Everything a command needs besides its own arguments.
pub(crate) struct CommandContext {
    pub(crate) state_file: StateFile,
    pub(crate) base_url: Option<String>,
    pub(crate) username: Option<String>,
    pub(crate) password: Option<String>,
    skip_verify: bool,
    timeout: Option<Duration>,
}

impl CommandContext {
    pub(crate) fn from_cli(cli: &Cli) -> Result<Self> {
        let state_file = StateFile::resolve(cli.config_path.clone())?;
        let timeout = cli
            .timeout
            .map(validate_timeout_secs)
            .transpose()
            .context("invalid --timeout")?;

        Ok(Self {
            state_file,
            base_url: non_blank(cli.base_url.as_deref()),
            username: non_blank(cli.username.as_deref()),
            password: cli.password.clone().filter(|p| !p.is_empty()),
            skip_verify: cli.skip_verify,
            timeout,
        })
    }

    /// Build a client owning `state`.
    pub(crate) fn client(&self, state: ClientState) -> Result<SplunkClient> {
        let client = SplunkClient::builder()
            .state(state)
            .skip_verify(self.skip_verify)
            .timeout(self.timeout)
            .build()?;
        Ok(client)
    }

    /// Load the state file and build a client from it.
    pub(crate) fn load_client(&self) -> Result<SplunkClient> {
        let state = self.state_file.load()?;
        self.client(state)
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// The resolved location of the persisted client state.
pub(crate) struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub(crate) fn resolve(override_path: Option<PathBuf>) -> Result<Self> {
        let path = resolve_state_path(override_path)?;
        tracing::debug!(path = %path.display(), "Resolved state file");
        Ok(Self { path })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn exists(&self) -> bool {
        self.path.exists()
    }

    pub(crate) fn load(&self) -> Result<ClientState> {
        ClientState::load(&self.path).map_err(|e| {
            if !e.is_not_found() {
                tracing::warn!(path = %self.path.display(), "State file is unreadable; leaving it untouched");
            }
            CliError::StateUnavailable(e).into()
        })
    }

    pub(crate) fn save(&self, state: &ClientState) -> Result<()> {
        state
            .save(&self.path)
            .with_context(|| format!("failed to save config file {}", self.path.display()))
    }
}
