//! Shell completion generation command.
//!
//! Invariants:
//! - Output is always written to stdout; no state file is read.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io;

/// Generate shell completions for the specified shell.
pub fn run(shell: Shell) -> Result<()> {
    let mut cmd = crate::args::Cli::command();
    generate(shell, &mut cmd, "splunk-cli", &mut io::stdout());
    Ok(())
}
