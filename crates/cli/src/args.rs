//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read global connection options from flags or `SPLUNK_*` variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use splunk_config::constants::DEFAULT_RESULTS_COUNT;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "splunk-cli")]
#[command(
    about = "Splunk CLI - Submit searches and read results from the Splunk REST API",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  splunk-cli init\n  splunk-cli search 'search earliest=-1h index=main error'\n  splunk-cli status\n  splunk-cli status 0\n  splunk-cli results 0 --count 10\n  splunk-cli clear\n"
)]
pub struct Cli {
    /// Base URL of the Splunk server, used by `init` (e.g., https://localhost:8089)
    #[arg(short, long, global = true, env = "SPLUNK_BASE_URL")]
    pub base_url: Option<String>,

    /// Username for login (prompted when absent)
    #[arg(short, long, global = true, env = "SPLUNK_USERNAME")]
    pub username: Option<String>,

    /// Password for login (prompted when absent)
    #[arg(short, long, global = true, env = "SPLUNK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "SPLUNK_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, global = true, env = "SPLUNK_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Path to the state file (overrides the default `~/.splunk`).
    ///
    /// Can also be set via SPLUNK_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = "SPLUNK_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the state file: ask for the server address, log in and save
    Init {
        /// Overwrite an existing state file without asking
        #[arg(long)]
        force: bool,
    },

    /// Log in again and store a fresh session token
    Login,

    /// Submit a search job and record it in history
    ///
    /// The query must contain a time range (e.g. earliest=-1h) unless
    /// --earliest is given.
    Search {
        /// The search query (e.g., 'search earliest=-1h index=main error')
        query: String,

        /// Earliest time for the search (e.g., '-24h', '2024-01-01T00:00:00')
        #[arg(short, long, allow_hyphen_values = true)]
        earliest: Option<String>,

        /// Latest time for the search (e.g., 'now')
        #[arg(short, long, allow_hyphen_values = true)]
        latest: Option<String>,
    },

    /// Remove history entries whose search job no longer exists
    Clear,

    /// Show job status, or list search history when no reference is given
    Status {
        /// History index or search ID
        reference: Option<String>,

        /// Print the response body as returned by Splunk
        #[arg(long)]
        raw: bool,
    },

    /// Print the results of a search job
    Results {
        /// History index or search ID
        reference: Option<String>,

        /// Maximum number of results (0 fetches all)
        #[arg(short, long, default_value_t = DEFAULT_RESULTS_COUNT)]
        count: u64,

        /// Print the response body as returned by Splunk
        #[arg(long)]
        raw: bool,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
