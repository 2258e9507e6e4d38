//! Environment-derived configuration.
//!
//! Responsibilities:
//! - Expose helpers for reading `SPLUNK_*` variables and loading `.env`.
//!
//! Does NOT handle:
//! - Reading or writing the state file (see `persistence`).

mod env;
mod error;

pub use env::{env_var_or_none, load_dotenv, validate_timeout_secs};
pub use error::ConfigError;
