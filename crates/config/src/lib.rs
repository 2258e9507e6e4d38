//! Configuration and persisted state for splunk-cli.
//!
//! This crate owns the on-disk client state (address, session token and
//! search history), the state file location, and environment helpers.

pub mod constants;
mod loader;
pub mod persistence;

pub use loader::{ConfigError, env_var_or_none, load_dotenv, validate_timeout_secs};
pub use persistence::{
    ClientState, SearchRecord, StateError, default_state_path, resolve_state_path,
};
