//! Client state persistence.
//!
//! Responsibilities:
//! - Resolve the state file location.
//! - Define the persisted `ClientState` and read/write it atomically.
//!
//! Does NOT handle:
//! - Loading environment variables (see `loader`).
//! - REST API communication (see `crates/client`).
//!
//! Invariants:
//! - A state file that fails to parse is reported, never silently replaced.

mod error;
mod path;
mod state;

pub use error::StateError;
pub use path::{default_state_path, resolve_state_path};
pub use state::{ClientState, SearchRecord};
