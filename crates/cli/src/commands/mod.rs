//! CLI command implementations.
//!
//! Commands that mutate state (`init`, `login`, `search`, `clear`) save the
//! state file only after their remote call succeeded.

pub mod clear;
pub mod completions;
pub mod init;
pub mod login;
pub mod results;
pub mod search;
pub mod status;
