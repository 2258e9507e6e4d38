//! Shared test utilities for splunk-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write state files into temporary directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic: no host `SPLUNK_*`
//!   variable or `.env` file leaks in.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Token written into state files created by [`write_state`].
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-session-key";

/// Returns a hermetic `splunk-cli` command for integration testing.
pub fn splunk_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("splunk-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("SPLUNK_BASE_URL")
        .env_remove("SPLUNK_USERNAME")
        .env_remove("SPLUNK_PASSWORD")
        .env_remove("SPLUNK_SKIP_VERIFY")
        .env_remove("SPLUNK_TIMEOUT")
        .env_remove("SPLUNK_CONFIG_PATH")
        .env_remove("RUST_LOG");

    cmd
}

/// A hermetic command pointed at the state file `path`.
#[allow(dead_code)]
pub fn splunk_cmd_with_state(path: &Path) -> Command {
    let mut cmd = splunk_cmd();
    cmd.env("SPLUNK_CONFIG_PATH", path);
    cmd
}

/// Write a logged-in state file for `address` with the given history.
#[allow(dead_code)]
pub fn write_state(dir: &TempDir, address: &str, searches: &[(&str, &str)]) -> PathBuf {
    let searches: Vec<serde_json::Value> = searches
        .iter()
        .map(|(sid, query)| serde_json::json!({"SearchID": sid, "Search": query}))
        .collect();
    let state = serde_json::json!({
        "username": "admin",
        "session_id": TEST_TOKEN,
        "addr": address,
        "searches": searches,
    });
    let path = dir.path().join("splunk.json");
    std::fs::write(&path, serde_json::to_string_pretty(&state).unwrap()).unwrap();
    path
}

/// Read the state file back as JSON.
#[allow(dead_code)]
pub fn read_state(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}
