//! Testing utilities for Splunk client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! ```ignore
//! use splunk_client::testing::{load_fixture, state_for};
//!
//! let fixture = load_fixture("search/job_status_done.json");
//! let state = state_for(&mock_server.uri(), "session-key");
//! ```

use std::path::Path;

use splunk_config::ClientState;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// A logged-in state pointing at `address`.
///
/// # Panics
/// If `address` is not an http(s) URL.
pub fn state_for(address: &str, token: &str) -> ClientState {
    let mut state = ClientState::new(address).expect("valid test address");
    if !token.is_empty() {
        state.set_session("admin", token);
    }
    state
}
