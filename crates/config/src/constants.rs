//! Centralized constants for the splunk-cli workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// State File
// =============================================================================

/// File name of the persisted client state, placed in the user's home directory.
pub const DEFAULT_STATE_FILE_NAME: &str = ".splunk";

/// Environment variable that overrides the state file location.
pub const STATE_PATH_ENV_VAR: &str = "SPLUNK_CONFIG_PATH";

/// Maximum number of submitted searches kept in history.
pub const DEFAULT_HISTORY_MAX_ITEMS: usize = 100;

// =============================================================================
// Connection
// =============================================================================

/// Default Splunk management port, used in the `init` prompt hint.
pub const DEFAULT_SPLUNK_PORT: u16 = 8089;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Results
// =============================================================================

/// Result count sent to the results endpoint when none is given; Splunk treats 0 as "all".
pub const DEFAULT_RESULTS_COUNT: u64 = 0;
