//! Path helpers for the state file location.
//!
//! Responsibilities:
//! - Resolve the state file path from an explicit override, the environment,
//!   or the user's home directory.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use super::error::StateError;
use crate::constants::{DEFAULT_STATE_FILE_NAME, STATE_PATH_ENV_VAR};
use crate::loader::env_var_or_none;

/// Returns the default path to the state file: `~/.splunk`.
pub fn default_state_path() -> Result<PathBuf, StateError> {
    let dirs = directories::BaseDirs::new().ok_or(StateError::HomeDirUnavailable)?;
    Ok(dirs.home_dir().join(DEFAULT_STATE_FILE_NAME))
}

/// Resolve the state file path.
///
/// Priority: explicit override (e.g. `--config-path`), then
/// `SPLUNK_CONFIG_PATH`, then [`default_state_path`]. Blank overrides are
/// ignored so they fall through to the next source.
pub fn resolve_state_path(override_path: Option<PathBuf>) -> Result<PathBuf, StateError> {
    if let Some(path) = override_path
        && !path.as_os_str().to_string_lossy().trim().is_empty()
    {
        return Ok(path);
    }

    if let Some(path) = env_var_or_none(STATE_PATH_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }

    default_state_path()
}
