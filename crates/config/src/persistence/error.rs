//! Errors for reading, writing and constructing client state.

use std::path::PathBuf;

/// Errors that can occur when handling the state file.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("{path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write state file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize client state: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("unable to determine home directory for the state file")]
    HomeDirUnavailable,

    #[error("invalid Splunk address '{address}': {message}")]
    InvalidAddress { address: String, message: String },
}

impl StateError {
    /// True when the state file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
