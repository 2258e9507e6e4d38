//! Client state: connection address, session credential and search history.
//!
//! Responsibilities:
//! - Define `ClientState` and `SearchRecord`, the persisted JSON contract.
//! - Record submitted searches and resolve numeric history references.
//! - Read and write the state file (accepting the legacy history shape).
//!
//! Does NOT handle:
//! - Network calls (see `crates/client`).
//! - Path resolution (see `path.rs`).
//!
//! Invariants:
//! - The address is fixed once the state is created.
//! - History keeps insertion order; index `i` always names the `i`-th entry.
//! - History never exceeds `DEFAULT_HISTORY_MAX_ITEMS`; the oldest entry is dropped first.
//! - Writes are atomic (temp file + rename).
//! - The session token never appears in `Debug` output.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::StateError;
use crate::constants::DEFAULT_HISTORY_MAX_ITEMS;

/// A search submitted through this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Server-assigned search ID (SID).
    #[serde(rename = "SearchID", alias = "search_id", alias = "sid")]
    pub search_id: String,
    /// The query text exactly as submitted.
    #[serde(rename = "Search", alias = "search", alias = "query")]
    pub query: String,
}

impl SearchRecord {
    pub fn new(search_id: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            search_id: search_id.into(),
            query: query.into(),
        }
    }
}

/// Persisted client state.
///
/// Field names on disk (`username`, `session_id`, `addr`, `searches`) are kept
/// compatible with state files written by earlier releases.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientState {
    #[serde(default)]
    username: String,
    #[serde(rename = "session_id", default)]
    session_token: String,
    #[serde(rename = "addr")]
    address: String,
    #[serde(default, deserialize_with = "deserialize_history")]
    searches: Vec<SearchRecord>,
}

/// On-disk shapes of the `searches` field.
///
/// Early state files stored a `{sid: query}` object; current files store an
/// ordered array. A `null` (an empty map in those early files) reads as empty.
#[derive(Deserialize)]
#[serde(untagged)]
enum HistoryShape {
    List(Vec<SearchRecord>),
    Legacy(BTreeMap<String, String>),
}

fn deserialize_history<'de, D>(deserializer: D) -> Result<Vec<SearchRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<HistoryShape>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(HistoryShape::List(records)) => records,
        // BTreeMap iterates by SID, and SIDs lead with their creation timestamp.
        Some(HistoryShape::Legacy(map)) => map
            .into_iter()
            .map(|(search_id, query)| SearchRecord { search_id, query })
            .collect(),
    })
}

fn normalize_address(address: &str) -> Result<String, StateError> {
    let invalid = |message: String| StateError::InvalidAddress {
        address: address.to_string(),
        message,
    };

    let trimmed = address.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(invalid("address is required".to_string()));
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{}'", other))),
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    Ok(trimmed.to_string())
}

impl ClientState {
    /// Create a fresh state for the Splunk instance at `address`.
    ///
    /// The address must be an `http` or `https` URL; trailing slashes are removed.
    pub fn new(address: &str) -> Result<Self, StateError> {
        Ok(Self {
            username: String::new(),
            session_token: String::new(),
            address: normalize_address(address)?,
            searches: Vec::new(),
        })
    }

    /// Base URL of the Splunk management endpoint.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The user of the last successful login, if any.
    pub fn username(&self) -> Option<&str> {
        if self.username.is_empty() {
            None
        } else {
            Some(&self.username)
        }
    }

    /// Current session token; empty until a login succeeds.
    pub fn session_token(&self) -> &str {
        &self.session_token
    }

    pub fn has_session(&self) -> bool {
        !self.session_token.is_empty()
    }

    /// Store the credential returned by a successful login.
    pub fn set_session(&mut self, username: impl Into<String>, token: impl Into<String>) {
        self.username = username.into();
        self.session_token = token.into();
    }

    /// Submitted searches in insertion order.
    pub fn history(&self) -> &[SearchRecord] {
        &self.searches
    }

    /// Append a submitted search and return its history index.
    pub fn record_search(&mut self, search_id: impl Into<String>, query: impl Into<String>) -> usize {
        self.searches.push(SearchRecord::new(search_id, query));
        if self.searches.len() > DEFAULT_HISTORY_MAX_ITEMS {
            let excess = self.searches.len() - DEFAULT_HISTORY_MAX_ITEMS;
            self.searches.drain(..excess);
        }
        self.searches.len() - 1
    }

    /// Replace the history with a retained subset.
    pub fn replace_history(&mut self, retained: Vec<SearchRecord>) {
        self.searches = retained;
    }

    /// Resolve a job reference to a search ID.
    ///
    /// A reference that parses as an in-range history index yields the stored
    /// SID; anything else is returned unchanged as a literal SID.
    pub fn resolve_reference<'a>(&'a self, reference: &'a str) -> &'a str {
        reference
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|index| self.searches.get(index))
            .map_or(reference, |record| record.search_id.as_str())
    }

    /// Read the state file at `path`.
    pub fn load(path: &Path) -> Result<Self, StateError> {
        let content = std::fs::read_to_string(path).map_err(|source| StateError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let state: Self = serde_json::from_str(&content).map_err(|source| StateError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            path = %path.display(),
            searches = state.searches.len(),
            has_session = state.has_session(),
            "Loaded client state"
        );

        Ok(state)
    }

    /// Write the state file at `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), StateError> {
        let write_err = |source| StateError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(StateError::Serialize)?;

        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, content).map_err(write_err)?;
        std::fs::rename(&temp_path, path).map_err(write_err)?;

        tracing::debug!(path = %path.display(), "Client state saved atomically");

        Ok(())
    }
}

impl fmt::Debug for ClientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientState")
            .field("username", &self.username)
            .field(
                "session_token",
                &if self.has_session() { "<redacted>" } else { "" },
            )
            .field("address", &self.address)
            .field("searches", &self.searches)
            .finish()
    }
}
