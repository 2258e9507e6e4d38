//! Main Splunk REST API client and API methods.
//!
//! [`SplunkClient`] owns the loaded [`ClientState`] and mutates it as
//! commands succeed; callers persist it afterwards.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Login and token access
//! - `search`: Submission, status and results
//! - `history`: Pruning of stored search IDs
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Reading or writing the state file (see [`splunk_config::ClientState`])
//!
//! # Invariants
//! - Every request is sent once; there is no retry or re-login.
//! - An HTTP 401 on an authenticated call surfaces as
//!   [`crate::ClientError::SessionExpired`], never as a generic API error.

pub mod builder;
mod history;
mod search;
mod session;

use std::fmt;

use splunk_config::ClientState;

pub use history::PruneReport;

/// Splunk REST API client.
///
/// ```rust,ignore
/// use splunk_client::SplunkClient;
/// use splunk_config::ClientState;
///
/// let state = ClientState::load(&path)?;
/// let mut client = SplunkClient::builder().state(state).build()?;
/// let sid = client.submit_search("search earliest=-1h error", &Default::default()).await?;
/// client.state().save(&path)?;
/// ```
pub struct SplunkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) state: ClientState,
}

impl SplunkClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SplunkClientBuilder {
        builder::SplunkClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The state as mutated by the calls made so far.
    pub fn state(&self) -> &ClientState {
        &self.state
    }
}

impl fmt::Debug for SplunkClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplunkClient")
            .field("base_url", &self.base_url)
            .field("state", &self.state)
            .finish()
    }
}
