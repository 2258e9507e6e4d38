//! Client builder for constructing [`SplunkClient`] instances.
//!
//! This module is responsible for:
//! - Taking the loaded [`ClientState`], whose address is the base URL
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, TLS verification)
//!
//! # Invariants
//! - `state` is required and must be provided before calling `build()`
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning
//! - Without an explicit timeout the transport default applies

use std::time::Duration;

use splunk_config::ClientState;

use crate::client::SplunkClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`SplunkClient`].
#[derive(Debug, Default)]
pub struct SplunkClientBuilder {
    state: Option<ClientState>,
    skip_verify: bool,
    timeout: Option<Duration>,
}

impl SplunkClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the client state; its address becomes the base URL.
    pub fn state(mut self, state: ClientState) -> Self {
        self.state = Some(state);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set an overall request timeout. `None` keeps the transport default.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    pub(crate) fn normalize_base_url(url: &str) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if no state was provided, and
    /// [`ClientError::HttpError`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<SplunkClient> {
        let state = self
            .state
            .ok_or_else(|| ClientError::InvalidUrl("client state is required".to_string()))?;
        let base_url = Self::normalize_base_url(state.address());
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("address is empty".to_string()));
        }

        let mut http_builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http_builder = http_builder.timeout(timeout);
        }

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(SplunkClient {
            http,
            base_url,
            state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(address: &str) -> ClientState {
        ClientState::new(address).unwrap()
    }

    #[test]
    fn test_build_requires_state() {
        let err = SplunkClientBuilder::new().build().unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_base_url_taken_from_state() {
        let client = SplunkClient::builder()
            .state(state("https://splunk.example.com:8089/"))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://splunk.example.com:8089");
    }

    #[test]
    fn test_skip_verify_with_https_and_http() {
        let https = SplunkClient::builder()
            .state(state("https://localhost:8089"))
            .skip_verify(true)
            .build();
        assert!(https.is_ok());

        let http = SplunkClient::builder()
            .state(state("http://localhost:8089"))
            .skip_verify(true)
            .build();
        assert!(http.is_ok());
    }

    #[test]
    fn test_timeout_is_optional() {
        let client = SplunkClient::builder()
            .state(state("https://localhost:8089"))
            .timeout(Some(Duration::from_secs(5)))
            .build();
        assert!(client.is_ok());
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            SplunkClientBuilder::normalize_base_url("https://h:8089///"),
            "https://h:8089"
        );
    }
}
