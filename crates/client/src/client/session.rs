//! Login and session token access for [`SplunkClient`].
//!
//! # Invariants
//! - An empty stored token short-circuits with
//!   [`ClientError::NotAuthenticated`] before any request is sent.
//! - A failed login leaves the stored username and token untouched.

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::{ClientError, Result};

impl SplunkClient {
    /// The stored session token, or an error if none is stored.
    pub(crate) fn auth_token(&self) -> Result<&str> {
        let token = self.state.session_token();
        if token.is_empty() {
            return Err(ClientError::NotAuthenticated);
        }
        Ok(token)
    }

    /// Authenticate without touching stored state.
    pub async fn authenticate(&self, username: &str, password: &SecretString) -> Result<String> {
        endpoints::login(
            &self.http,
            &self.base_url,
            username,
            password.expose_secret(),
        )
        .await
    }

    /// Log in and store the new token and username in the client state.
    pub async fn renew_session(
        &mut self,
        username: &str,
        password: &SecretString,
    ) -> Result<String> {
        let token = self.authenticate(username, password).await?;
        debug!("Login succeeded, storing session");
        self.state.set_session(username, token.clone());
        info!(username, "Session renewed");
        Ok(token)
    }
}
