//! Authentication models for the Splunk login API.

use serde::Deserialize;

use super::common::Entry;

/// Response body of `POST /services/auth/login`.
///
/// With `output_mode=json` Splunk returns `{"sessionKey": ...}` at the top
/// level; some versions wrap it as `entry[0].content.sessionKey`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "sessionKey")]
    session_key: Option<String>,
    #[serde(default)]
    entry: Vec<Entry<LoginContent>>,
}

#[derive(Debug, Clone, Deserialize)]
struct LoginContent {
    #[serde(rename = "sessionKey")]
    session_key: Option<String>,
}

impl LoginResponse {
    /// The session key, from whichever shape the server used.
    pub fn into_session_key(self) -> Option<String> {
        self.session_key
            .or_else(|| self.entry.into_iter().next()?.content.session_key)
            .filter(|key| !key.is_empty())
    }
}
