//! Authentication endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::request::send_request;
use crate::error::{ClientError, Result};
use crate::models::LoginResponse;

/// Login to Splunk with username and password, returning the session key.
///
/// Any non-2xx answer is reported as [`ClientError::AuthFailed`] carrying
/// the response body.
pub async fn login(
    client: &Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<String> {
    debug!("Logging in to Splunk as {}", username);

    let url = format!("{}/services/auth/login", base_url);
    let builder = client.post(&url).form(&[
        ("username", username),
        ("password", password),
        ("output_mode", "json"),
    ]);
    let response = send_request(builder, "/services/auth/login", "POST").await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        debug!(status = status.as_u16(), "Login rejected");
        return Err(ClientError::AuthFailed(body));
    }

    let parsed: LoginResponse = serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse login response: {}", e)))?;

    parsed
        .into_session_key()
        .ok_or_else(|| ClientError::InvalidResponse("Missing sessionKey in response".to_string()))
}
