//! Single-shot request execution and status mapping.
//!
//! Every call is sent exactly once. Non-2xx responses are turned into
//! [`ClientError`] variants here so the endpoint functions only deal with
//! successful bodies.

use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::SplunkMessages;

const REQUEST_ID_HEADER: &str = "X-Splunk-Request-Id";

/// Send a request once, mapping only transport failures.
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
) -> Result<Response> {
    debug!(endpoint, method, "Sending request");
    let response = builder.send().await.map_err(|e| {
        debug!(endpoint, method, error = %e, "Request failed before a response was received");
        ClientError::from(e)
    })?;
    debug!(
        endpoint,
        method,
        status = response.status().as_u16(),
        "Received response"
    );
    Ok(response)
}

/// Send an authenticated request once.
///
/// HTTP 401 becomes [`ClientError::SessionExpired`]; any other non-2xx
/// status becomes [`ClientError::ApiError`].
pub async fn send_authenticated(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
) -> Result<Response> {
    let response = send_request(builder, endpoint, method).await?;
    if response.status() == StatusCode::UNAUTHORIZED {
        return Err(ClientError::SessionExpired);
    }
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(response)
}

/// Build an [`ClientError::ApiError`] from a non-2xx response.
///
/// Splunk's `{"messages": [...]}` envelope is summarized when present;
/// otherwise the raw body is used.
pub async fn api_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<SplunkMessages>(&body) {
        Ok(m) if !m.messages.is_empty() => m.summary(),
        _ => body,
    };

    ClientError::ApiError {
        status,
        url,
        message,
        request_id,
    }
}

/// Read a successful response body as text.
pub async fn read_body(response: Response) -> Result<String> {
    Ok(response.text().await?)
}
