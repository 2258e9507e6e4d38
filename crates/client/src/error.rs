//! Error types for the Splunk client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Splunk client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Login rejected; carries the response body.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// An authenticated call was answered with HTTP 401.
    #[error("auth failed: perhaps session expired; run `splunk-cli login`")]
    SessionExpired,

    /// No session token is stored yet.
    #[error("not logged in; run `splunk-cli login`")]
    NotAuthenticated,

    /// Network or connection failure.
    #[error("HTTP request failed")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx response from Splunk other than 401.
    #[error("API error ({status}) at {url}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        request_id: Option<String>,
    },

    /// Response body did not match the expected JSON shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Search ID carries no parsable creation timestamp.
    #[error("Can't parse date from SID '{0}'")]
    MalformedSid(String),

    /// Input rejected before any request was sent.
    #[error("{0}")]
    ValidationError(String),

    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error indicates authentication failure.
    ///
    /// Pruning aborts on these instead of treating the job as gone.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::AuthFailed(_) | Self::SessionExpired | Self::NotAuthenticated
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_auth_error() {
        assert!(ClientError::AuthFailed("bad password".to_string()).is_auth_error());
        assert!(ClientError::SessionExpired.is_auth_error());
        assert!(ClientError::NotAuthenticated.is_auth_error());

        let err = ClientError::ApiError {
            status: 404,
            url: "https://localhost:8089/services/search/jobs/x".to_string(),
            message: "Unknown sid.".to_string(),
            request_id: None,
        };
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_api_error_display_includes_status_and_request_id() {
        let err = ClientError::ApiError {
            status: 500,
            url: "https://localhost:8089/services/search/jobs".to_string(),
            message: "boom".to_string(),
            request_id: Some("abc".to_string()),
        };
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("boom"));
        assert!(text.contains("[Request ID: abc]"));
    }

    #[test]
    fn test_malformed_sid_display() {
        let err = ClientError::MalformedSid("scheduler_abc".to_string());
        assert_eq!(err.to_string(), "Can't parse date from SID 'scheduler_abc'");
    }
}
