//! Error types for the backend API client

/// Errors that can occur when talking to the parking backend
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Non-2xx status; `message` carries the backend `error` field when present
    #[error("API error (HTTP {status}){}", message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Api { status: u16, message: Option<String> },

    /// A 2xx response body that does not match the expected shape
    #[error("Response decode error: {0}")]
    Decode(String),
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn api_error_display_includes_backend_message() {
        let error = ApiError::Api {
            status: 400,
            message: Some("Duplicate telemetry data".to_string()),
        };
        assert_eq!(
            error.to_string(),
            "API error (HTTP 400): Duplicate telemetry data"
        );
    }

    #[test]
    fn api_error_display_without_message_shows_status_only() {
        let error = ApiError::Api {
            status: 502,
            message: None,
        };
        assert_eq!(error.to_string(), "API error (HTTP 502)");
    }

    #[test]
    fn http_error_display_carries_cause() {
        let error = ApiError::Http("connection refused".to_string());
        assert_eq!(error.to_string(), "HTTP request failed: connection refused");
    }
}
