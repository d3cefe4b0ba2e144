//! Transport error types for outbound API calls.

/// Error from an outbound HTTP exchange, such as an OpenRouter
/// completion request or a DuckDuckGo lookup.
///
/// Carries the response status when the server answered at all;
/// transport failures (DNS, timeout, TLS) leave it unset.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", message, line, file)]
pub struct HttpError {
    /// Description of the failure
    pub message: String,
    /// HTTP status code, if a response was received
    pub status: Option<u16>,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create an error for a failure with no usable response.
    ///
    /// # Examples
    ///
    /// ```
    /// use hypecast_error::HttpError;
    ///
    /// let err = HttpError::new("completion request timed out");
    /// assert!(err.status.is_none());
    /// assert!(err.message.contains("timed out"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create an error for a response the server rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use hypecast_error::HttpError;
    ///
    /// let err = HttpError::with_status(429, "completion request rejected");
    /// assert_eq!(err.status, Some(429));
    /// assert!(err.message.contains("429"));
    /// ```
    #[track_caller]
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: format!("status {}: {}", status, message.into()),
            status: Some(status),
            line: location.line(),
            file: location.file(),
        }
    }
}
