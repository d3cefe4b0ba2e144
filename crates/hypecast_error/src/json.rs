//! Decode error types for JSON payloads.

/// Error decoding or encoding a JSON payload, such as a completion
/// response body or a stored content column.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// Description of the failure
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use hypecast_error::JsonError;
    ///
    /// let err = JsonError::new("trailing characters at line 3");
    /// assert!(err.message.contains("trailing characters"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create an error naming the payload that failed to decode.
    ///
    /// # Examples
    ///
    /// ```
    /// use hypecast_error::JsonError;
    ///
    /// let err = JsonError::decoding("completion response", "missing field `choices`");
    /// assert!(err.message.contains("completion response"));
    /// ```
    #[track_caller]
    pub fn decoding(what: &str, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: format!("failed to decode {}: {}", what, message.into()),
            line: location.line(),
            file: location.file(),
        }
    }
}
