//! HTTP server error types.

/// Specific error conditions for the API server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ServerErrorKind {
    /// Failed to bind the listen address
    #[display("Failed to bind {}: {}", addr, message)]
    Bind {
        /// Listen address
        addr: String,
        /// Error message
        message: String,
    },
    /// Server loop terminated with an error
    #[display("Server error: {}", _0)]
    Serve(String),
}

/// Error type for API server operations.
///
/// # Examples
///
/// ```
/// use hypecast_error::{ServerError, ServerErrorKind};
///
/// let err = ServerError::new(ServerErrorKind::Serve("socket closed".to_string()));
/// assert!(format!("{}", err).contains("socket closed"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Server Error: {} at line {} in {}", kind, line, file)]
pub struct ServerError {
    /// The specific error condition
    pub kind: ServerErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ServerError {
    /// Create a new ServerError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
