//! Content generation error types.

/// Specific error conditions for content generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Completion service is not configured or unreachable before the first request
    #[display("Completion service unavailable: {}", _0)]
    Unavailable(String),
    /// Completion service returned no usable text for a request
    #[display("Completion service returned an empty response for '{}'", _0)]
    EmptyResponse(String),
    /// Prompt assembly failed
    #[display("Failed to assemble prompt: {}", _0)]
    PromptAssembly(String),
}

/// Error type for content generation operations.
///
/// Only the `Unavailable` kind is fatal to a whole generation call;
/// per-category failures in a fan-out batch are logged and skipped.
///
/// # Examples
///
/// ```
/// use hypecast_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Unavailable(
///     "OPENROUTER_API_KEY not set".to_string(),
/// ));
/// assert!(format!("{}", err).contains("unavailable"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
