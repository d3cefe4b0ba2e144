//! Top-level error wrapper types.

use crate::{ConfigError, DatabaseError, GenerationError, HttpError, JsonError, ServerError};

/// The foundation error enum covering every error domain in the workspace.
///
/// # Examples
///
/// ```
/// use hypecast_error::{HypecastError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: HypecastError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum HypecastErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Content generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Database error
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// API server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Hypecast error with kind discrimination.
///
/// # Examples
///
/// ```
/// use hypecast_error::{HypecastResult, ConfigError};
///
/// fn might_fail() -> HypecastResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Hypecast Error: {}", _0)]
pub struct HypecastError(Box<HypecastErrorKind>);

impl HypecastError {
    /// Create a new error from a kind.
    pub fn new(kind: HypecastErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HypecastErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to HypecastErrorKind
impl<T> From<T> for HypecastError
where
    T: Into<HypecastErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Hypecast operations.
///
/// # Examples
///
/// ```
/// use hypecast_error::{HypecastResult, HttpError};
///
/// fn fetch_data() -> HypecastResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type HypecastResult<T> = std::result::Result<T, HypecastError>;
