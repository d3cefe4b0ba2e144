//! Database error types.

/// Specific error conditions for database operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DatabaseErrorKind {
    /// Failed to establish a connection
    #[display("Connection failed: {}", _0)]
    Connection(String),
    /// Failed to check out a pooled connection
    #[display("Connection pool error: {}", _0)]
    Pool(String),
    /// A query failed
    #[display("Query failed: {}", _0)]
    Query(String),
    /// Running pending migrations failed
    #[display("Migration failed: {}", _0)]
    Migration(String),
    /// Requested row does not exist
    #[display("Content with id {} not found", _0)]
    NotFound(i32),
    /// Stored JSON column could not be decoded
    #[display("Failed to decode stored column '{}': {}", column, message)]
    ColumnDecode {
        /// Column name
        column: String,
        /// Error message
        message: String,
    },
}

/// Error type for database operations.
///
/// # Examples
///
/// ```
/// use hypecast_error::{DatabaseError, DatabaseErrorKind};
///
/// let err = DatabaseError::new(DatabaseErrorKind::NotFound(42));
/// assert!(format!("{}", err).contains("42"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Database Error: {} at line {} in {}", kind, line, file)]
pub struct DatabaseError {
    /// The specific error condition
    pub kind: DatabaseErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl DatabaseError {
    /// Create a new DatabaseError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DatabaseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
