//! SimGrid league API error types.

/// Kinds of SimGrid errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SimGridErrorKind {
    /// Request could not be sent or the response body could not be read
    #[display("Request to {} failed: {}", endpoint, message)]
    Request {
        /// API path that was requested
        endpoint: String,
        /// Transport error message
        message: String,
    },
    /// API answered with a failing status code
    #[display("HTTP request failure for {}: {}", endpoint, status)]
    Status {
        /// API path that was requested
        endpoint: String,
        /// Status code returned by SimGrid
        status: u16,
    },
    /// Response body did not match the expected schema
    #[display("Failed to parse response from {}: {}", endpoint, message)]
    Parse {
        /// API path that was requested
        endpoint: String,
        /// Decoder error message
        message: String,
    },
    /// An entry-list driver has no matching participating user
    #[display("Unknown driver: {}", _0)]
    UnknownDriver(String),
}

/// SimGrid error with location tracking.
///
/// # Examples
///
/// ```
/// use rookies_error::{SimGridError, SimGridErrorKind};
///
/// let err = SimGridError::new(SimGridErrorKind::UnknownDriver("JaneDoe".to_string()));
/// assert!(format!("{}", err).contains("Unknown driver: JaneDoe"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("SimGrid Error: {} at line {} in {}", kind, line, file)]
pub struct SimGridError {
    /// The kind of error that occurred
    pub kind: SimGridErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SimGridError {
    /// Create a new SimGrid error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SimGridErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
