//! Google Drive / Docs error types.

/// Kinds of document generation errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DocsErrorKind {
    /// Request could not be sent or the response body could not be read
    #[display("Request to {} failed: {}", endpoint, message)]
    Request {
        /// API URL that was requested
        endpoint: String,
        /// Transport error message
        message: String,
    },
    /// API answered with a failing status code
    #[display("Google API returned {} for {}: {}", status, endpoint, body)]
    Status {
        /// API URL that was requested
        endpoint: String,
        /// Status code
        status: u16,
        /// Response body, usually a JSON error document
        body: String,
    },
    /// Response body did not match the expected schema
    #[display("Failed to parse response from {}: {}", endpoint, message)]
    Parse {
        /// API URL that was requested
        endpoint: String,
        /// Decoder error message
        message: String,
    },
    /// The template has no heading to insert the penalty section ahead of
    #[display("Could not find H3 '{}' to start inserting penalty data ahead of", _0)]
    AnchorNotFound(String),
}

/// Document generation error with location tracking.
///
/// # Examples
///
/// ```
/// use rookies_error::{DocsError, DocsErrorKind};
///
/// let err = DocsError::new(DocsErrorKind::AnchorNotFound("Stream".to_string()));
/// assert!(format!("{}", err).contains("Could not find H3 'Stream'"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Docs Error: {} at line {} in {}", kind, line, file)]
pub struct DocsError {
    /// The kind of error that occurred
    pub kind: DocsErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DocsError {
    /// Create a new docs error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DocsErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
