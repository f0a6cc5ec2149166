//! Penalty aggregation error types.

/// Kinds of penalty aggregation errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PenaltyErrorKind {
    /// A configured car number is not registered in the championship
    #[display(
        "Could not find driver {} in registered SimGrid drivers. Please double check the car number and try again. Drivers may have changed their number, or withdrawn since the last race.",
        _0
    )]
    UnknownCarNumber(u32),
    /// A car is listed as both a new and a carried over penalty in one category
    #[display("Car {} is listed as both a new and a carried over penalty for {}", car_number, category)]
    DuplicatePenalty {
        /// Offending car number
        car_number: u32,
        /// Penalty category title
        category: String,
    },
}

/// Penalty error with location tracking.
///
/// # Examples
///
/// ```
/// use rookies_error::{PenaltyError, PenaltyErrorKind};
///
/// let err = PenaltyError::new(PenaltyErrorKind::UnknownCarNumber(42));
/// assert!(format!("{}", err).contains("Could not find driver 42"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Penalty Error: {} at line {} in {}", kind, line, file)]
pub struct PenaltyError {
    /// The kind of error that occurred
    pub kind: PenaltyErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PenaltyError {
    /// Create a new penalty error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PenaltyErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
