//! Top-level error wrapper types.

use crate::{
    ConfigError, DiscordError, DocsError, PenaltyError, SimGridError, YamlError,
};

/// Every error a rookies command can surface.
///
/// # Examples
///
/// ```
/// use rookies_error::{RookiesError, YamlError};
///
/// let yaml_err = YamlError::new("unexpected end of stream");
/// let err: RookiesError = yaml_err.into();
/// assert!(format!("{}", err).contains("YAML Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum RookiesErrorKind {
    /// YAML serialization/deserialization error
    #[from(YamlError)]
    Yaml(YamlError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// SimGrid league API error
    #[from(SimGridError)]
    SimGrid(SimGridError),
    /// Penalty aggregation error
    #[from(PenaltyError)]
    Penalty(PenaltyError),
    /// Discord error
    #[from(DiscordError)]
    Discord(DiscordError),
    /// Google Drive / Docs error
    #[from(DocsError)]
    Docs(DocsError),
}

/// Rookies error with kind discrimination.
///
/// # Examples
///
/// ```
/// use rookies_error::{RookiesResult, ConfigError};
///
/// fn might_fail() -> RookiesResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Rookies Error: {}", _0)]
pub struct RookiesError(Box<RookiesErrorKind>);

impl RookiesError {
    /// Create a new error from a kind.
    pub fn new(kind: RookiesErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RookiesErrorKind {
        &self.0
    }
}

impl<T> From<T> for RookiesError
where
    T: Into<RookiesErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for rookies operations.
pub type RookiesResult<T> = std::result::Result<T, RookiesError>;
