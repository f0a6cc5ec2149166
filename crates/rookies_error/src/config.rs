//! Configuration error types.

use std::fmt;
use std::path::{Path, PathBuf};

/// Bot or round file problem, optionally tied to the file it came from.
///
/// # Examples
///
/// ```
/// use rookies_error::ConfigError;
///
/// let err = ConfigError::with_path("league/round-4.yml", "Failed parsing: invalid type");
/// assert_eq!(err.path.as_deref(), Some(std::path::Path::new("league/round-4.yml")));
/// assert!(err.to_string().contains("league/round-4.yml: Failed parsing"));
///
/// let err = ConfigError::new("discord_channel_id must be a Discord channel ID");
/// assert!(err.path.is_none());
/// ```
#[derive(Debug, Clone, derive_more::Error)]
pub struct ConfigError {
    /// What is wrong
    pub message: String,
    /// File being read or written, when the error concerns one
    pub path: Option<PathBuf>,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl ConfigError {
    /// Error about the settings themselves rather than a particular file.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            path: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Error reading, parsing or writing the file at `path`.
    #[track_caller]
    pub fn with_path(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            path: Some(path.as_ref().to_path_buf()),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration Error: ")?;
        if let Some(path) = &self.path {
            write!(f, "{}: ", path.display())?;
        }
        write!(f, "{} at line {} in {}", self.message, self.line, self.file)
    }
}
