//! YAML error types.

use std::fmt;

/// Round file (de)serialization failure.
#[derive(Debug, Clone, derive_more::Error)]
pub struct YamlError {
    /// Decoder or encoder message
    pub message: String,
    /// `(line, column)` inside the YAML document, 1-based, when known
    pub position: Option<(usize, usize)>,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl YamlError {
    /// Create a YamlError with no document position.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            position: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Attach the position inside the YAML document.
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.position = Some((line, column));
        self
    }
}

impl fmt::Display for YamlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YAML Error: {}", self.message)?;
        if let Some((line, column)) = self.position {
            write!(f, " (document line {}, column {})", line, column)?;
        }
        write!(f, " at line {} in {}", self.line, self.file)
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for YamlError {
    #[track_caller]
    fn from(err: serde_yaml::Error) -> Self {
        let yaml = YamlError::new(err.to_string());
        match err.location() {
            Some(mark) => yaml.at(mark.line(), mark.column()),
            None => yaml,
        }
    }
}
