//! Discord error types.
//!
//! Covers REST failures from serenity plus the lookups the bot performs
//! against guild state (roles, members, channel kind).

/// Discord error variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DiscordErrorKind {
    /// Serenity API error (HTTP error, rate limit, permission failure).
    #[display("Serenity API error: {_0}")]
    SerenityError(String),

    /// The announcement channel does not belong to a guild text channel.
    #[display("Provided channel {_0} was not a guild text channel")]
    NotGuildChannel(u64),

    /// No role with the given name exists in the guild.
    #[display("Role {_0} not found")]
    RoleNotFound(String),

    /// No guild member matches the given handle.
    #[display("Could not find user {_0} in guild. Check for special characters or league abandonment")]
    MemberNotFound(String),

    /// Message failed to send.
    #[display("Message send failed: {_0}")]
    MessageSendFailed(String),

    /// Scheduled event could not be created.
    #[display("Scheduled event failed: {_0}")]
    EventFailed(String),

    /// Briefing time could not be computed from the configured schedule.
    #[display("Invalid briefing schedule: {_0}")]
    InvalidSchedule(String),
}

/// Discord error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Discord Error: {} at line {} in {}", kind, line, file)]
pub struct DiscordError {
    /// The kind of error that occurred
    pub kind: DiscordErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DiscordError {
    /// Create a new DiscordError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use rookies_error::{DiscordError, DiscordErrorKind};
    ///
    /// let err = DiscordError::new(DiscordErrorKind::RoleNotFound("Rookies".to_string()));
    /// assert!(format!("{}", err).contains("Role Rookies not found"));
    /// ```
    #[track_caller]
    pub fn new(kind: DiscordErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
