//! Username to user ID resolution.

use rookies_error::{DiscordError, DiscordErrorKind};
use serenity::model::id::UserId;
use std::collections::HashMap;

/// Lowercase and strip dots, the form SimGrid and Discord usernames are
/// compared in.
///
/// ```
/// use rookies_discord::normalize_handle;
///
/// assert_eq!(normalize_handle("Jane.Doe"), "janedoe");
/// ```
pub fn normalize_handle(handle: &str) -> String {
    handle.to_lowercase().replace('.', "")
}

/// Guild members indexed by normalized username.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberDirectory {
    members: HashMap<String, UserId>,
}

impl MemberDirectory {
    /// Index `(username, id)` pairs.
    pub fn new<S: AsRef<str>>(members: impl IntoIterator<Item = (S, UserId)>) -> Self {
        let members = members
            .into_iter()
            .map(|(name, id)| (normalize_handle(name.as_ref()), id))
            .collect();
        Self { members }
    }

    /// Add one member.
    pub fn insert(&mut self, username: &str, id: UserId) {
        self.members.insert(normalize_handle(username), id);
    }

    /// Number of indexed members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when no members are indexed.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// User ID for a driver's Discord handle.
    ///
    /// # Errors
    ///
    /// [`DiscordErrorKind::MemberNotFound`] if nobody in the guild has that username.
    pub fn resolve(&self, handle: &str) -> Result<UserId, DiscordError> {
        self.members
            .get(&normalize_handle(handle))
            .copied()
            .ok_or_else(|| DiscordError::new(DiscordErrorKind::MemberNotFound(handle.to_string())))
    }
}
