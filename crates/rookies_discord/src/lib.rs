//! Discord integration for the rookies league bot.
//!
//! The bot never connects to the gateway; everything goes through serenity's
//! REST client:
//! - post announcements and keep only the latest one pinned
//! - resolve Discord usernames to user IDs for mentions
//! - look up the role pinged on race day
//! - schedule the drivers' briefing as a stage event
//!
//! Message text is built by pure functions in [`messages`] so it can be
//! checked without a Discord connection.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod directory;
pub mod messages;
mod schedule;

pub use client::{DISCORD_MESSAGE_LIMIT, DiscordClient};
pub use directory::{MemberDirectory, normalize_handle};
pub use schedule::{briefing_time, next_briefing};
