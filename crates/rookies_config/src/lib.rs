//! Configuration for the rookies league bot.
//!
//! Two YAML documents drive every run:
//! - the bot file (`config.yml`): credentials, template IDs, Discord targets
//! - the round file (`round-N.yml`): penalties handed out by the stewards and
//!   the rounds either side of this week's race
//!
//! The bot file is loaded through the `config` crate so that any field can be
//! overridden by a `ROOKIES_`-prefixed environment variable. Round files are
//! plain serde YAML because the bot also writes them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bot;
mod round;

pub use bot::{BotConfig, BriefingSchedule, ENV_PREFIX};
pub use round::{PenaltyNumbers, Round, RoundConfig};

use rookies_error::RookiesResult;
use std::path::Path;
use tracing::instrument;

/// Bot settings plus the round being processed.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Durable bot settings
    pub bot: BotConfig,
    /// Per-round penalties and schedule
    pub round: RoundConfig,
}

impl Config {
    /// Load the bot file and the round file.
    ///
    /// # Errors
    ///
    /// Fails if either file is unreadable, unparsable, or the bot settings
    /// are incomplete.
    #[instrument(skip_all, fields(bot = %bot_path.as_ref().display(), round = %round_path.as_ref().display()))]
    pub fn load(bot_path: impl AsRef<Path>, round_path: impl AsRef<Path>) -> RookiesResult<Self> {
        let bot = BotConfig::load(bot_path)?;
        let round = RoundConfig::load(round_path)?;
        Ok(Self { bot, round })
    }
}
