//! Durable bot settings.
//!
//! Loads the bot file with a precedence system:
//! 1. The YAML file given on the command line (`--config`, default `config.yml`)
//! 2. Environment overrides (`ROOKIES_DISCORD_TOKEN`, `ROOKIES_GOOGLE_ACCESS_TOKEN`, ...)
//!
//! Tokens are passed through untouched; the bot performs no auth flows of its own.

use chrono::{NaiveTime, Weekday};
use chrono_tz::Tz;
use config::{Config, Environment, File, FileFormat};
use rookies_error::{ConfigError, RookiesError, RookiesResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Prefix for environment variables that override bot file values.
pub const ENV_PREFIX: &str = "ROOKIES";

/// When the weekly drivers' briefing takes place.
///
/// # Example
///
/// ```yaml
/// briefing:
///   weekday: Mon
///   time: "19:30"
///   timezone: America/New_York
///   display: 7:30PM Eastern/4:30PM Pacific
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingSchedule {
    /// Day of the week the briefing happens on
    #[serde(default = "default_weekday")]
    pub weekday: Weekday,
    /// Local start time, `HH:MM`
    #[serde(default = "default_time")]
    pub time: String,
    /// IANA timezone the start time is expressed in
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Human readable start time substituted into the briefing doc
    #[serde(default = "default_display")]
    pub display: String,
}

fn default_weekday() -> Weekday {
    Weekday::Mon
}

fn default_time() -> String {
    "19:30".to_string()
}

fn default_timezone() -> String {
    "America/New_York".to_string()
}

fn default_display() -> String {
    "7:30PM Eastern/4:30PM Pacific".to_string()
}

impl Default for BriefingSchedule {
    fn default() -> Self {
        Self {
            weekday: default_weekday(),
            time: default_time(),
            timezone: default_timezone(),
            display: default_display(),
        }
    }
}

impl BriefingSchedule {
    /// Parsed local start time.
    pub fn local_time(&self) -> RookiesResult<NaiveTime> {
        NaiveTime::parse_from_str(&self.time, "%H:%M").map_err(|e| {
            RookiesError::from(ConfigError::new(format!(
                "Invalid briefing time '{}' (expected HH:MM): {}",
                self.time, e
            )))
        })
    }

    /// Parsed timezone.
    pub fn tz(&self) -> RookiesResult<Tz> {
        self.timezone.parse::<Tz>().map_err(|e| {
            RookiesError::from(ConfigError::new(format!(
                "Invalid briefing timezone '{}': {}",
                self.timezone, e
            )))
        })
    }
}

/// Settings that stay the same from week to week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    /// SimGrid API token
    pub simgrid_api_token: String,
    /// SimGrid championship ID
    pub championship_id: String,
    /// Season label, e.g. `S12`
    pub season: String,
    /// League name used in document titles and event names
    #[serde(default = "default_league_name")]
    pub league_name: String,

    /// Google Doc copied for each briefing
    pub briefing_template_doc_id: String,
    /// Drive folder briefing docs are copied into
    pub briefing_folder_id: String,
    /// Google Sheet copied for each penalty tracker
    pub tracker_template_doc_id: String,
    /// Drive folder penalty trackers are copied into
    pub tracker_folder_id: String,
    /// OAuth access token for Drive and Docs
    #[serde(default)]
    pub google_access_token: String,

    /// Discord bot token
    pub discord_token: String,
    /// Channel penalty and briefing announcements are posted to
    pub discord_channel_id: u64,
    /// Role mentioned in the briefing announcement
    pub discord_role_name: String,
    /// Stage channel that hosts the briefing event
    pub discord_briefing_channel_id: u64,

    /// Briefing schedule
    #[serde(default)]
    pub briefing: BriefingSchedule,
}

fn default_league_name() -> String {
    "Rookies".to_string()
}

impl BotConfig {
    /// Load the bot file, apply environment overrides and validate.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the file if it cannot be read or
    /// parsed, or if a required setting is empty.
    pub fn load(path: impl AsRef<Path>) -> RookiesResult<Self> {
        Self::load_with_environment(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// [`BotConfig::load`] with overrides taken from `environment` instead of
    /// the process environment.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_with_environment(
        path: impl AsRef<Path>,
        environment: Environment,
    ) -> RookiesResult<Self> {
        let path = path.as_ref();
        debug!("Loading bot configuration");

        let config: BotConfig = Config::builder()
            .add_source(File::from(path).format(FileFormat::Yaml))
            .add_source(environment)
            .build()
            .map_err(|e| {
                RookiesError::from(ConfigError::with_path(
                    path,
                    format!("Failed reading: {}", e),
                ))
            })?
            .try_deserialize()
            .map_err(|e| {
                RookiesError::from(ConfigError::with_path(
                    path,
                    format!("Failed parsing: {}", e),
                ))
            })?;

        config.validate()?;
        debug!(championship = %config.championship_id, season = %config.season, "Bot configuration loaded");
        Ok(config)
    }

    /// Check that every setting the commands rely on is present.
    pub fn validate(&self) -> RookiesResult<()> {
        let required = [
            ("simgrid_api_token", &self.simgrid_api_token),
            ("championship_id", &self.championship_id),
            ("season", &self.season),
            ("briefing_template_doc_id", &self.briefing_template_doc_id),
            ("briefing_folder_id", &self.briefing_folder_id),
            ("tracker_template_doc_id", &self.tracker_template_doc_id),
            ("tracker_folder_id", &self.tracker_folder_id),
            ("discord_token", &self.discord_token),
            ("discord_role_name", &self.discord_role_name),
        ];
        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::new(format!(
                "Missing required settings: {}",
                missing.join(", ")
            ))
            .into());
        }

        if self.discord_channel_id == 0 {
            return Err(ConfigError::new("discord_channel_id must be a Discord channel ID").into());
        }
        if self.discord_briefing_channel_id == 0 {
            return Err(ConfigError::new(
                "discord_briefing_channel_id must be a Discord channel ID",
            )
            .into());
        }

        self.briefing.local_time()?;
        self.briefing.tz()?;
        Ok(())
    }
}
