//! Per-round penalty and schedule data.

use rookies_error::{ConfigError, RookiesError, RookiesResult, YamlError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Car numbers penalised in each category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyNumbers {
    /// Race 1 qualifying bans
    #[serde(default, alias = "quali_bans")]
    pub quali_bans_r1: Vec<u32>,
    /// Race 1 pit lane starts
    #[serde(default)]
    pub pit_starts_r1: Vec<u32>,
    /// Race 2 qualifying bans
    #[serde(default)]
    pub quali_bans_r2: Vec<u32>,
    /// Race 2 pit lane starts
    #[serde(default)]
    pub pit_starts_r2: Vec<u32>,
}

impl PenaltyNumbers {
    /// True when no category lists any car.
    pub fn is_empty(&self) -> bool {
        self.quali_bans_r1.is_empty()
            && self.pit_starts_r1.is_empty()
            && self.quali_bans_r2.is_empty()
            && self.pit_starts_r2.is_empty()
    }
}

/// One round of the championship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Round number, starting at 1
    #[serde(default)]
    pub number: u32,
    /// Track name as SimGrid reports it
    #[serde(default)]
    pub track: String,
    /// Link to the sheet explaining the penalties handed out in this round
    #[serde(default)]
    pub penalty_tracker_link: String,
}

/// Penalties to serve at the next round, plus the rounds either side.
///
/// # Example
///
/// ```yaml
/// penalties:
///   quali_bans_r1: [7]
///   pit_starts_r2: [12, 31]
/// penalties_carried_over:
///   pit_starts_r1: [44]
/// previous_round:
///   number: 3
///   track: Spa
///   penalty_tracker_link: https://docs.google.com/spreadsheets/d/abc
/// next_round:
///   number: 4
///   track: Monza
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Penalties handed out at the previous round
    #[serde(default)]
    pub penalties: PenaltyNumbers,
    /// Penalties still outstanding from earlier rounds
    #[serde(default, rename = "penalties_carried_over")]
    pub carried_over_penalties: PenaltyNumbers,
    /// The round about to be raced
    #[serde(default)]
    pub next_round: Round,
    /// The round the penalties were handed out at
    #[serde(default)]
    pub previous_round: Round,
}

impl RoundConfig {
    /// Read a round file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> RookiesResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            RookiesError::from(ConfigError::with_path(path, format!("Failed reading: {}", e)))
        })?;

        let round: RoundConfig = serde_yaml::from_str(&data).map_err(|e| {
            RookiesError::from(ConfigError::with_path(path, format!("Failed parsing: {}", e)))
        })?;

        debug!(
            previous = round.previous_round.number,
            next = round.next_round.number,
            "Round configuration loaded"
        );
        Ok(round)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> RookiesResult<String> {
        Ok(serde_yaml::to_string(self).map_err(YamlError::from)?)
    }

    /// Write a round file, replacing any existing one.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> RookiesResult<()> {
        let path = path.as_ref();
        let data = self.to_yaml()?;
        std::fs::write(path, data).map_err(|e| {
            RookiesError::from(ConfigError::with_path(
                path,
                format!("Failed to write out round config: {}", e),
            ))
        })?;
        info!("Wrote round configuration");
        Ok(())
    }

    /// File name for the round file covering penalties from `round`.
    ///
    /// ```
    /// use rookies_config::{Round, RoundConfig};
    ///
    /// let round = Round { number: 4, track: "Brands Hatch".into(), ..Default::default() };
    /// assert_eq!(RoundConfig::file_name("S12", &round), "s12-round-4-brands-hatch.yml");
    /// ```
    pub fn file_name(season: &str, round: &Round) -> String {
        format!(
            "{}-round-{}-{}.yml",
            season,
            round.number,
            round.track.replace(' ', "-")
        )
        .to_lowercase()
    }
}
