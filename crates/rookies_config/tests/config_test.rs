//! Tests for bot and round configuration files.

use chrono::Weekday;
use config::Environment;
use rookies_config::{
    BotConfig, BriefingSchedule, Config, ENV_PREFIX, PenaltyNumbers, Round, RoundConfig,
};
use rookies_error::{RookiesErrorKind, YamlError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const BOT_YAML: &str = r#"
simgrid_api_token: sg-token
championship_id: "12345"
season: S12
briefing_template_doc_id: briefing-template
briefing_folder_id: briefing-folder
tracker_template_doc_id: tracker-template
tracker_folder_id: tracker-folder
google_access_token: ya29.token
discord_token: discord-token
discord_channel_id: 1100000000000000001
discord_role_name: Rookies Drivers
discord_briefing_channel_id: 1100000000000000002
"#;

const ROUND_YAML: &str = r#"
penalties:
  quali_bans_r1: [7]
  pit_starts_r2: [12, 31]
penalties_carried_over:
  pit_starts_r1: [44]
previous_round:
  number: 3
  track: Spa
  penalty_tracker_link: https://docs.google.com/spreadsheets/d/abc
next_round:
  number: 4
  track: Monza
"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_bot_config_applies_defaults() {
    let file = write_temp(BOT_YAML);
    let config = BotConfig::load(file.path()).unwrap();

    assert_eq!(config.championship_id, "12345");
    assert_eq!(config.season, "S12");
    assert_eq!(config.league_name, "Rookies");
    assert_eq!(config.discord_channel_id, 1_100_000_000_000_000_001);
    assert_eq!(config.briefing, BriefingSchedule::default());
    assert_eq!(config.briefing.weekday, Weekday::Mon);
}

#[test]
fn test_load_bot_config_with_custom_briefing() {
    let yaml = format!(
        "{}briefing:\n  weekday: Wed\n  time: \"20:00\"\n  timezone: Europe/London\n  display: 8PM UK\n",
        BOT_YAML
    );
    let file = write_temp(&yaml);
    let config = BotConfig::load(file.path()).unwrap();

    assert_eq!(config.briefing.weekday, Weekday::Wed);
    assert_eq!(config.briefing.time, "20:00");
    assert_eq!(config.briefing.tz().unwrap(), chrono_tz::Europe::London);
    assert_eq!(config.briefing.display, "8PM UK");
}

#[test]
fn test_bot_config_rejects_missing_settings() {
    let yaml = BOT_YAML.replace("discord_token: discord-token", "discord_token: \"\"");
    let file = write_temp(&yaml);
    let err = BotConfig::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("discord_token"));
}

#[test]
fn test_bot_config_rejects_bad_timezone() {
    let file = write_temp(BOT_YAML);
    let mut config = BotConfig::load(file.path()).unwrap();
    config.briefing.timezone = "Mars/Olympus_Mons".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_bot_config_missing_file_names_path() {
    let err = BotConfig::load("/definitely/not/here.yml").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.yml"));
    match err.kind() {
        RookiesErrorKind::Config(config) => {
            assert_eq!(config.path.as_deref(), Some(Path::new("/definitely/not/here.yml")));
        }
        other => panic!("unexpected error kind: {other}"),
    }
}

#[test]
fn test_environment_overrides_bot_file() {
    let file = write_temp(BOT_YAML);
    let mut vars = config::Map::new();
    vars.insert("ROOKIES_DISCORD_TOKEN".to_string(), "from-env".to_string());
    vars.insert("ROOKIES_GOOGLE_ACCESS_TOKEN".to_string(), "ya29.env".to_string());
    vars.insert("ROOKIES_DISCORD_CHANNEL_ID".to_string(), "42".to_string());
    vars.insert("OTHER_SEASON".to_string(), "ignored".to_string());

    let config = BotConfig::load_with_environment(
        file.path(),
        Environment::with_prefix(ENV_PREFIX).source(Some(vars)),
    )
    .unwrap();

    assert_eq!(config.discord_token, "from-env");
    assert_eq!(config.google_access_token, "ya29.env");
    assert_eq!(config.discord_channel_id, 42);
    assert_eq!(config.season, "S12");
}

#[test]
fn test_bot_config_rejects_zero_channel_ids() {
    let yaml = BOT_YAML.replace("discord_channel_id: 1100000000000000001", "discord_channel_id: 0");
    let err = BotConfig::load(write_temp(&yaml).path()).unwrap_err();
    assert!(err.to_string().contains("discord_channel_id must be"));

    let yaml = BOT_YAML.replace(
        "discord_briefing_channel_id: 1100000000000000002",
        "discord_briefing_channel_id: 0",
    );
    let err = BotConfig::load(write_temp(&yaml).path()).unwrap_err();
    assert!(err.to_string().contains("discord_briefing_channel_id must be"));
}

#[test]
fn test_bot_config_rejects_malformed_briefing_time() {
    let yaml = format!("{}briefing:\n  time: 7pm\n", BOT_YAML);
    let err = BotConfig::load(write_temp(&yaml).path()).unwrap_err();
    assert!(err.to_string().contains("Invalid briefing time '7pm'"));

    let schedule = BriefingSchedule {
        time: "25:00".to_string(),
        ..Default::default()
    };
    assert!(schedule.local_time().is_err());
}

#[test]
fn test_unparsable_round_file_names_path() {
    let file = write_temp("penalties:\n  quali_bans_r1: [seven]\n");
    let err = RoundConfig::load(file.path()).unwrap_err();
    match err.kind() {
        RookiesErrorKind::Config(config) => {
            assert_eq!(config.path.as_deref(), Some(file.path()));
            assert!(config.message.starts_with("Failed parsing"));
        }
        other => panic!("unexpected error kind: {other}"),
    }
}

#[test]
fn test_yaml_error_keeps_document_position() {
    let err = serde_yaml::from_str::<RoundConfig>("penalties:\n  quali_bans_r1: [1, 2\n").unwrap_err();
    let yaml = YamlError::from(err);

    assert!(yaml.position.is_some());
    assert!(yaml.to_string().contains("document line"));
    assert!(YamlError::new("boom").position.is_none());
}

#[test]
fn test_load_round_config() {
    let file = write_temp(ROUND_YAML);
    let round = RoundConfig::load(file.path()).unwrap();

    assert_eq!(round.penalties.quali_bans_r1, vec![7]);
    assert_eq!(round.penalties.pit_starts_r2, vec![12, 31]);
    assert!(round.penalties.pit_starts_r1.is_empty());
    assert_eq!(round.carried_over_penalties.pit_starts_r1, vec![44]);
    assert_eq!(round.previous_round.track, "Spa");
    assert_eq!(round.next_round.number, 4);
    assert!(round.next_round.penalty_tracker_link.is_empty());
}

#[test]
fn test_legacy_quali_bans_key() {
    let file = write_temp("penalties:\n  quali_bans: [3, 9]\n");
    let round = RoundConfig::load(file.path()).unwrap();
    assert_eq!(round.penalties.quali_bans_r1, vec![3, 9]);
}

#[test]
fn test_round_config_yaml_round_trip() -> anyhow::Result<()> {
    let original = RoundConfig {
        penalties: PenaltyNumbers {
            quali_bans_r1: vec![1, 2],
            pit_starts_r1: vec![3],
            quali_bans_r2: vec![],
            pit_starts_r2: vec![99],
        },
        carried_over_penalties: PenaltyNumbers {
            quali_bans_r1: vec![],
            pit_starts_r1: vec![5, 8],
            quali_bans_r2: vec![13],
            pit_starts_r2: vec![],
        },
        next_round: Round {
            number: 6,
            track: "Brands Hatch".to_string(),
            penalty_tracker_link: "https://docs.google.com/spreadsheets/d/next".to_string(),
        },
        previous_round: Round {
            number: 5,
            track: "Zandvoort".to_string(),
            penalty_tracker_link: "https://docs.google.com/spreadsheets/d/prev".to_string(),
        },
    };

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("round.yml");
    original.save(&path)?;
    let loaded = RoundConfig::load(&path)?;

    assert_eq!(loaded, original);
    Ok(())
}

#[test]
fn test_round_config_writes_carried_over_key() {
    let mut round = RoundConfig::default();
    round.carried_over_penalties.quali_bans_r2 = vec![21];
    let yaml = round.to_yaml().unwrap();
    assert!(yaml.contains("penalties_carried_over:"));
    assert!(yaml.contains("quali_bans_r2:"));
}

#[test]
fn test_round_file_name() {
    let round = Round {
        number: 10,
        track: "Mount Panorama Bathurst".to_string(),
        penalty_tracker_link: String::new(),
    };
    assert_eq!(
        RoundConfig::file_name("Season 7", &round),
        "season 7-round-10-mount-panorama-bathurst.yml"
    );
}

#[test]
fn test_config_load_combines_both_files() {
    let bot = write_temp(BOT_YAML);
    let round = write_temp(ROUND_YAML);
    let config = Config::load(bot.path(), round.path()).unwrap();

    assert_eq!(config.bot.season, "S12");
    assert_eq!(config.round.previous_round.number, 3);
}

#[test]
fn test_penalty_numbers_is_empty() {
    assert!(PenaltyNumbers::default().is_empty());
    let numbers = PenaltyNumbers {
        pit_starts_r2: vec![4],
        ..Default::default()
    };
    assert!(!numbers.is_empty());
}
