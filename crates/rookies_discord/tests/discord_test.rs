//! Tests for announcement formatting, handle resolution and briefing time.

use chrono::{NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::America::New_York;
use rookies_config::{BotConfig, BriefingSchedule, PenaltyNumbers, Round};
use rookies_core::{Driver, DriverLookup, Penalties};
use rookies_discord::messages::{
    briefing_announcement, briefing_event_name, penalty_announcement, penalty_sections,
};
use rookies_discord::{
    DISCORD_MESSAGE_LIMIT, DiscordClient, MemberDirectory, briefing_time, next_briefing,
    normalize_handle,
};
use rookies_error::DiscordErrorKind;
use serenity::model::id::{RoleId, UserId};

fn directory() -> MemberDirectory {
    MemberDirectory::new(vec![
        ("Jane.Doe", UserId::new(101)),
        ("maxp", UserId::new(202)),
        ("lando", UserId::new(303)),
    ])
}

fn penalties() -> Penalties {
    let lookup = DriverLookup::new(vec![
        Driver::new("Jane", "Doe", "jane.doe", 7),
        Driver::new("Max", "Power", "MaxP", 44),
        Driver::new("Lando", "Norris", "lando", 4),
    ]);
    let new = PenaltyNumbers {
        quali_bans_r1: vec![7],
        pit_starts_r2: vec![44],
        ..Default::default()
    };
    let carried = PenaltyNumbers {
        quali_bans_r1: vec![4],
        ..Default::default()
    };
    Penalties::build(&lookup, &new, &carried).unwrap()
}

fn round(number: u32, track: &str) -> Round {
    Round {
        number,
        track: track.to_string(),
        penalty_tracker_link: String::new(),
    }
}

#[test]
fn test_normalize_handle() {
    assert_eq!(normalize_handle("Jane.Doe"), "janedoe");
    assert_eq!(normalize_handle("a.b.c"), "abc");
    assert_eq!(normalize_handle("plain"), "plain");
}

#[test]
fn test_directory_resolves_normalized_handles() {
    let directory = directory();
    assert_eq!(directory.len(), 3);
    assert_eq!(directory.resolve("janedoe").unwrap(), UserId::new(101));
    assert_eq!(directory.resolve("JANE.DOE").unwrap(), UserId::new(101));
    assert_eq!(directory.resolve("MaxP").unwrap(), UserId::new(202));

    let err = directory.resolve("ghost").unwrap_err();
    assert_eq!(err.kind, DiscordErrorKind::MemberNotFound("ghost".to_string()));
}

#[test]
fn test_penalty_sections_layout() {
    let sections = penalty_sections(&penalties(), &directory(), "https://example.invalid/why").unwrap();

    let expected = "\n**Quali Bans R1**\n- <@303> (carried over)\n- <@101>\n\
                    \n**Pit Starts R1**\n- None!\n\
                    \n**Quali Bans R2**\n- None!\n\
                    \n**Pit Starts R2**\n- <@202>\n\
                    \n[Explanations of penalties can be found here.](https://example.invalid/why)\n";
    assert_eq!(sections, expected);
}

#[test]
fn test_penalty_sections_fail_for_unknown_member() {
    let directory = MemberDirectory::new(vec![("maxp", UserId::new(202))]);
    let err = penalty_sections(&penalties(), &directory, "link").unwrap_err();
    assert!(matches!(err.kind, DiscordErrorKind::MemberNotFound(_)));
}

#[test]
fn test_penalty_announcement() {
    let message = penalty_announcement(&round(3, "Spa"), &round(4, "Monza"), "SECTIONS");
    assert!(message.contains("🚓 **Penalties from Round 3** 🚓"));
    assert!(message.contains("Stewarding is in from Round 3."));
    assert!(message.contains("served next week at Monza:"));
    assert!(message.ends_with("SECTIONS"));
}

#[test]
fn test_briefing_announcement() {
    let start = Utc.with_ymd_and_hms(2026, 10, 19, 23, 30, 0).unwrap();
    let message = briefing_announcement(
        RoleId::new(555),
        &start,
        "https://docs.google.com/document/d/abc",
        &round(4, "Monza"),
        "SECTIONS",
    );

    assert!(message.contains("It's Race Day!!"));
    assert!(message.contains("<@&555> **Mandatory** drivers' briefing"));
    assert!(message.contains(&format!("<t:{}>", start.timestamp())));
    assert!(message.contains("[briefing doc](https://docs.google.com/document/d/abc) for Round 4"));
    assert!(message.ends_with("SECTIONS"));
}

#[test]
fn test_briefing_event_name() {
    assert_eq!(
        briefing_event_name("Rookies", &round(4, "Brands Hatch")),
        "Rookies Briefing Round 4 - Brands Hatch"
    );
}

#[test]
fn test_next_briefing_later_in_week() {
    // Wednesday 14 October 2026
    let now = New_York.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap();
    let time = NaiveTime::from_hms_opt(19, 30, 0).unwrap();

    let next = next_briefing(now, Weekday::Mon, time).unwrap();
    assert_eq!(next, New_York.with_ymd_and_hms(2026, 10, 19, 19, 30, 0).unwrap());
}

#[test]
fn test_next_briefing_today_counts() {
    let now = New_York.with_ymd_and_hms(2026, 10, 19, 21, 0, 0).unwrap();
    let time = NaiveTime::from_hms_opt(19, 30, 0).unwrap();

    let next = next_briefing(now, Weekday::Mon, time).unwrap();
    assert_eq!(next, New_York.with_ymd_and_hms(2026, 10, 19, 19, 30, 0).unwrap());
}

#[test]
fn test_briefing_time_follows_daylight_saving() {
    let schedule = BriefingSchedule::default();

    // Before the November change: EDT, UTC-4
    let summer = briefing_time(&schedule, Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap()).unwrap();
    assert_eq!(summer.with_timezone(&Utc), Utc.with_ymd_and_hms(2026, 10, 19, 23, 30, 0).unwrap());

    // After it: EST, UTC-5
    let winter = briefing_time(&schedule, Utc.with_ymd_and_hms(2026, 11, 4, 12, 0, 0).unwrap()).unwrap();
    assert_eq!(winter.with_timezone(&Utc), Utc.with_ymd_and_hms(2026, 11, 10, 0, 30, 0).unwrap());
}

#[test]
fn test_briefing_time_rejects_bad_timezone() {
    let schedule = BriefingSchedule {
        timezone: "Mars/Olympus_Mons".to_string(),
        ..Default::default()
    };
    let err = briefing_time(&schedule, Utc::now()).unwrap_err();
    assert!(matches!(err.kind, DiscordErrorKind::InvalidSchedule(_)));
}

#[test]
fn test_briefing_time_in_daylight_saving_gap_is_an_error() {
    let schedule = BriefingSchedule {
        weekday: Weekday::Sun,
        time: "02:30".to_string(),
        ..Default::default()
    };
    // Sunday 14 March 2027, 01:00 EST; clocks jump from 02:00 to 03:00
    let now = Utc.with_ymd_and_hms(2027, 3, 14, 6, 0, 0).unwrap();

    let err = briefing_time(&schedule, now).unwrap_err();
    match err.kind {
        DiscordErrorKind::InvalidSchedule(message) => {
            assert!(message.contains("02:30 does not exist"));
        }
        other => panic!("unexpected error kind: {other}"),
    }
}

fn bot_config() -> BotConfig {
    BotConfig {
        simgrid_api_token: "sg-token".to_string(),
        championship_id: "12345".to_string(),
        season: "S12".to_string(),
        league_name: "Rookies".to_string(),
        briefing_template_doc_id: "briefing-template".to_string(),
        briefing_folder_id: "briefing-folder".to_string(),
        tracker_template_doc_id: "tracker-template".to_string(),
        tracker_folder_id: "tracker-folder".to_string(),
        google_access_token: String::new(),
        discord_token: "not-a-real-token".to_string(),
        discord_channel_id: 1_100_000_000_000_000_001,
        discord_role_name: "Rookies Drivers".to_string(),
        discord_briefing_channel_id: 1_100_000_000_000_000_002,
        briefing: BriefingSchedule::default(),
    }
}

#[tokio::test]
async fn test_send_message_rejects_text_over_limit() {
    let client = DiscordClient::new(&bot_config());
    let content = "🏁".repeat(DISCORD_MESSAGE_LIMIT + 1);

    let err = client.send_message(&content).await.unwrap_err();
    match err.kind {
        DiscordErrorKind::MessageSendFailed(message) => {
            assert!(message.contains("limit of 2000 characters (2001)"));
        }
        other => panic!("unexpected error kind: {other}"),
    }
}
