//! Drivers' briefing start time.

use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use rookies_config::BriefingSchedule;
use rookies_error::{DiscordError, DiscordErrorKind};

/// The next `weekday` at `time` in `now`'s timezone. Today counts, even if
/// the time has already passed.
///
/// Returns `None` if that local time does not exist on that day (a DST gap).
pub fn next_briefing(now: DateTime<Tz>, weekday: Weekday, time: NaiveTime) -> Option<DateTime<Tz>> {
    let days_ahead = (7 + weekday.num_days_from_monday() - now.weekday().num_days_from_monday()) % 7;
    let date = now.date_naive() + Duration::days(i64::from(days_ahead));
    now.timezone()
        .from_local_datetime(&date.and_time(time))
        .earliest()
}

/// Briefing start for the configured schedule, relative to `now`.
pub fn briefing_time(
    schedule: &BriefingSchedule,
    now: DateTime<Utc>,
) -> Result<DateTime<Tz>, DiscordError> {
    let invalid = |e: String| DiscordError::new(DiscordErrorKind::InvalidSchedule(e));
    let tz: Tz = schedule.tz().map_err(|e| invalid(e.to_string()))?;
    let time = schedule.local_time().map_err(|e| invalid(e.to_string()))?;

    next_briefing(now.with_timezone(&tz), schedule.weekday, time).ok_or_else(|| {
        invalid(format!(
            "{} does not exist on the next {} in {}",
            schedule.time, schedule.weekday, schedule.timezone
        ))
    })
}
