//! Announcement text.
//!
//! Every function here is pure: mentions are resolved through a
//! [`MemberDirectory`] built beforehand.

use crate::MemberDirectory;
use chrono::{DateTime, TimeZone};
use rookies_config::Round;
use rookies_core::Penalties;
use rookies_error::DiscordError;
use serenity::model::id::RoleId;
use serenity::model::mention::Mentionable;

/// Per-category penalty lists with mentions, followed by the explanation link.
///
/// Carried over drivers come first in each category; an empty category
/// reads `- None!`.
///
/// # Errors
///
/// Fails if a penalised driver cannot be found in the guild.
pub fn penalty_sections(
    penalties: &Penalties,
    directory: &MemberDirectory,
    explanation_link: &str,
) -> Result<String, DiscordError> {
    let mut message = String::new();
    for (category, entry) in penalties.iter() {
        message.push_str(&format!("\n**{}**\n", category));
        if entry.is_empty() {
            message.push_str("- None!\n");
            continue;
        }
        for (driver, carried_over) in entry.entries() {
            let user = directory.resolve(driver.discord_handle())?;
            let suffix = if carried_over { " (carried over)" } else { "" };
            message.push_str(&format!("- {}{}\n", user.mention(), suffix));
        }
    }
    message.push_str(&format!(
        "\n[Explanations of penalties can be found here.]({})\n",
        explanation_link
    ));
    Ok(message)
}

/// Stewarding announcement for penalties handed out at `previous`.
pub fn penalty_announcement(previous: &Round, next: &Round, sections: &str) -> String {
    format!(
        "\n🚓 **Penalties from Round {prev}** 🚓 \n\nStewarding is in from Round {prev}. The following penalties are to be served next week at {track}:\n{sections}",
        prev = previous.number,
        track = next.track,
        sections = sections,
    )
}

/// Race day announcement pinging `role` with the briefing time and doc.
pub fn briefing_announcement<Tz: TimeZone>(
    role: RoleId,
    briefing_start: &DateTime<Tz>,
    briefing_url: &str,
    round: &Round,
    sections: &str,
) -> String {
    format!(
        "\n🏎 **It's Race Day!!** 🏎\n\n{role} **Mandatory** drivers' briefing is at <t:{start}>. Here's the [briefing doc]({url}) for Round {round}.\n\n**Penalties to be Served This Week**\n{sections}",
        role = role.mention(),
        start = briefing_start.timestamp(),
        url = briefing_url,
        round = round.number,
        sections = sections,
    )
}

/// Name of the scheduled briefing event for `round`.
pub fn briefing_event_name(league_name: &str, round: &Round) -> String {
    format!("{} Briefing Round {} - {}", league_name, round.number, round.track)
}
