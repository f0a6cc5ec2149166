//! Roster and calendar transformations over SimGrid responses.

use crate::{Championship, Entry, ParticipatingUser};
use rookies_config::Round;
use rookies_core::{Driver, DriverLookup};
use rookies_error::{SimGridError, SimGridErrorKind};
use std::collections::HashMap;
use tracing::{debug, error, warn};

/// Join participating users to entry-list drivers by full name.
///
/// Blank entry drivers are skipped. Users who are not on any entry are left
/// out of the lookup.
///
/// # Errors
///
/// [`SimGridErrorKind::UnknownDriver`] if an entry-list driver has no
/// participating user with the same name.
pub fn driver_lookup_from(
    users: &[ParticipatingUser],
    entries: &[Entry],
) -> Result<DriverLookup, SimGridError> {
    let users_by_name: HashMap<String, &ParticipatingUser> =
        users.iter().map(|user| (user.name_key(), user)).collect();

    let mut drivers = Vec::new();
    for entry in entries {
        for entry_driver in entry.drivers() {
            if entry_driver.is_blank() {
                continue;
            }
            let name = entry_driver.name_key();
            let Some(user) = users_by_name.get(&name) else {
                error!(name = %name, car_number = entry.race_number(), "Entry driver is not a participating user");
                return Err(SimGridError::new(SimGridErrorKind::UnknownDriver(name)));
            };
            drivers.push(Driver::new(
                user.first_name().clone(),
                user.last_name().clone(),
                user.username().clone(),
                *entry.race_number(),
            ));
        }
    }

    let lookup = DriverLookup::new(drivers.iter().cloned());
    if lookup.len() < drivers.len() {
        warn!(
            drivers = drivers.len(),
            cars = lookup.len(),
            "Several drivers share a car; only the last one listed is kept"
        );
    }
    debug!(drivers = lookup.len(), "Built driver lookup");
    Ok(lookup)
}

/// The round after `current`, with its track taken from the calendar.
///
/// The track is left empty once the calendar has no race for that round.
/// The round number stops at `u32::MAX`.
pub fn next_round_from(championship: &Championship, current: &Round) -> Round {
    let number = current.number.saturating_add(1);
    let track = championship
        .races()
        .get(number as usize - 1)
        .map(|race| race.track().clone())
        .unwrap_or_default();

    Round {
        number,
        track,
        penalty_tracker_link: String::new(),
    }
}
