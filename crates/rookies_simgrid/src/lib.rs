//! SimGrid league API client.
//!
//! Fetches the three championship documents the bot needs:
//! - the entry list (car numbers and the drivers sharing each car)
//! - the participating users (names and linked Discord usernames)
//! - the championship itself (race calendar)
//!
//! and joins the first two into a [`rookies_core::DriverLookup`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod lookup;
mod models;

pub use client::{SIMGRID_API_URL, SimGridClient};
pub use lookup::{driver_lookup_from, next_round_from};
pub use models::{
    Championship, ChampionshipBuilder, Entry, EntryBuilder, EntryDriver, EntryDriverBuilder,
    EntryList, ParticipatingUser, ParticipatingUserBuilder, Race, RaceBuilder,
};
