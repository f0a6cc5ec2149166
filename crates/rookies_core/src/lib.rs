//! Core data model for the rookies league bot.
//!
//! This crate holds the types every other rookies crate passes around:
//! - `Driver` / `DriverLookup` - the championship roster keyed by car number
//! - `PenaltyCategory` - the four penalty lists a round can carry
//! - `Penalties` - resolved drivers per category, new and carried over
//!
//! Consolidation of carried over penalties lives here too, since it is the
//! one rule shared by the announcement, the briefing doc and next week's
//! round file.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod driver;
mod penalty;

pub use driver::{Driver, DriverLookup};
pub use penalty::{CategoryPenalties, Penalties, PenaltyCategory, unique_car_numbers};
