//! rookies-bot: weekly automation for a SimGrid sim racing league.
//!
//! Two commands cover a race week:
//! - `announce-penalties` posts the stewards' decisions from the last round
//!   to Discord, mentioning every penalised driver
//! - `race-setup` creates the drivers' briefing doc, announces race day,
//!   schedules the briefing event and writes next week's round file with
//!   every outstanding penalty carried over
//!
//! Each run is a single linear pass over the SimGrid, Discord and Google
//! APIs; nothing is persisted besides the round file.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cli;
mod commands;
mod observability;

pub use cli::{Cli, Commands};
pub use commands::{Session, next_round_config, run};
pub use observability::{ObservabilityConfig, init_observability};
