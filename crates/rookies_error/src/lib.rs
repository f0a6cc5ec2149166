//! Error types for the rookies league bot.
//!
//! This crate provides the error types shared by every rookies crate.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum names the specific failure
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` to capture the location automatically
//!
//! # Examples
//!
//! ```
//! use rookies_error::{RookiesResult, ConfigError};
//!
//! fn load_round() -> RookiesResult<String> {
//!     Err(ConfigError::new("round file missing"))?
//! }
//!
//! match load_round() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod discord;
mod docs;
mod error;
mod penalty;
mod simgrid;
mod yaml;

pub use config::ConfigError;
pub use discord::{DiscordError, DiscordErrorKind};
pub use docs::{DocsError, DocsErrorKind};
pub use error::{RookiesError, RookiesErrorKind, RookiesResult};
pub use penalty::{PenaltyError, PenaltyErrorKind};
pub use simgrid::{SimGridError, SimGridErrorKind};
pub use yaml::YamlError;
