//! Google Drive and Docs integration for the rookies league bot.
//!
//! Each race week the bot copies two templates:
//! - the drivers' briefing doc, which gets the round's placeholders filled in
//!   and a bulleted penalty section spliced in ahead of the stream heading
//! - the penalty tracker sheet for the stewards, copied as is
//!
//! Request building lives in [`requests`] and is pure; [`GoogleClient`] only
//! moves JSON.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
pub mod models;
pub mod requests;

pub use client::{DOCS_API_URL, DRIVE_API_URL, GoogleClient};
pub use models::{DocRequest, Document, DriveFile};
