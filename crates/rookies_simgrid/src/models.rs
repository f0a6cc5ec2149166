//! JSON models for SimGrid API responses.
//!
//! Only the fields the bot reads are modelled; everything else in the
//! responses is ignored.

use serde::{Deserialize, Serialize};

/// Response of `GET /championships/{id}/entrylist?format=json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct EntryList {
    /// One entry per car
    #[serde(default)]
    entries: Vec<Entry>,
}

/// A car entered in the championship.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters, derive_builder::Builder,
)]
pub struct Entry {
    /// Drivers sharing the car
    #[serde(default)]
    #[builder(default)]
    drivers: Vec<EntryDriver>,
    /// Car number
    #[serde(rename = "raceNumber", default)]
    race_number: u32,
}

/// A driver on an entry.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct EntryDriver {
    /// Given name
    #[serde(rename = "firstName", default)]
    first_name: String,
    /// Family name
    #[serde(rename = "lastName", default)]
    last_name: String,
}

impl EntryDriver {
    /// Name key used to join entry drivers to participating users.
    pub fn name_key(&self) -> String {
        format!("{}{}", self.first_name, self.last_name)
    }

    /// True for placeholder drivers with neither name set.
    pub fn is_blank(&self) -> bool {
        self.first_name.is_empty() && self.last_name.is_empty()
    }
}

/// An element of `GET /championships/{id}/participating_users`.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ParticipatingUser {
    /// Given name
    #[serde(default)]
    first_name: String,
    /// Family name
    #[serde(default)]
    last_name: String,
    /// Discord username linked to the SimGrid account
    #[serde(default)]
    username: String,
}

impl ParticipatingUser {
    /// Name key used to join participating users to entry drivers.
    pub fn name_key(&self) -> String {
        format!("{}{}", self.first_name, self.last_name)
    }
}

/// Response of `GET /championships/{id}`.
#[derive(
    Debug, Clone, Default, Serialize, Deserialize, PartialEq, derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct Championship {
    /// Races in calendar order
    #[serde(default)]
    races: Vec<Race>,
}

/// A scheduled race.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Race {
    /// Track name
    #[serde(default)]
    track: String,
}
