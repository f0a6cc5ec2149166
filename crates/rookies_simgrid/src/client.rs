//! HTTP client for the SimGrid REST API.

use crate::{Championship, Entry, EntryList, ParticipatingUser, driver_lookup_from, next_round_from};
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use rookies_config::Round;
use rookies_core::DriverLookup;
use rookies_error::{SimGridError, SimGridErrorKind};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

/// Base URL of the SimGrid v1 API.
pub const SIMGRID_API_URL: &str = "https://www.thesimgrid.com/api/v1";

/// SimGrid API client.
#[derive(Debug, Clone)]
pub struct SimGridClient {
    client: Client,
    token: String,
    base_url: String,
}

impl SimGridClient {
    /// Creates a client authenticating with `token`.
    pub fn new(token: impl Into<String>) -> Self {
        debug!("Creating new SimGrid client");
        Self {
            client: Client::new(),
            token: token.into(),
            base_url: SIMGRID_API_URL.to_string(),
        }
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Cars entered in the championship.
    #[instrument(skip(self))]
    pub async fn entries(&self, championship_id: &str) -> Result<Vec<Entry>, SimGridError> {
        let list: EntryList = self
            .get(&format!("/championships/{}/entrylist?format=json", championship_id))
            .await?;
        debug!(entries = list.entries().len(), "Fetched entry list");
        Ok(list.entries().clone())
    }

    /// Users taking part in the championship.
    #[instrument(skip(self))]
    pub async fn participating_users(
        &self,
        championship_id: &str,
    ) -> Result<Vec<ParticipatingUser>, SimGridError> {
        let users: Vec<ParticipatingUser> = self
            .get(&format!("/championships/{}/participating_users", championship_id))
            .await?;
        debug!(users = users.len(), "Fetched participating users");
        Ok(users)
    }

    /// Championship details, including the race calendar.
    #[instrument(skip(self))]
    pub async fn championship(&self, championship_id: &str) -> Result<Championship, SimGridError> {
        self.get(&format!("/championships/{}", championship_id)).await
    }

    /// Car number to driver lookup for the championship.
    #[instrument(skip(self))]
    pub async fn build_driver_lookup(
        &self,
        championship_id: &str,
    ) -> Result<DriverLookup, SimGridError> {
        let users = self.participating_users(championship_id).await?;
        let entries = self.entries(championship_id).await?;
        let lookup = driver_lookup_from(&users, &entries)?;
        info!(drivers = lookup.len(), "Driver lookup ready");
        Ok(lookup)
    }

    /// The round after `current`, with its track from the calendar.
    #[instrument(skip(self, current), fields(current = current.number))]
    pub async fn next_round(
        &self,
        championship_id: &str,
        current: &Round,
    ) -> Result<Round, SimGridError> {
        let championship = self.championship(championship_id).await?;
        let next = next_round_from(&championship, current);
        info!(number = next.number, track = %next.track, "Next round");
        Ok(next)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, SimGridError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(url = %url, "Sending request to SimGrid API");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, endpoint, "Failed to send request to SimGrid API");
                SimGridError::new(SimGridErrorKind::Request {
                    endpoint: endpoint.to_string(),
                    message: e.to_string(),
                })
            })?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            error!(status = %status, endpoint, "SimGrid API returned error");
            return Err(SimGridError::new(SimGridErrorKind::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            }));
        }

        let body = response.text().await.map_err(|e| {
            error!(error = ?e, endpoint, "Failed to read SimGrid response");
            SimGridError::new(SimGridErrorKind::Request {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })
        })?;

        serde_json::from_str(&body).map_err(|e| {
            error!(error = ?e, endpoint, "Failed to parse SimGrid response");
            SimGridError::new(SimGridErrorKind::Parse {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })
        })
    }
}
