//! HTTP client for Google Drive v3 and Docs v1.

use crate::models::{BatchUpdateRequest, BatchUpdateResponse, DocRequest, Document, DriveFile};
use crate::requests::briefing_requests;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder};
use rookies_config::{BotConfig, Round};
use rookies_core::Penalties;
use rookies_error::{DocsError, DocsErrorKind};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, error, info, instrument};

/// Base URL of the Drive v3 API.
pub const DRIVE_API_URL: &str = "https://www.googleapis.com/drive/v3";

/// Base URL of the Docs v1 API.
pub const DOCS_API_URL: &str = "https://docs.googleapis.com/v1";

/// Google Drive and Docs client authenticating with a bearer access token.
#[derive(Debug, Clone)]
pub struct GoogleClient {
    client: Client,
    access_token: String,
    drive_url: String,
    docs_url: String,
}

impl GoogleClient {
    /// Creates a client sending `access_token` with every request.
    pub fn new(access_token: impl Into<String>) -> Self {
        debug!("Creating new Google client");
        Self {
            client: Client::new(),
            access_token: access_token.into(),
            drive_url: DRIVE_API_URL.to_string(),
            docs_url: DOCS_API_URL.to_string(),
        }
    }

    /// Point the client at different Drive and Docs API roots.
    pub fn with_base_urls(mut self, drive_url: impl Into<String>, docs_url: impl Into<String>) -> Self {
        self.drive_url = drive_url.into().trim_end_matches('/').to_string();
        self.docs_url = docs_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Copy `template_id` into `folder_id` as `title`.
    #[instrument(skip(self))]
    pub async fn copy_file(
        &self,
        template_id: &str,
        folder_id: &str,
        title: &str,
    ) -> Result<DriveFile, DocsError> {
        let url = format!("{}/files/{}/copy", self.drive_url, template_id);
        let body = json!({ "name": title, "parents": [folder_id] });
        let file: DriveFile = self.send(self.client.post(&url).json(&body), &url).await?;
        info!(file_id = %file.id(), "Copied template");
        Ok(file)
    }

    /// Fetch a document's structure.
    #[instrument(skip(self))]
    pub async fn document(&self, document_id: &str) -> Result<Document, DocsError> {
        let url = format!("{}/documents/{}", self.docs_url, document_id);
        let doc: Document = self.send(self.client.get(&url), &url).await?;
        debug!(elements = doc.body().content().len(), "Fetched document");
        Ok(doc)
    }

    /// Apply `requests` to a document in one batch.
    #[instrument(skip(self, requests), fields(requests = requests.len()))]
    pub async fn batch_update(
        &self,
        document_id: &str,
        requests: &[DocRequest],
    ) -> Result<BatchUpdateResponse, DocsError> {
        let url = format!("{}/documents/{}:batchUpdate", self.docs_url, document_id);
        let body = BatchUpdateRequest { requests };
        let response: BatchUpdateResponse =
            self.send(self.client.post(&url).json(&body), &url).await?;
        debug!(replies = response.replies().len(), "Applied batch update");
        Ok(response)
    }

    /// Create this round's briefing from the template and return its URL.
    #[instrument(skip_all, fields(round = round.number, track = %round.track))]
    pub async fn generate_briefing(
        &self,
        config: &BotConfig,
        round: &Round,
        penalties: &Penalties,
    ) -> Result<String, DocsError> {
        let title = format!("Drivers Briefing Round {} at {}", round.number, round.track);
        let file = self
            .copy_file(
                &config.briefing_template_doc_id,
                &config.briefing_folder_id,
                &title,
            )
            .await?;

        let doc = self.document(file.id()).await?;
        let requests = briefing_requests(
            &doc,
            round,
            penalties,
            &config.season,
            &config.briefing.display,
        )?;
        self.batch_update(file.id(), &requests).await?;

        let url = format!("https://docs.google.com/document/d/{}", file.id());
        info!(url = %url, "Briefing generated");
        Ok(url)
    }

    /// Create this round's penalty tracker sheet and return its URL.
    #[instrument(skip_all, fields(round = round.number, track = %round.track))]
    pub async fn generate_penalty_tracker(
        &self,
        config: &BotConfig,
        round: &Round,
    ) -> Result<String, DocsError> {
        let title = format!(
            "{} {} Round {} - {}",
            config.season, config.league_name, round.number, round.track
        );
        let file = self
            .copy_file(
                &config.tracker_template_doc_id,
                &config.tracker_folder_id,
                &title,
            )
            .await?;

        let url = format!("https://docs.google.com/spreadsheets/d/{}", file.id());
        info!(url = %url, "Penalty tracker generated");
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<T, DocsError> {
        debug!(url = %endpoint, "Sending request to Google API");

        let response = request
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, endpoint, "Failed to send request to Google API");
                DocsError::new(DocsErrorKind::Request {
                    endpoint: endpoint.to_string(),
                    message: e.to_string(),
                })
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(error = ?e, endpoint, "Failed to read Google API response");
            DocsError::new(DocsErrorKind::Request {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })
        })?;

        if status.is_client_error() || status.is_server_error() {
            error!(status = %status, endpoint, body = %body, "Google API returned error");
            return Err(DocsError::new(DocsErrorKind::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            }));
        }

        serde_json::from_str(&body).map_err(|e| {
            error!(error = ?e, endpoint, "Failed to parse Google API response");
            DocsError::new(DocsErrorKind::Parse {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })
        })
    }
}
