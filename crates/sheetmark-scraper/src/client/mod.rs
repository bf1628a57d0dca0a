//! HTTP client for the Drive folder listing and the per-sheet `gviz` export.

mod export;
mod scan;

use std::time::Duration;

use reqwest::{Client, Url};
use sheetmark_core::AppConfig;

use crate::error::ScraperError;

/// Thin `reqwest` wrapper holding the two external endpoints.
///
/// Both endpoints are injected so tests can point the client at a local
/// `wiremock` server. No retries are attempted: a failed request surfaces as a
/// [`ScraperError`] and the caller decides how to degrade.
pub struct SheetsClient {
    client: Client,
    folder_url: Url,
    sheets_base_url: Url,
}

impl SheetsClient {
    /// Creates a client with a per-request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] if either endpoint is not a valid URL.
    /// - [`ScraperError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(
        folder_url: &str,
        sheets_base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        let folder_url = parse_url(folder_url)?;

        // Normalise to exactly one trailing slash so `join` appends below the
        // base path instead of replacing its last segment.
        let normalised = format!("{}/", sheets_base_url.trim_end_matches('/'));
        let sheets_base_url = parse_url(&normalised)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            folder_url,
            sheets_base_url,
        })
    }

    /// Builds a client from the application's endpoint and HTTP settings.
    ///
    /// # Errors
    ///
    /// See [`SheetsClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::new(
            &config.folder_url,
            &config.sheets_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    #[must_use]
    pub fn folder_url(&self) -> &str {
        self.folder_url.as_str()
    }

    /// Builds `<base>/spreadsheets/d/<id>/gviz/tq?tqx=out:json` for `sheet_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] if `sheet_id` is empty or contains
    /// characters outside `[A-Za-z0-9_-]`.
    pub fn export_url(&self, sheet_id: &str) -> Result<String, ScraperError> {
        let valid = !sheet_id.is_empty()
            && sheet_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ScraperError::InvalidUrl {
                url: sheet_id.to_owned(),
                reason: "sheet id must be non-empty and contain only [A-Za-z0-9_-]".to_owned(),
            });
        }

        let mut url = self
            .sheets_base_url
            .join(&format!("spreadsheets/d/{sheet_id}/gviz/tq"))
            .map_err(|e| ScraperError::InvalidUrl {
                url: self.sheets_base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.set_query(Some("tqx=out:json"));
        Ok(url.to_string())
    }

    /// GETs `url` and returns the body text of a 2xx response.
    async fn get_text(&self, url: &str) -> Result<String, ScraperError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        Ok(response.text().await?)
    }
}

fn parse_url(raw: &str) -> Result<Url, ScraperError> {
    Url::parse(raw).map_err(|e| ScraperError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
