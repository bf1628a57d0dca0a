//! Per-sheet export fetch for `SheetsClient`.

use crate::error::ScraperError;
use crate::gviz::{parse_export, TabularExport};

use super::SheetsClient;

impl SheetsClient {
    /// Fetches and parses the `gviz` JSON export of one spreadsheet.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] if `sheet_id` cannot form an export URL.
    /// - [`ScraperError::Http`] on network failure or timeout.
    /// - [`ScraperError::UnexpectedStatus`] on a non-2xx response (private or
    ///   deleted sheets answer with a redirect to a login page or a 4xx).
    /// - Any error from [`parse_export`].
    pub async fn fetch_export(&self, sheet_id: &str) -> Result<TabularExport, ScraperError> {
        let url = self.export_url(sheet_id)?;
        tracing::debug!(sheet_id, url = %url, "fetching sheet export");
        let body = self.get_text(&url).await?;
        parse_export(sheet_id, &body)
    }
}
