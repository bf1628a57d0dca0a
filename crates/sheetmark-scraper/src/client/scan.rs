//! Folder listing fetch for `SheetsClient`.

use crate::folder::extract_sheet_ids;

use super::SheetsClient;

impl SheetsClient {
    /// Fetches the folder listing and returns the spreadsheet ids it links to.
    ///
    /// Never fails: a transport error or non-2xx status is logged and yields an
    /// empty list, which makes the whole search return no records.
    pub async fn discover_sheet_ids(&self) -> Vec<String> {
        let folder_url = self.folder_url.as_str();
        match self.get_text(folder_url).await {
            Ok(html) => {
                let ids = extract_sheet_ids(&html);
                tracing::info!(folder_url, count = ids.len(), sheet_ids = ?ids, "discovered sheets");
                ids
            }
            Err(e) => {
                tracing::error!(folder_url, error = %e, "failed to fetch folder listing");
                Vec::new()
            }
        }
    }
}
