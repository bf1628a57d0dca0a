//! Cross-sheet brand search.
//!
//! A search discovers the sheet ids once, then runs every sheet through
//! fetch → parse → match independently. A sheet that fails at any step
//! contributes nothing; it never fails the search. Results are concatenated
//! in discovery order.

use futures::future::join_all;
use futures::stream::{self, StreamExt};
use sheetmark_core::{AppConfig, BrandRecord, ScanPolicy};

use crate::client::SheetsClient;
use crate::error::ScraperError;
use crate::matcher::search_export;

pub struct SheetSearch {
    client: SheetsClient,
    policy: ScanPolicy,
    /// Bound on in-flight sheet fetches for [`ScanPolicy::Exhaustive`]; `0`
    /// means every sheet at once.
    max_concurrent_sheets: usize,
}

impl SheetSearch {
    #[must_use]
    pub fn new(client: SheetsClient, policy: ScanPolicy, max_concurrent_sheets: usize) -> Self {
        Self {
            client,
            policy,
            max_concurrent_sheets,
        }
    }

    /// Builds the client and scan settings from application config.
    ///
    /// # Errors
    ///
    /// Propagates [`SheetsClient::from_config`] failures.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Ok(Self::new(
            SheetsClient::from_config(config)?,
            config.scan_policy,
            config.max_concurrent_sheets,
        ))
    }

    /// Discovers sheets from the folder listing and searches all of them.
    pub async fn search(&self, query: &str) -> Vec<BrandRecord> {
        let sheet_ids = self.client.discover_sheet_ids().await;
        self.search_sheets(&sheet_ids, query).await
    }

    /// Searches the given sheets according to the configured [`ScanPolicy`].
    pub async fn search_sheets(&self, sheet_ids: &[String], query: &str) -> Vec<BrandRecord> {
        let records = match self.policy {
            ScanPolicy::Exhaustive => self.scan_exhaustive(sheet_ids, query).await,
            ScanPolicy::FirstMatchingBatch { batch_size } => {
                self.scan_batches(sheet_ids, query, batch_size).await
            }
        };

        tracing::info!(
            policy = %self.policy,
            sheets = sheet_ids.len(),
            total = records.len(),
            "search complete"
        );
        records
    }

    /// Fetches one sheet and returns its matching records.
    ///
    /// # Errors
    ///
    /// Propagates any fetch, parse or header-resolution error for the sheet.
    pub async fn search_sheet(
        &self,
        sheet_id: &str,
        query: &str,
    ) -> Result<Vec<BrandRecord>, ScraperError> {
        let export = self.client.fetch_export(sheet_id).await?;
        search_export(sheet_id, &export, query)
    }

    async fn scan_exhaustive(&self, sheet_ids: &[String], query: &str) -> Vec<BrandRecord> {
        let in_flight = if self.max_concurrent_sheets == 0 {
            sheet_ids.len().max(1)
        } else {
            self.max_concurrent_sheets
        };

        // `buffered` yields in input order, so records stay in discovery order.
        stream::iter(sheet_ids.to_vec())
            .map(move |id| async move { self.search_sheet_or_skip(&id, query).await })
            .buffered(in_flight)
            .concat()
            .await
    }

    async fn scan_batches(
        &self,
        sheet_ids: &[String],
        query: &str,
        batch_size: usize,
    ) -> Vec<BrandRecord> {
        let batch_size = batch_size.max(1);
        let mut records = Vec::new();

        for (batch_index, batch) in sheet_ids.chunks(batch_size).enumerate() {
            let per_sheet = join_all(
                batch
                    .iter()
                    .map(|id| self.search_sheet_or_skip(id, query)),
            )
            .await;

            let before = records.len();
            records.extend(per_sheet.into_iter().flatten());

            if records.len() > before {
                tracing::info!(
                    batch_index,
                    batch_size,
                    skipped_sheets = sheet_ids.len().saturating_sub((batch_index + 1) * batch_size),
                    "batch produced matches; stopping scan early"
                );
                break;
            }
        }

        records
    }

    async fn search_sheet_or_skip(&self, sheet_id: &str, query: &str) -> Vec<BrandRecord> {
        match self.search_sheet(sheet_id, query).await {
            Ok(records) => records,
            Err(e @ ScraperError::MissingBrandColumn { .. }) => {
                tracing::info!(sheet_id, reason = %e, "skipping sheet");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(sheet_id, error = %e, "sheet search failed; skipping sheet");
                Vec::new()
            }
        }
    }
}
