//! Handlers for the `search` and `sheets` commands.

use sheetmark_core::{AppConfig, BrandRecord, ScanPolicy};
use sheetmark_scraper::{SheetSearch, SheetsClient};

/// Resolves the effective scan policy from the configured one and CLI overrides.
///
/// `--batch-size` alone re-sizes a configured `first-match` policy and is
/// ignored under `exhaustive`.
pub(crate) fn resolve_policy(
    configured: ScanPolicy,
    policy: Option<&str>,
    batch_size: Option<usize>,
) -> anyhow::Result<ScanPolicy> {
    let configured_batch = match configured {
        ScanPolicy::FirstMatchingBatch { batch_size } => batch_size,
        ScanPolicy::Exhaustive => sheetmark_core::DEFAULT_BATCH_SIZE,
    };
    let batch_size = batch_size.unwrap_or(configured_batch);

    let name = match (policy, configured) {
        (Some(name), _) => name,
        (None, ScanPolicy::Exhaustive) => return Ok(ScanPolicy::Exhaustive),
        (None, ScanPolicy::FirstMatchingBatch { .. }) => "first-match",
    };
    ScanPolicy::parse(name, batch_size).map_err(anyhow::Error::msg)
}

pub(crate) async fn search_records(
    config: &AppConfig,
    query: &str,
    policy: ScanPolicy,
) -> anyhow::Result<Vec<BrandRecord>> {
    let client = SheetsClient::from_config(config)?;
    let search = SheetSearch::new(client, policy, config.max_concurrent_sheets);
    Ok(search.search(query).await)
}

pub(crate) async fn run_search(
    config: &AppConfig,
    query: &str,
    policy: Option<&str>,
    batch_size: Option<usize>,
) -> anyhow::Result<()> {
    let policy = resolve_policy(config.scan_policy, policy, batch_size)?;
    tracing::info!(query, %policy, "running search");

    let records = search_records(config, query, policy).await?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

pub(crate) async fn run_sheets(config: &AppConfig) -> anyhow::Result<()> {
    let client = SheetsClient::from_config(config)?;
    let ids = client.discover_sheet_ids().await;
    if ids.is_empty() {
        tracing::warn!(folder_url = %client.folder_url(), "no sheets discovered");
    }
    for id in ids {
        println!("{id}");
    }
    Ok(())
}
