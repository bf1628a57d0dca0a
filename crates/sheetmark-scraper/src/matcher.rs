//! Row filtering and record mapping for a single sheet.

use sheetmark_core::{BrandField, BrandRecord};

use crate::columns::ColumnIndexMap;
use crate::error::ScraperError;
use crate::gviz::TabularExport;

/// Returns `true` when `brand_name` is non-empty and, trimmed and lower-cased,
/// contains the trimmed, lower-cased `query`.
///
/// An empty query matches every non-empty brand name.
#[must_use]
pub fn matches_query(brand_name: &str, query: &str) -> bool {
    !brand_name.is_empty()
        && brand_name
            .trim()
            .to_lowercase()
            .contains(&query.trim().to_lowercase())
}

/// Filters `export` rows by `query` against the brand name column and maps
/// each match to a [`BrandRecord`] tagged with `sheet_id`.
///
/// Row order is preserved. Fields whose column is missing, or rows too short
/// to reach it, yield empty values instead of dropping the row; for `IMAGE`
/// that value is `None`, while a blank image cell stays `Some("")`.
///
/// # Errors
///
/// Returns [`ScraperError::MissingBrandColumn`] if no header resolves to the
/// brand name field.
pub fn search_export(
    sheet_id: &str,
    export: &TabularExport,
    query: &str,
) -> Result<Vec<BrandRecord>, ScraperError> {
    tracing::debug!(sheet_id, header = ?export.header, "resolving sheet header");

    let columns = ColumnIndexMap::resolve(&export.header);
    let Some(brand_col) = columns.get(BrandField::BrandName) else {
        return Err(ScraperError::MissingBrandColumn {
            sheet_id: sheet_id.to_owned(),
        });
    };

    let records: Vec<BrandRecord> = export
        .rows
        .iter()
        .filter(|row| {
            row.get(brand_col)
                .is_some_and(|brand| matches_query(brand, query))
        })
        .map(|row| to_record(sheet_id, &columns, row))
        .collect();

    tracing::debug!(
        sheet_id,
        matches = records.len(),
        first_match = ?records.first(),
        "filtered sheet rows"
    );

    Ok(records)
}

fn to_record(sheet_id: &str, columns: &ColumnIndexMap, row: &[String]) -> BrandRecord {
    let cell = |field: BrandField| -> Option<&String> { columns.get(field).and_then(|i| row.get(i)) };
    let text = |field: BrandField| cell(field).cloned().unwrap_or_default();

    BrandRecord {
        sheet_id: sheet_id.to_owned(),
        brand_name: text(BrandField::BrandName),
        image: cell(BrandField::Image).cloned(),
        registration_date: text(BrandField::RegistrationDate),
        expiration_date: text(BrandField::ExpirationDate),
        last_updated_date: text(BrandField::LastUpdatedDate),
        applicants: text(BrandField::Applicants),
        representatives: text(BrandField::Representatives),
    }
}
