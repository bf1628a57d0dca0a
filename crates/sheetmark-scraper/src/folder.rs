//! Spreadsheet id discovery from a Drive folder listing page.
//!
//! The listing is a JavaScript-heavy HTML page; the only stable signal in it
//! is the `spreadsheets/d/<id>` path that every embedded sheet link carries.
//! The same path shape also shows up around API keys and UI placeholders, so
//! candidates are filtered against a block-list.

use std::collections::HashSet;

use regex::Regex;

/// Shortest token accepted as a spreadsheet id.
pub const MIN_SHEET_ID_LEN: usize = 20;

/// Substrings that mark a `spreadsheets/d/...` match as something other than
/// a document (API keys, placeholder tokens in the listing's bootstrap JSON).
pub const BLOCKED_ID_FRAGMENTS: [&str; 3] = ["AIzaSy", "ANONYMOUS", "SELECTION"];

/// Extracts unique spreadsheet ids from folder listing HTML, in first-seen order.
#[must_use]
pub fn extract_sheet_ids(html: &str) -> Vec<String> {
    let re = Regex::new(r"spreadsheets/d/([a-zA-Z0-9_-]{20,})").expect("valid regex");

    let mut seen = HashSet::new();
    re.captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|id| is_document_id(id))
        .filter(|id| seen.insert(*id))
        .map(str::to_owned)
        .collect()
}

fn is_document_id(id: &str) -> bool {
    id.len() >= MIN_SHEET_ID_LEN
        && !BLOCKED_ID_FRAGMENTS
            .iter()
            .any(|fragment| id.contains(fragment))
}
