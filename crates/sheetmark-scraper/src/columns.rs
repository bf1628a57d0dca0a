//! Header-to-field resolution for trademark sheets.
//!
//! Sheets in the folder are maintained by hand and their headers drift
//! (`BrandName`, `Brand Name`, `brandname (es)`), so fields are located by
//! substring rather than exact label. Only `BrandName` is matched
//! case-insensitively; the remaining fields must contain their name verbatim.

use sheetmark_core::BrandField;

/// Position of each [`BrandField`] in a header row, if present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnIndexMap {
    positions: [Option<usize>; BrandField::COUNT],
}

impl ColumnIndexMap {
    /// Resolves every field against `header`; the first matching column wins.
    #[must_use]
    pub fn resolve<S: AsRef<str>>(header: &[S]) -> Self {
        let mut positions = [None; BrandField::COUNT];
        for field in BrandField::ALL {
            positions[field as usize] = header
                .iter()
                .position(|label| header_matches(field, label.as_ref()));
        }
        Self { positions }
    }

    #[must_use]
    pub fn get(&self, field: BrandField) -> Option<usize> {
        self.positions[field as usize]
    }
}

fn header_matches(field: BrandField, label: &str) -> bool {
    match field {
        BrandField::BrandName => {
            let lower = label.to_lowercase();
            lower.contains("brandname") || lower.contains("brand name")
        }
        other => label.contains(other.as_str()),
    }
}
