//! Parser for the Google Visualization (`gviz/tq?tqx=out:json`) export.
//!
//! The export is not plain JSON: the payload is wrapped in a JavaScript call,
//! e.g.
//!
//! ```text
//! /*O_o*/
//! google.visualization.Query.setResponse({"version":"0.6","table":{...}});
//! ```
//!
//! [`parse_export`] strips the wrapper, deserializes the table, and flattens it
//! into a [`TabularExport`] of plain strings.

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ScraperError;

/// Header labels plus data rows, every cell rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabularExport {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct GvizResponse {
    #[serde(default)]
    table: Option<GvizTable>,
}

#[derive(Debug, Deserialize)]
struct GvizTable {
    #[serde(default)]
    cols: Vec<GvizColumn>,
    #[serde(default)]
    rows: Option<Vec<GvizRow>>,
}

#[derive(Debug, Deserialize)]
struct GvizColumn {
    #[serde(default)]
    label: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GvizRow {
    #[serde(default)]
    c: Vec<Option<GvizCell>>,
}

#[derive(Debug, Deserialize)]
struct GvizCell {
    #[serde(default)]
    v: Option<Value>,
}

/// Returns the JSON text between `setResponse(` and the last `);` on that line.
///
/// Returns `None` when the wrapper is absent or wraps nothing.
#[must_use]
pub fn extract_envelope(text: &str) -> Option<&str> {
    let re = Regex::new(r"google\.visualization\.Query\.setResponse\((.*)\);")
        .expect("valid regex");
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|payload| !payload.is_empty())
}

/// Parses a raw export response body for `sheet_id` into a [`TabularExport`].
///
/// # Errors
///
/// - [`ScraperError::MissingEnvelope`] if the `setResponse(...)` wrapper is absent.
/// - [`ScraperError::Deserialize`] if the wrapped payload is not valid JSON of
///   the expected shape.
/// - [`ScraperError::MissingTable`] if the payload carries no `table.rows`
///   (the service reports query errors this way).
pub fn parse_export(sheet_id: &str, text: &str) -> Result<TabularExport, ScraperError> {
    let payload = extract_envelope(text).ok_or_else(|| ScraperError::MissingEnvelope {
        sheet_id: sheet_id.to_owned(),
    })?;

    let response: GvizResponse =
        serde_json::from_str(payload).map_err(|e| ScraperError::Deserialize {
            context: format!("gviz export of sheet {sheet_id}"),
            source: e,
        })?;

    let missing_table = || ScraperError::MissingTable {
        sheet_id: sheet_id.to_owned(),
    };
    let table = response.table.ok_or_else(missing_table)?;
    let rows = table.rows.ok_or_else(missing_table)?;

    let header = table
        .cols
        .into_iter()
        .map(|col| col.label.unwrap_or_default())
        .collect();

    let rows = rows
        .into_iter()
        .map(|row| {
            row.c
                .iter()
                .map(|cell| {
                    cell.as_ref()
                        .and_then(|c| c.v.as_ref())
                        .map(cell_text)
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();

    Ok(TabularExport { header, rows })
}

/// Renders a cell value the way the sheet displays raw values: integral
/// numbers without a fractional part, very large or small numbers in
/// exponent form, booleans as `true`/`false`.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map_or_else(|| n.to_string(), number_text)
            }
        }
        Value::Array(items) => items.iter().map(cell_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Formats a float with the shortest round-trip digits, using the same
/// plain/exponent cut-offs as the sheet's own JSON serializer: plain notation
/// for decimal exponents in `-7 < e < 21`, `d.ddde±x` outside that range.
fn number_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. "1.2345e3".
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let sign = if value < 0.0 { "-" } else { "" };
    let len = i32::try_from(digits.len()).unwrap_or(i32::MAX);
    // Position of the decimal point relative to the start of `digits`.
    let point = exponent + 1;

    let body = if len <= point && point <= 21 {
        let zeros = usize::try_from(point - len).unwrap_or(0);
        format!("{digits}{}", "0".repeat(zeros))
    } else if 0 < point && point <= 21 {
        let split = usize::try_from(point).unwrap_or(0);
        format!("{}.{}", &digits[..split], &digits[split..])
    } else if -6 < point && point <= 0 {
        let zeros = usize::try_from(-point).unwrap_or(0);
        format!("0.{}{digits}", "0".repeat(zeros))
    } else {
        let exp_sign = if point - 1 < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        let fraction = if rest.is_empty() {
            String::new()
        } else {
            format!(".{rest}")
        };
        format!("{first}{fraction}e{exp_sign}{}", (point - 1).abs())
    };

    format!("{sign}{body}")
}

#[cfg(test)]
#[path = "gviz_test.rs"]
mod tests;
