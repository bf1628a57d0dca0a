pub mod client;
pub mod columns;
pub mod error;
pub mod folder;
pub mod gviz;
pub mod matcher;
pub mod search;

pub use client::SheetsClient;
pub use columns::ColumnIndexMap;
pub use error::ScraperError;
pub use folder::extract_sheet_ids;
pub use gviz::{parse_export, TabularExport};
pub use matcher::{matches_query, search_export};
pub use search::SheetSearch;
