use std::net::SocketAddr;

use crate::policy::ScanPolicy;

/// Production folder listing that hosts the trademark spreadsheets.
pub const DEFAULT_FOLDER_URL: &str =
    "https://drive.google.com/drive/folders/10T-OTucPFU6ys7xfqsjIHbWURlIE7fAB";

/// Host serving the `gviz/tq` export for each spreadsheet.
pub const DEFAULT_SHEETS_BASE_URL: &str = "https://docs.google.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub folder_url: String,
    pub sheets_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub scan_policy: ScanPolicy,
    /// Upper bound on in-flight export fetches for [`ScanPolicy::Exhaustive`].
    /// `0` fetches every sheet at once.
    pub max_concurrent_sheets: usize,
    pub rate_limit_per_minute: usize,
}
