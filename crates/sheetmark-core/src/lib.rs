pub mod app_config;
pub mod config;
pub mod policy;
pub mod records;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use policy::{ScanPolicy, DEFAULT_BATCH_SIZE};
pub use records::{BrandField, BrandRecord};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
