use crate::app_config::{AppConfig, Environment, DEFAULT_FOLDER_URL, DEFAULT_SHEETS_BASE_URL};
use crate::policy::{ScanPolicy, DEFAULT_BATCH_SIZE};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if any value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields the
/// production endpoints with an exhaustive scan.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_http_url = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(trimmed.to_string())
        } else {
            Err(invalid(var, format!("\"{trimmed}\" is not an http(s) URL")))
        }
    };

    let env = parse_environment(&or_default("SHEETMARK_ENV", "development"))?;

    let bind_addr = or_default("SHEETMARK_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("SHEETMARK_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("SHEETMARK_LOG_LEVEL", "info");

    let folder_url = parse_http_url("SHEETMARK_FOLDER_URL", DEFAULT_FOLDER_URL)?;
    let sheets_base_url = parse_http_url("SHEETMARK_SHEETS_BASE_URL", DEFAULT_SHEETS_BASE_URL)?;

    let request_timeout_secs = parse_u64("SHEETMARK_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "SHEETMARK_REQUEST_TIMEOUT_SECS",
            "timeout must be at least 1 second".to_string(),
        ));
    }
    let user_agent = or_default("SHEETMARK_USER_AGENT", "sheetmark/0.1 (brand-lookup)");

    let batch_size = parse_usize("SHEETMARK_BATCH_SIZE", &DEFAULT_BATCH_SIZE.to_string())?;
    let scan_policy = ScanPolicy::parse(&or_default("SHEETMARK_SCAN_POLICY", "exhaustive"), batch_size)
        .map_err(|reason| invalid("SHEETMARK_SCAN_POLICY", reason))?;
    let max_concurrent_sheets = parse_usize("SHEETMARK_MAX_CONCURRENT_SHEETS", "0")?;
    let rate_limit_per_minute = parse_usize("SHEETMARK_RATE_LIMIT_PER_MINUTE", "120")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        folder_url,
        sheets_base_url,
        request_timeout_secs,
        user_agent,
        scan_policy,
        max_concurrent_sheets,
        rate_limit_per_minute,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SHEETMARK_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
