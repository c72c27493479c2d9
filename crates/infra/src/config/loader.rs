//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `AUTH_SECRET`: HMAC key for the access-gate cookie (required)
//! - `AUTH_USERNAME` / `AUTH_PASSWORD`: the login credential pair (required)
//! - `SHEET_CSV_URL`: upstream CSV export URL (may be left unset; the
//!   sheet endpoint then answers with a configuration error)
//! - `ALLOWED_IPS`: comma-separated IP allowlist
//! - `BIND_ADDR`: listen address, default `127.0.0.1:8080`
//! - `REFRESH_INTERVAL_SECONDS`: periodic refresh interval
//! - `CONFIRM_DELAY_MS`: delay between the two confirmatory fetches
//! - `TOKEN_TTL_HOURS`: auth-token lifetime
//!
//! ## File Locations
//! The loader probes `config.{json,toml}` and `irqdash.{json,toml}` in the
//! working directory, two parent levels, and next to the executable.

use std::path::{Path, PathBuf};

use irqdash_domain::constants::{
    CONFIRM_FETCH_DELAY_MS, DEFAULT_REFRESH_INTERVAL_SECS, DEFAULT_TOKEN_TTL_HOURS,
};
use irqdash_domain::{
    AuthConfig, Config, DashboardError, Result, ServerConfig, SheetConfig,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `DashboardError::Config` if configuration cannot be loaded
/// from either source.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `DashboardError::Config` if a required variable is missing or
/// a numeric variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let secret = env_var("AUTH_SECRET")?;
    let username = env_var("AUTH_USERNAME")?;
    let password = env_var("AUTH_PASSWORD")?;

    let csv_url = std::env::var("SHEET_CSV_URL").unwrap_or_default();
    let allowed_ips = std::env::var("ALLOWED_IPS")
        .map(|raw| split_csv_list(&raw))
        .unwrap_or_default();

    Ok(Config {
        server: ServerConfig {
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
        },
        sheet: SheetConfig {
            csv_url,
            refresh_interval_seconds: env_u64(
                "REFRESH_INTERVAL_SECONDS",
                DEFAULT_REFRESH_INTERVAL_SECS,
            )?,
            confirm_delay_ms: env_u64("CONFIRM_DELAY_MS", CONFIRM_FETCH_DELAY_MS)?,
        },
        auth: AuthConfig {
            secret,
            username,
            password,
            allowed_ips,
            token_ttl_hours: env_i64("TOKEN_TTL_HOURS", DEFAULT_TOKEN_TTL_HOURS)?,
        },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `DashboardError::Config` if no file is found or the file does
/// not parse.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DashboardError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DashboardError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DashboardError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DashboardError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DashboardError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(DashboardError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("irqdash.json"),
            cwd.join("irqdash.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
            cwd.join("../../config.json"),
            cwd.join("../../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("irqdash.json"),
                exe_dir.join("irqdash.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Split a comma-separated list, trimming entries and dropping empties.
fn split_csv_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Get required environment variable
///
/// # Errors
/// Returns `DashboardError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        DashboardError::Config(format!("Missing required environment variable: {}", key))
    })
}

fn env_u64(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| DashboardError::Config(format!("Invalid {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}

fn env_i64(key: &str, default: i64) -> Result<i64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<i64>()
            .map_err(|e| DashboardError::Config(format!("Invalid {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_list_trims_and_drops_empties() {
        assert_eq!(
            split_csv_list(" 10.0.0.1, 10.0.0.2 ,,"),
            vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()]
        );
        assert!(split_csv_list("").is_empty());
    }

    #[test]
    fn parse_config_rejects_unknown_extensions() {
        let err = parse_config("{}", Path::new("config.yaml")).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn parse_config_reads_json() {
        let json = r#"{
            "server": {"bind_addr": "0.0.0.0:9000"},
            "sheet": {"csv_url": "https://example.com/sheet.csv",
                      "refresh_interval_seconds": 60,
                      "confirm_delay_ms": 100},
            "auth": {"secret": "s", "username": "u", "password": "p",
                     "allowed_ips": ["10.0.0.1"], "token_ttl_hours": 12}
        }"#;
        let config = parse_config(json, Path::new("config.json")).unwrap();
        assert_eq!(config.server.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.auth.allowed_ips, vec!["10.0.0.1".to_string()]);
    }
}
