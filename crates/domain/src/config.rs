//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIRM_FETCH_DELAY_MS, DEFAULT_REFRESH_INTERVAL_SECS, DEFAULT_TOKEN_TTL_HOURS,
};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub sheet: SheetConfig,
    pub auth: AuthConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

/// Upstream spreadsheet configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    pub csv_url: String,
    pub refresh_interval_seconds: u64,
    pub confirm_delay_ms: u64,
}

/// Access gate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(skip_serializing)]
    pub secret: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub allowed_ips: Vec<String>,
    pub token_ttl_hours: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind_addr: "127.0.0.1:8080".to_string(),
            },
            sheet: SheetConfig {
                csv_url: String::new(),
                refresh_interval_seconds: DEFAULT_REFRESH_INTERVAL_SECS,
                confirm_delay_ms: CONFIRM_FETCH_DELAY_MS,
            },
            auth: AuthConfig {
                secret: String::new(),
                username: String::new(),
                password: String::new(),
                allowed_ips: Vec::new(),
                token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
            },
        }
    }
}
