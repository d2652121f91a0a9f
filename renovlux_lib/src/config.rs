//! Runtime configuration read from the environment (and `.env`).

use std::path::PathBuf;
use std::time::Duration;

use renovlux_api::{Client, DEFAULT_BASE_URL};

pub const API_URL_VAR: &str = "RENOVLUX_API_URL";
pub const API_TIMEOUT_VAR: &str = "RENOVLUX_API_TIMEOUT_MS";
pub const CART_DB_VAR: &str = "RENOVLUX_CART_DB";

const DEFAULT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_CART_DB: &str = "renovlux-cart.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub timeout: Duration,
    pub cart_db: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            cart_db: PathBuf::from(DEFAULT_CART_DB),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the `RENOVLUX_*` variables.
    /// Unset, blank or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Ignoring unreadable .env file: {}", e);
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            api_url: non_blank(API_URL_VAR)
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.api_url),
            timeout: non_blank(API_TIMEOUT_VAR)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.timeout),
            cart_db: non_blank(CART_DB_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.cart_db),
        }
    }

    /// API client configured with this base URL and timeout.
    pub fn client(&self) -> Client {
        Client::with_base_url(&self.api_url).with_timeout(self.timeout)
    }
}
