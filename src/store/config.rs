//! Store configuration parsed from environment variables.

use super::StoreError;

pub const DEFAULT_STORE_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_STORE_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the hosted store.
///
/// Both values are required; the absence of either puts the whole process
/// into permanent fixture-only mode (callers treat the `Err` as a mode
/// switch, not a failure).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// Anonymous API key sent as both `apikey` and bearer token.
    pub api_key: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl StoreConfig {
    /// Build store config from environment variables.
    ///
    /// Required:
    /// - `SUPABASE_URL`
    /// - `SUPABASE_ANON_KEY`
    ///
    /// Optional:
    /// - `STORE_REQUEST_TIMEOUT_SECS`: default 30
    /// - `STORE_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MissingConfig` naming the first absent variable.
    pub fn from_env() -> Result<Self, StoreError> {
        let url = std::env::var("SUPABASE_URL")
            .map_err(|_| StoreError::MissingConfig { var: "SUPABASE_URL" })?;
        let api_key = std::env::var("SUPABASE_ANON_KEY")
            .map_err(|_| StoreError::MissingConfig { var: "SUPABASE_ANON_KEY" })?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            api_key,
            request_timeout_secs: env_parse_u64("STORE_REQUEST_TIMEOUT_SECS", DEFAULT_STORE_REQUEST_TIMEOUT_SECS),
            connect_timeout_secs: env_parse_u64("STORE_CONNECT_TIMEOUT_SECS", DEFAULT_STORE_CONNECT_TIMEOUT_SECS),
        })
    }

    /// Config pointing at an arbitrary base URL, for tests against a mock store.
    #[must_use]
    pub fn for_base_url(url: &str, api_key: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            request_timeout_secs: DEFAULT_STORE_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_STORE_CONNECT_TIMEOUT_SECS,
        }
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
