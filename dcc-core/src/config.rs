use std::time::Duration;
use thiserror::Error;
use tracing::info;

const DEFAULT_API_URL: &str = "/ws";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Client configuration
///
/// Resolved from `DCC_API_URL` and `DCC_REQUEST_TIMEOUT_SECS`. Native builds
/// read a `.env` file first when one exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the submission server's web services, without trailing slash
    pub api_url: String,
    /// Per-request timeout. Ignored in the browser, where fetch has none.
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        info!("API URL: {}", config.api_url);
        Ok(config)
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup("DCC_API_URL").filter(|v| !v.trim().is_empty()) {
            config = config.with_api_url(url);
        }

        if let Some(raw) = lookup("DCC_REQUEST_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::InvalidValue {
                    key: "DCC_REQUEST_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim().trim_end_matches('/').to_string();
        self
    }

    /// Absolute URL for an endpoint path such as `/nextRelease/queue`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}
