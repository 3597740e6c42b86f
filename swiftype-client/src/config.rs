//! Client configuration.

use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Default API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://search-api.swiftype.com/api/v1/";

/// Environment variable holding the default API key.
pub const API_KEY_ENV: &str = "SWIFTYPE_API_KEY";

/// Environment variable overriding the API endpoint.
pub const ENDPOINT_ENV: &str = "SWIFTYPE_API_ENDPOINT";

/// Settings shared by every client built from them.
///
/// `api_key` is the default key, used when a client is constructed without
/// its own override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL that relative API paths are joined onto.
    pub endpoint: String,
    /// Default API key.
    pub api_key: Option<String>,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Overall request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            user_agent: format!("swiftype-rs/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Builds a config from `SWIFTYPE_API_KEY` and `SWIFTYPE_API_ENDPOINT`,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.is_empty() {
                config.endpoint = endpoint;
            }
        }
        config
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parses the endpoint, adding a trailing slash so relative paths are
    /// appended rather than replacing the last segment.
    pub fn endpoint_url(&self) -> ClientResult<Url> {
        if self.endpoint.trim().is_empty() {
            return Err(ClientError::Config("endpoint is empty".to_string()));
        }
        let mut endpoint = self.endpoint.trim().to_string();
        if !endpoint.ends_with('/') {
            endpoint.push('/');
        }
        let url = Url::parse(&endpoint)
            .map_err(|e| ClientError::Config(format!("invalid endpoint {endpoint:?}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "endpoint {endpoint:?} cannot be used as a base URL"
            )));
        }
        Ok(url)
    }

    /// Checks the config without building a client.
    pub fn validate(&self) -> ClientResult<()> {
        self.endpoint_url()?;
        if self.timeout_secs == 0 {
            return Err(ClientError::Config("timeout must be non-zero".to_string()));
        }
        Ok(())
    }
}
