//! Provider configuration for Date Fact
//!
//! The RapidAPI key is injected configuration, never a literal in the
//! source: CLI flag first, environment variable second.

use std::time::Duration;

use crate::error::{FactError, FactResult};

/// Environment variable consulted when no key is passed explicitly.
pub const API_KEY_ENV: &str = "DATEFACT_API_KEY";

/// Environment variable overriding the provider endpoint.
pub const ENDPOINT_ENV: &str = "DATEFACT_API_ENDPOINT";

const DEFAULT_ENDPOINT: &str = "https://numbersapi.p.rapidapi.com";
const DEFAULT_API_HOST: &str = "numbersapi.p.rapidapi.com";

/// Configuration for the Numbers API fact provider
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Base URL for the provider (no trailing slash)
    pub endpoint: String,

    /// RapidAPI key sent as `X-RapidAPI-Key`
    pub api_key: String,

    /// Value sent as `X-RapidAPI-Host`
    pub api_host: String,

    /// Optional per-request timeout; `None` lets a hung request hang
    pub timeout: Option<Duration>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            api_host: DEFAULT_API_HOST.to_string(),
            timeout: None,
        }
    }
}

impl ProviderConfig {
    /// Create a configuration with the given API key and default endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Build a configuration from the environment.
    ///
    /// Fails with [`FactError::MissingApiKey`] when `DATEFACT_API_KEY` is
    /// unset or empty.
    pub fn from_env() -> FactResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(FactError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                config = config.with_endpoint(endpoint);
            }
        }
        Ok(config)
    }

    /// Override the provider endpoint (trailing slash is stripped)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    /// Override the `X-RapidAPI-Host` header value
    pub fn with_api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = host.into();
        self
    }

    /// Set a per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
