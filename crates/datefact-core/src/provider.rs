//! Fact provider trait and the Numbers API client
//!
//! The provider seam is a trait so the widget and the fetch guard can be
//! exercised against an in-process fake; the real implementation speaks
//! HTTP to the Numbers API via RapidAPI.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::ProviderConfig;
use crate::date::DateQuery;
use crate::error::{FactError, FactResult};

/// Fixed text substituted when the provider answers without a usable fact.
pub const NO_FACT_FALLBACK: &str = "No fact available for this date";

const API_KEY_HEADER: &str = "X-RapidAPI-Key";
const API_HOST_HEADER: &str = "X-RapidAPI-Host";

/// Source of trivia facts for a calendar date
#[async_trait]
pub trait FactProvider: Send + Sync {
    /// Fetch the fact text for the given date.
    ///
    /// Implementations resolve a missing fact to [`NO_FACT_FALLBACK`]
    /// rather than an error; `Err` means the request itself failed.
    async fn date_fact(&self, query: &DateQuery) -> FactResult<String>;
}

/// JSON body returned by the Numbers API date endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct FactResponse {
    /// The trivia sentence; absent on some dates
    pub text: Option<String>,
    /// Day-of-year the fact refers to
    pub number: Option<f64>,
    /// Year of the event, when the fact is historical
    pub year: Option<i64>,
    /// Whether the provider had a fact for this date
    pub found: Option<bool>,
}

impl FactResponse {
    /// The displayable fact, falling back when `text` is absent or empty.
    pub fn into_fact(self) -> String {
        match self.text {
            Some(text) if !text.is_empty() => text,
            _ => NO_FACT_FALLBACK.to_string(),
        }
    }
}

/// HTTP client for the Numbers API date-fact endpoint
pub struct NumbersApiClient {
    http: Client,
    config: ProviderConfig,
}

impl NumbersApiClient {
    /// Create a client for the given configuration.
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Full request URL for a query: `{endpoint}/{month}/{day}/date?json=true`.
    pub fn request_url(&self, query: &DateQuery) -> String {
        format!("{}/{}?json=true", self.config.endpoint, query.path())
    }

    async fn get_fact(&self, query: &DateQuery) -> FactResult<String> {
        let url = self.request_url(query);
        tracing::debug!(%url, "requesting date fact");

        let mut request = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(API_HOST_HEADER, &self.config.api_host);
        if let Some(timeout) = self.config.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FactError::UnexpectedStatus(status));
        }

        let body = response.text().await?;
        let parsed: FactResponse = serde_json::from_str(&body)
            .map_err(|e| FactError::MalformedResponse(e.to_string()))?;
        Ok(parsed.into_fact())
    }
}

#[async_trait]
impl FactProvider for NumbersApiClient {
    async fn date_fact(&self, query: &DateQuery) -> FactResult<String> {
        self.get_fact(query).await
    }
}
