//! Error types for Date Fact

use thiserror::Error;

/// Fixed message shown when the day field fails validation.
pub const VALIDATION_MESSAGE: &str = "Please enter a valid day (1-31).";

/// Fixed message shown when a request to the fact provider fails.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching fact. Please try again.";

/// Main error type for Date Fact operations
#[derive(Error, Debug)]
pub enum FactError {
    /// Day field does not parse to an integer in [1,31]
    #[error("Invalid day: {0:?}")]
    InvalidDay(String),

    /// Transport-level failure talking to the fact provider
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Fact provider answered with a non-success status
    #[error("Unexpected status from fact provider: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    /// Response body was not the expected JSON shape
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// No API key was supplied via CLI flag or environment
    #[error("Missing API key (set --api-key or DATEFACT_API_KEY)")]
    MissingApiKey,
}

impl FactError {
    /// The fixed, user-visible message for this error.
    ///
    /// Everything except a validation failure collapses into the generic
    /// fetch message; internal detail stays in the tracing log.
    pub fn user_message(&self) -> &'static str {
        match self {
            FactError::InvalidDay(_) => VALIDATION_MESSAGE,
            _ => FETCH_ERROR_MESSAGE,
        }
    }

    /// Whether this error is a pre-flight validation failure (no request
    /// was sent) rather than a failed fetch.
    pub fn is_validation(&self) -> bool {
        matches!(self, FactError::InvalidDay(_))
    }
}

/// Result type alias using FactError
pub type FactResult<T> = Result<T, FactError>;
