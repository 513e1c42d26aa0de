//! Date Fact Core Library
//!
//! Everything behind the single screen of the Date Fact app: form
//! validation, the Numbers API client, and the request sequencing that
//! keeps overlapping fetches from racing on the display.
//!
//! ## Overview
//!
//! The UI holds two raw strings (a month picker value and free-text day).
//! [`FormState::evaluate`] turns them into an [`Evaluation`]; when the pair
//! is [`Evaluation::Ready`], the widget issues one request through a
//! [`FactFetcher`], which stamps it with a sequence ticket. Only the newest
//! ticket may settle into the displayed [`RequestOutcome`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use datefact_core::{FactFetcher, FormState, Evaluation, NumbersApiClient, ProviderConfig};
//!
//! let config = ProviderConfig::from_env()?;
//! let fetcher = FactFetcher::new(Arc::new(NumbersApiClient::new(config)));
//!
//! if let Evaluation::Ready(query) = FormState::new("6", "21").evaluate() {
//!     let ticket = fetcher.begin();
//!     if let Some(outcome) = fetcher.run(&ticket, &query).await {
//!         println!("{}", outcome.fact_text().unwrap_or("(no fact)"));
//!     }
//! }
//! ```

pub mod config;
pub mod date;
pub mod error;
pub mod fetch;
pub mod form;
pub mod outcome;
pub mod provider;

// Re-exports
pub use config::ProviderConfig;
pub use date::{parse_day, DateQuery, Month, DAY_MAX, DAY_MIN};
pub use error::{FactError, FactResult, FETCH_ERROR_MESSAGE, VALIDATION_MESSAGE};
pub use fetch::{FactFetcher, FetchTicket};
pub use form::{Evaluation, FormState};
pub use outcome::RequestOutcome;
pub use provider::{FactProvider, FactResponse, NumbersApiClient, NO_FACT_FALLBACK};
