//! Fetcher context for Date Fact.
//!
//! Provides the shared [`FactFetcher`] to all components via use_context.

use std::sync::Arc;

use datefact_core::FactFetcher;
use dioxus::prelude::*;

/// Shared fetcher type for context.
///
/// The fetcher is immutable after launch; components clone the Arc and
/// issue sequenced requests through it.
pub type SharedFetcher = Arc<FactFetcher>;

/// Hook to access the fact fetcher from context.
pub fn use_fact_fetcher() -> Signal<SharedFetcher> {
    use_context::<Signal<SharedFetcher>>()
}
