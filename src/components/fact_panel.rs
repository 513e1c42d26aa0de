//! Result panel
//!
//! Renders exactly one of: loading indicator, error message, fact text,
//! or nothing at all before the first request settles.

use datefact_core::RequestOutcome;
use dioxus::prelude::*;

/// Displays the current request state below the form.
#[component]
pub fn FactPanel(
    /// Whether a request is in flight
    loading: bool,
    /// Most recent settled outcome
    outcome: RequestOutcome,
) -> Element {
    rsx! {
        if loading {
            div { class: "fact-panel fact-panel--loading",
                div { class: "loading-spinner" }
                "Fetching fact..."
            }
        } else if let Some(message) = outcome.error_message() {
            div { class: "fact-panel fact-panel--error", "{message}" }
        } else if let Some(fact) = outcome.fact_text() {
            div { class: "fact-panel fact-panel--fact", "{fact}" }
        }
    }
}
