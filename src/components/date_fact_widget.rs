//! Date Fact widget - the single screen's form and result
//!
//! Two inputs, one fetch. Every change to month or day re-evaluates the
//! form; a valid pair issues one sequenced request, and only the newest
//! request may write the displayed outcome.

use datefact_core::{Evaluation, FormState, RequestOutcome};
use dioxus::prelude::*;

use crate::components::{DayInput, FactPanel, MonthPicker};
use crate::context::use_fact_fetcher;

/// The whole screen: month picker, day input, result panel.
#[component]
pub fn DateFactWidget() -> Element {
    let fetcher = use_fact_fetcher();
    let mut month = use_signal(String::new);
    let mut day = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut outcome = use_signal(RequestOutcome::default);

    // Re-evaluation: runs on every month or day change. An incomplete
    // form leaves prior state untouched.
    use_effect(move || {
        let form = FormState::new(month(), day());
        let fetcher = fetcher();
        match form.evaluate() {
            Evaluation::Incomplete => {}
            Evaluation::Invalid(err) => {
                // Supersede any in-flight request so its eventual answer
                // cannot replace the validation message.
                fetcher.invalidate();
                loading.set(false);
                outcome.set(RequestOutcome::error(err.user_message()));
            }
            Evaluation::Ready(query) => {
                let ticket = fetcher.begin();
                loading.set(true);
                outcome.set(RequestOutcome::default());
                spawn(async move {
                    if let Some(settled) = fetcher.run(&ticket, &query).await {
                        outcome.set(settled);
                        loading.set(false);
                    }
                    // A stale settle changes nothing; the newer request
                    // owns the loading flag and the outcome.
                });
            }
        }
    });

    rsx! {
        section { class: "date-form",
            MonthPicker {
                value: month(),
                on_change: move |value| month.set(value),
            }
            DayInput {
                value: day(),
                on_change: move |value| day.set(value),
            }
        }
        FactPanel { loading: loading(), outcome: outcome() }
    }
}
