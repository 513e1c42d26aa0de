use dioxus::prelude::*;

use crate::components::DateFactWidget;
use crate::context::SharedFetcher;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the shared fact fetcher, then renders the
/// single screen.
#[component]
pub fn App() -> Element {
    let fetcher: Signal<SharedFetcher> = use_signal(crate::fact_fetcher);
    use_context_provider(|| fetcher);

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "screen",
            header { class: "screen-header",
                h1 { class: "page-title", "Date Fact" }
                p { class: "tagline", "pick a date, learn something" }
            }
            DateFactWidget {}
        }
    }
}
