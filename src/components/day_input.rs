//! Day entry field

use dioxus::prelude::*;

/// Props for DayInput component
#[derive(Props, Clone, PartialEq)]
pub struct DayInputProps {
    /// Current raw text
    pub value: String,
    /// Handler receiving the raw text on every keystroke
    pub on_change: EventHandler<String>,
}

/// Numeric-biased text input for the day of the month.
///
/// The raw text passes through unmodified; validation happens during
/// re-evaluation so the state mirrors exactly what the user typed.
#[component]
pub fn DayInput(props: DayInputProps) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "day", "Day" }
            input {
                class: "form-input",
                id: "day",
                r#type: "number",
                inputmode: "numeric",
                min: "1",
                max: "31",
                value: "{props.value}",
                oninput: move |e| props.on_change.call(e.value()),
                placeholder: "1-31",
            }
        }
    }
}
