//! Month selection dropdown

use datefact_core::Month;
use dioxus::prelude::*;

/// Props for MonthPicker component
#[derive(Props, Clone, PartialEq)]
pub struct MonthPickerProps {
    /// Current picker value: empty or "1".."12"
    pub value: String,
    /// Handler receiving the raw picker value on change
    pub on_change: EventHandler<String>,
}

/// Dropdown offering the twelve months plus an empty placeholder.
#[component]
pub fn MonthPicker(props: MonthPickerProps) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "month", "Month" }
            select {
                class: "form-select",
                id: "month",
                value: "{props.value}",
                onchange: move |e| props.on_change.call(e.value()),
                option { value: "", "Select a month" }
                for month in Month::all() {
                    option {
                        key: "{month.number()}",
                        value: "{month.number()}",
                        "{month.name()}"
                    }
                }
            }
        }
    }
}
