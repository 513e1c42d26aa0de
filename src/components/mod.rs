//! UI Components for Date Fact.

mod date_fact_widget;
mod day_input;
mod fact_panel;
mod month_picker;

pub use date_fact_widget::DateFactWidget;
pub use day_input::DayInput;
pub use fact_panel::FactPanel;
pub use month_picker::MonthPicker;
