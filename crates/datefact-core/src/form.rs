//! Form state and re-evaluation
//!
//! Mirrors the two raw input fields of the screen. Re-evaluation is a pure
//! function from the field pair to an [`Evaluation`]; the widget decides
//! what to do with it (show a validation error, or start a fetch).

use crate::date::{parse_day, DateQuery, Month};
use crate::error::FactError;

/// Raw form fields as the user typed them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Picker value: empty or "1".."12"
    pub month: String,
    /// Free text from the day input
    pub day: String,
}

/// Outcome of re-evaluating the form
#[derive(Debug)]
pub enum Evaluation {
    /// At least one field is empty; leave prior state untouched
    Incomplete,
    /// Day failed validation; show the validation message, send nothing
    Invalid(FactError),
    /// Both fields valid; a request should be issued for this query
    Ready(DateQuery),
}

impl FormState {
    pub fn new(month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            day: day.into(),
        }
    }

    /// Re-evaluate the current field pair.
    ///
    /// Runs on every month or day change. Both fields must be non-empty
    /// before anything happens; partial input never clears prior results.
    pub fn evaluate(&self) -> Evaluation {
        if self.month.is_empty() || self.day.is_empty() {
            return Evaluation::Incomplete;
        }

        // The picker only offers valid values, but the state is a raw
        // string; treat an unknown month like an incomplete form.
        let Some(month) = Month::from_picker_value(&self.month) else {
            return Evaluation::Incomplete;
        };

        match parse_day(&self.day) {
            Ok(day) => match DateQuery::new(month, day) {
                Ok(query) => Evaluation::Ready(query),
                Err(err) => Evaluation::Invalid(err),
            },
            Err(err) => Evaluation::Invalid(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VALIDATION_MESSAGE;

    #[test]
    fn test_empty_fields_are_incomplete() {
        assert!(matches!(FormState::default().evaluate(), Evaluation::Incomplete));
        assert!(matches!(
            FormState::new("4", "").evaluate(),
            Evaluation::Incomplete
        ));
        assert!(matches!(
            FormState::new("", "12").evaluate(),
            Evaluation::Incomplete
        ));
    }

    #[test]
    fn test_valid_pair_is_ready() {
        let Evaluation::Ready(query) = FormState::new("2", "29").evaluate() else {
            panic!("expected Ready");
        };
        assert_eq!(query.month().number(), 2);
        assert_eq!(query.day(), 29);
    }

    #[test]
    fn test_invalid_day_reports_validation_error() {
        for day in ["0", "32", "banana", "1e3"] {
            let Evaluation::Invalid(err) = FormState::new("1", day).evaluate() else {
                panic!("expected Invalid for day {day:?}");
            };
            assert_eq!(err.user_message(), VALIDATION_MESSAGE);
        }
    }

    #[test]
    fn test_unknown_month_value_is_incomplete() {
        assert!(matches!(
            FormState::new("13", "5").evaluate(),
            Evaluation::Incomplete
        ));
    }

    #[test]
    fn test_reevaluation_is_pure() {
        let form = FormState::new("7", "4");
        assert!(matches!(form.evaluate(), Evaluation::Ready(_)));
        assert!(matches!(form.evaluate(), Evaluation::Ready(_)));
        assert_eq!(form, FormState::new("7", "4"));
    }
}
