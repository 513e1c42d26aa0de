//! Property-based tests for day validation and form evaluation
//!
//! Uses proptest to verify the validation invariant: a request-ready
//! evaluation exists exactly for integer days in [1,31].

use datefact_core::{parse_day, Evaluation, FormState, Month, DAY_MAX, DAY_MIN};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Day strings that contain at least one non-digit, non-sign character
fn non_numeric_day_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{0,2}[a-zA-Z!.,#]{1,5}[0-9]{0,2}")
        .expect("valid regex")
        .prop_filter("must not trim-parse to an integer", |s| {
            s.trim().parse::<i64>().is_err()
        })
}

/// Integer days strictly outside the accepted range
fn out_of_range_day_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        i64::MIN..(DAY_MIN as i64),
        (DAY_MAX as i64 + 1)..i64::MAX,
    ]
}

/// Valid picker values ("1".."12")
fn month_value_strategy() -> impl Strategy<Value = String> {
    (1u8..=12).prop_map(|m| m.to_string())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every in-range day parses, whatever its formatting.
    #[test]
    fn in_range_days_parse(day in DAY_MIN..=DAY_MAX, pad in 0usize..3) {
        let raw = format!("{}{}", "0".repeat(pad), day);
        prop_assert_eq!(parse_day(&raw).unwrap(), day);
        prop_assert_eq!(parse_day(&format!(" {raw} ")).unwrap(), day);
    }

    /// Out-of-range integers are rejected.
    #[test]
    fn out_of_range_days_are_rejected(day in out_of_range_day_strategy()) {
        prop_assert!(parse_day(&day.to_string()).is_err());
    }

    /// Non-numeric text is rejected.
    #[test]
    fn non_numeric_days_are_rejected(raw in non_numeric_day_strategy()) {
        prop_assert!(parse_day(&raw).is_err());
    }

    /// A complete form with an invalid day evaluates to Invalid and
    /// therefore never produces a query to fetch.
    #[test]
    fn invalid_day_never_yields_a_request(
        month in month_value_strategy(),
        day in out_of_range_day_strategy(),
    ) {
        let form = FormState::new(month, day.to_string());
        prop_assert!(matches!(form.evaluate(), Evaluation::Invalid(_)));
    }

    /// A complete form with a valid day always evaluates to Ready, with
    /// the query carrying exactly the entered pair.
    #[test]
    fn valid_pair_always_yields_matching_query(
        month in 1u8..=12,
        day in DAY_MIN..=DAY_MAX,
    ) {
        let form = FormState::new(month.to_string(), day.to_string());
        match form.evaluate() {
            Evaluation::Ready(query) => {
                prop_assert_eq!(query.month(), Month::from_number(month).unwrap());
                prop_assert_eq!(query.day(), day);
            }
            other => prop_assert!(false, "expected Ready, got {:?}", other),
        }
    }

    /// An empty month never produces a request, whatever the day says.
    #[test]
    fn empty_month_is_always_incomplete(day in any::<String>()) {
        let form = FormState::new("", day);
        prop_assert!(matches!(form.evaluate(), Evaluation::Incomplete));
    }
}
