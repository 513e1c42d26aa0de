//! Calendar-date form values
//!
//! The form deals in raw strings (a picker value and free text); this module
//! turns them into a validated [`DateQuery`] or an error. Day validation is
//! deliberately loose about real calendars: any day in [1,31] is accepted
//! for any month, matching the provider's own behavior.

use std::fmt;

use crate::error::{FactError, FactResult};

/// Smallest accepted day value
pub const DAY_MIN: u8 = 1;

/// Largest accepted day value
pub const DAY_MAX: u8 = 31;

/// Calendar months as offered by the month picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order, for populating a picker.
    pub fn all() -> &'static [Month] {
        &[
            Month::January,
            Month::February,
            Month::March,
            Month::April,
            Month::May,
            Month::June,
            Month::July,
            Month::August,
            Month::September,
            Month::October,
            Month::November,
            Month::December,
        ]
    }

    /// One-based month number (January is 1).
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    /// English display name.
    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Look up a month by its one-based number.
    pub fn from_number(number: u8) -> Option<Month> {
        Month::all().get(number.checked_sub(1)? as usize).copied()
    }

    /// Parse a picker value ("1".."12").
    pub fn from_picker_value(value: &str) -> Option<Month> {
        value.trim().parse::<u8>().ok().and_then(Month::from_number)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse the raw day text into a day number.
///
/// Accepts surrounding whitespace; anything that is not an integer in
/// [1,31] is an [`FactError::InvalidDay`].
pub fn parse_day(raw: &str) -> FactResult<u8> {
    let trimmed = raw.trim();
    let day: i64 = trimmed
        .parse()
        .map_err(|_| FactError::InvalidDay(raw.to_string()))?;
    if !(DAY_MIN as i64..=DAY_MAX as i64).contains(&day) {
        return Err(FactError::InvalidDay(raw.to_string()));
    }
    Ok(day as u8)
}

/// A validated (month, day) pair ready to be sent to the fact provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateQuery {
    month: Month,
    day: u8,
}

impl DateQuery {
    /// Build a query from a month and validated day.
    pub fn new(month: Month, day: u8) -> FactResult<Self> {
        if !(DAY_MIN..=DAY_MAX).contains(&day) {
            return Err(FactError::InvalidDay(day.to_string()));
        }
        Ok(Self { month, day })
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// URL path segment for the provider: `{month}/{day}/date`.
    pub fn path(&self) -> String {
        format!("{}/{}/date", self.month.number(), self.day)
    }
}

impl fmt::Display for DateQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.name(), self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_numbers_are_one_based() {
        assert_eq!(Month::January.number(), 1);
        assert_eq!(Month::December.number(), 12);
        assert_eq!(Month::all().len(), 12);
    }

    #[test]
    fn test_month_from_picker_value() {
        assert_eq!(Month::from_picker_value("3"), Some(Month::March));
        assert_eq!(Month::from_picker_value(" 12 "), Some(Month::December));
        assert_eq!(Month::from_picker_value(""), None);
        assert_eq!(Month::from_picker_value("0"), None);
        assert_eq!(Month::from_picker_value("13"), None);
    }

    #[test]
    fn test_parse_day_accepts_range() {
        assert_eq!(parse_day("1").unwrap(), 1);
        assert_eq!(parse_day("31").unwrap(), 31);
        assert_eq!(parse_day(" 07 ").unwrap(), 7);
    }

    #[test]
    fn test_parse_day_rejects_out_of_range() {
        assert!(matches!(parse_day("0"), Err(FactError::InvalidDay(_))));
        assert!(matches!(parse_day("32"), Err(FactError::InvalidDay(_))));
        assert!(matches!(parse_day("-3"), Err(FactError::InvalidDay(_))));
    }

    #[test]
    fn test_parse_day_rejects_non_numeric() {
        assert!(matches!(parse_day("abc"), Err(FactError::InvalidDay(_))));
        assert!(matches!(parse_day("5five"), Err(FactError::InvalidDay(_))));
        assert!(matches!(parse_day(""), Err(FactError::InvalidDay(_))));
        assert!(matches!(parse_day("1.5"), Err(FactError::InvalidDay(_))));
    }

    #[test]
    fn test_query_path() {
        let query = DateQuery::new(Month::June, 21).unwrap();
        assert_eq!(query.path(), "6/21/date");
        assert_eq!(query.to_string(), "June 21");
    }

    #[test]
    fn test_query_rejects_invalid_day() {
        assert!(DateQuery::new(Month::June, 0).is_err());
        assert!(DateQuery::new(Month::June, 32).is_err());
    }
}
