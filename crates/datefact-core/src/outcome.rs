//! Settled request outcome
//!
//! At most one of fact and error is non-empty at a time; both empty means
//! no request has completed yet. The fields are private so the exclusivity
//! invariant holds by construction.

/// The displayable result of the most recent settled request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOutcome {
    fact: String,
    error: String,
}

impl RequestOutcome {
    /// A successful outcome carrying the fact text.
    pub fn fact(text: impl Into<String>) -> Self {
        Self {
            fact: text.into(),
            error: String::new(),
        }
    }

    /// A failed outcome carrying the user-visible message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            fact: String::new(),
            error: message.into(),
        }
    }

    /// The fact text, if this outcome is a success.
    pub fn fact_text(&self) -> Option<&str> {
        (!self.fact.is_empty()).then_some(self.fact.as_str())
    }

    /// The error message, if this outcome is a failure.
    pub fn error_message(&self) -> Option<&str> {
        (!self.error.is_empty()).then_some(self.error.as_str())
    }

    /// Whether any request has settled into this outcome yet.
    pub fn is_settled(&self) -> bool {
        !self.fact.is_empty() || !self.error.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unsettled() {
        let outcome = RequestOutcome::default();
        assert!(!outcome.is_settled());
        assert_eq!(outcome.fact_text(), None);
        assert_eq!(outcome.error_message(), None);
    }

    #[test]
    fn test_fact_and_error_are_exclusive() {
        let fact = RequestOutcome::fact("June 21 is the summer solstice.");
        assert_eq!(fact.fact_text(), Some("June 21 is the summer solstice."));
        assert_eq!(fact.error_message(), None);

        let error = RequestOutcome::error("Error fetching fact. Please try again.");
        assert_eq!(error.fact_text(), None);
        assert!(error.error_message().is_some());
    }
}
