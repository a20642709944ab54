//! Parse outcomes other than a schedule.

use crate::domain::{TimeOfDay, Weekday};

/// Why an `opening_hours` value did not yield a schedule.
///
/// Two variants are sentinels rather than failures: the text carried no
/// schedule information at all. Callers usually treat both as "hours
/// unknown", while failures mean the text is outside the supported grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No text was given (absent, empty or whitespace only).
    #[error("no opening hours given")]
    EmptyOrUnspecified,

    /// The text was well formed but no day received an interval.
    #[error("no opening interval found for any day")]
    NoScheduleExtracted,

    /// A token is neither a day range nor a time range.
    #[error("unrecognized token {token:?}")]
    UnrecognizedToken { token: String },

    /// A clause contains two day ranges or two time ranges.
    #[error("repeated token {token:?}: a clause takes one day range and one time range")]
    RepeatedToken { token: String },

    /// A day range runs backwards through the week, e.g. "fr-mo".
    #[error("day range {start}-{end} wraps around the end of the week")]
    WrappedDayRange { start: Weekday, end: Weekday },

    /// A time range closes before it opens.
    #[error("time range {open}-{close} runs past midnight")]
    OvernightInterval { open: TimeOfDay, close: TimeOfDay },
}

impl ParseError {
    /// True for the "no information" outcomes, which are not errors.
    pub fn is_sentinel(&self) -> bool {
        matches!(
            self,
            ParseError::EmptyOrUnspecified | ParseError::NoScheduleExtracted
        )
    }

    /// True when the text could not be understood.
    pub fn is_failure(&self) -> bool {
        !self.is_sentinel()
    }
}
