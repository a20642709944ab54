//! Parser for the `opening_hours` subset.
//!
//! The supported grammar is:
//!
//! ```text
//! schedule   := "24/7" | "seasonal" | clause (";" clause)*
//! clause     := token (whitespace token)*
//! token      := dayrange | timerange
//! dayrange   := day ("-" day)?
//! day        := "mo"|"tu"|"we"|"th"|"fr"|"sa"|"su"   (case-insensitive)
//! timerange  := HH ":" MM "-" HH ":" MM
//! ```
//!
//! Clauses are applied in order and a later clause overrides the days an
//! earlier one set. Anything outside the grammar rejects the whole input;
//! there is no partial recovery.

mod error;
mod token;

use std::str::FromStr;

use tracing::debug;

use crate::domain::{Interval, WeeklySchedule};

pub use error::ParseError;
use token::{DayRange, Token, classify};

const ALWAYS_OPEN: &str = "24/7";
const SEASONAL: &str = "seasonal";

/// Parse an `opening_hours` value into a weekly schedule.
///
/// `None`, empty and whitespace-only text give
/// [`ParseError::EmptyOrUnspecified`].
///
/// # Examples
///
/// ```
/// use opening_hours::domain::{TimeOfDay, Weekday};
/// use opening_hours::parser::{ParseError, parse};
///
/// let schedule = parse(Some("mo-fr 09:00-17:00; sa 10:00-14:00")).unwrap();
/// let saturday = schedule.interval_for(Weekday::Saturday).unwrap();
/// assert_eq!(saturday.open(), TimeOfDay::new(10, 0).unwrap());
/// assert_eq!(schedule.interval_for(Weekday::Sunday), None);
///
/// assert_eq!(parse(None), Err(ParseError::EmptyOrUnspecified));
/// assert!(parse(Some("garbage text")).unwrap_err().is_failure());
/// ```
pub fn parse(text: Option<&str>) -> Result<WeeklySchedule, ParseError> {
    let text = text.map(str::trim).unwrap_or_default();

    match text {
        "" => Err(ParseError::EmptyOrUnspecified),
        ALWAYS_OPEN => Ok(WeeklySchedule::AlwaysOpen),
        SEASONAL => Ok(WeeklySchedule::Seasonal),
        _ => parse_clauses(&text.to_lowercase()),
    }
}

impl FromStr for WeeklySchedule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(Some(s))
    }
}

fn parse_clauses(text: &str) -> Result<WeeklySchedule, ParseError> {
    let mut schedule = WeeklySchedule::closed();

    for clause in text.split(';').map(str::trim).filter(|c| !c.is_empty()) {
        let (days, interval) = parse_clause(clause)?;
        for day in days.days() {
            schedule = schedule.with_interval(day, interval);
        }
    }

    if !schedule.has_any_interval() {
        return Err(ParseError::NoScheduleExtracted);
    }

    Ok(schedule)
}

/// One clause: at most one day range and at most one time range, in
/// either order.
///
/// A missing day range means the whole week. A missing time range leaves
/// the days without an interval, i.e. closed.
fn parse_clause(clause: &str) -> Result<(DayRange, Option<Interval>), ParseError> {
    let mut days: Option<DayRange> = None;
    let mut interval: Option<Interval> = None;

    for raw in clause.split_whitespace() {
        let token = classify(raw).inspect_err(|e| {
            debug!(token = raw, clause, error = %e, "rejected opening_hours token");
        })?;

        let already_set = match token {
            Token::Days(range) => days.replace(range).is_some(),
            Token::Times(iv) => interval.replace(iv).is_some(),
        };
        if already_set {
            return Err(ParseError::RepeatedToken {
                token: raw.to_string(),
            });
        }
    }

    Ok((days.unwrap_or_else(DayRange::whole_week), interval))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Weekday;
    use crate::format::to_12_hour;
    use proptest::prelude::*;

    prop_compose! {
        fn day_range()(a in 0u8..7, b in 0u8..7) -> (Weekday, Weekday) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            (Weekday::from_index(lo).unwrap(), Weekday::from_index(hi).unwrap())
        }
    }

    prop_compose! {
        fn time_range()(a in 0u16..1440, b in 0u16..1440) -> (String, String) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            (
                format!("{:02}:{:02}", lo / 60, lo % 60),
                format!("{:02}:{:02}", hi / 60, hi % 60),
            )
        }
    }

    prop_compose! {
        fn clause()(days in day_range(), times in time_range()) -> String {
            let (start, end) = days;
            let (open, close) = times;
            if start == end {
                format!("{} {}-{}", start.code(), open, close)
            } else {
                format!("{}-{} {}-{}", start.code(), end.code(), open, close)
            }
        }
    }

    proptest! {
        /// Well-formed clauses always parse to a daily schedule
        #[test]
        fn valid_clauses_parse(clauses in prop::collection::vec(clause(), 1..5)) {
            let text = clauses.join("; ");
            let schedule = parse(Some(text.as_str())).unwrap();
            prop_assert!(schedule.has_any_interval());
        }

        /// Every stored time renders as a 12-hour string
        #[test]
        fn stored_times_render(clauses in prop::collection::vec(clause(), 1..5)) {
            let text = clauses.join(";");
            let schedule = parse(Some(text.as_str())).unwrap();
            for (_, interval) in schedule.days() {
                if let Some(iv) = interval {
                    for t in [iv.open(), iv.close()] {
                        let s = to_12_hour(t);
                        prop_assert!(s.ends_with("AM") || s.ends_with("PM"));
                    }
                }
            }
        }

        /// The last clause mentioning a day decides it
        #[test]
        fn last_clause_wins(first in clause(), second in clause()) {
            let text = format!("{first}; {second}");
            let combined = parse(Some(text.as_str())).unwrap();
            let only_second = parse(Some(second.as_str())).unwrap();
            for (day, interval) in only_second.days() {
                if interval.is_some() {
                    prop_assert_eq!(combined.interval_for(day), interval);
                }
            }
        }

        /// Arbitrary text never panics
        #[test]
        fn never_panics(text in "\\PC{0,40}") {
            let _ = parse(Some(text.as_str()));
        }
    }
}
