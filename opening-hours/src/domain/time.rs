//! Time-of-day handling.
//!
//! Opening hours give times as zero-padded "HH:MM" strings. `TimeOfDay`
//! orders them numerically (minutes since midnight), which agrees with the
//! lexical order of the padded strings.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock time of day with minute precision.
///
/// # Examples
///
/// ```
/// use opening_hours::domain::TimeOfDay;
///
/// let t = TimeOfDay::parse_hhmm("09:05").unwrap();
/// assert_eq!(t.hour(), 9);
/// assert_eq!(t.minute(), 5);
/// assert_eq!(t.to_string(), "09:05");
///
/// assert!(TimeOfDay::parse_hhmm("9:05").is_err());
/// assert!(TimeOfDay::parse_hhmm("24:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    // Field order matters: the derived Ord compares hour first.
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Midnight, 00:00.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Create a time from hour (0-23) and minute (0-59).
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Ok(Self { hour, minute })
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// Both fields must be exactly two ASCII digits.
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::new(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight (0-1439).
    pub fn minutes_since_midnight(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Seconds and sub-seconds are dropped.
    fn from(time: NaiveTime) -> Self {
        // chrono guarantees hour < 24 and minute < 60
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.hour, self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Parse two ASCII digit bytes into a u8.
fn parse_two_digits(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some((d1 * 10 + d2) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        let t = TimeOfDay::parse_hhmm("00:00").unwrap();
        assert_eq!(t.hour(), 0);
        assert_eq!(t.minute(), 0);

        let t = TimeOfDay::parse_hhmm("23:59").unwrap();
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 59);

        let t = TimeOfDay::parse_hhmm("14:30").unwrap();
        assert_eq!(t.hour(), 14);
        assert_eq!(t.minute(), 30);
    }

    #[test]
    fn parse_invalid_format() {
        // Wrong length
        assert!(TimeOfDay::parse_hhmm("1430").is_err());
        assert!(TimeOfDay::parse_hhmm("14:3").is_err());
        assert!(TimeOfDay::parse_hhmm("14:300").is_err());
        assert!(TimeOfDay::parse_hhmm("9:00").is_err());

        // Missing colon
        assert!(TimeOfDay::parse_hhmm("14-30").is_err());
        assert!(TimeOfDay::parse_hhmm("14.30").is_err());

        // Non-digit characters
        assert!(TimeOfDay::parse_hhmm("ab:cd").is_err());
        assert!(TimeOfDay::parse_hhmm("1a:30").is_err());
        assert!(TimeOfDay::parse_hhmm("+1:30").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert!(TimeOfDay::parse_hhmm("24:00").is_err());
        assert!(TimeOfDay::parse_hhmm("25:00").is_err());
        assert!(TimeOfDay::parse_hhmm("12:60").is_err());
        assert!(TimeOfDay::parse_hhmm("12:99").is_err());
    }

    #[test]
    fn error_display() {
        let err = TimeOfDay::parse_hhmm("24:00").unwrap_err();
        assert_eq!(err.to_string(), "invalid time: hour must be 0-23");
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(TimeOfDay::new(0, 0).unwrap().to_string(), "00:00");
        assert_eq!(TimeOfDay::new(9, 5).unwrap().to_string(), "09:05");
        assert_eq!(TimeOfDay::new(23, 59).unwrap().to_string(), "23:59");
    }

    #[test]
    fn debug_format() {
        let t = TimeOfDay::new(7, 3).unwrap();
        assert_eq!(format!("{:?}", t), "TimeOfDay(07:03)");
    }

    #[test]
    fn ordering() {
        let t1 = TimeOfDay::parse_hhmm("09:59").unwrap();
        let t2 = TimeOfDay::parse_hhmm("10:00").unwrap();
        let t3 = TimeOfDay::parse_hhmm("10:01").unwrap();

        assert!(t1 < t2);
        assert!(t2 < t3);
        assert!(TimeOfDay::MIDNIGHT <= t1);
    }

    #[test]
    fn from_naive_time_drops_seconds() {
        let naive = NaiveTime::from_hms_opt(17, 45, 59).unwrap();
        let t = TimeOfDay::from(naive);
        assert_eq!(t.to_string(), "17:45");
    }

    #[test]
    fn minutes_since_midnight() {
        assert_eq!(TimeOfDay::MIDNIGHT.minutes_since_midnight(), 0);
        assert_eq!(TimeOfDay::new(1, 30).unwrap().minutes_since_midnight(), 90);
        assert_eq!(
            TimeOfDay::new(23, 59).unwrap().minutes_since_midnight(),
            1439
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_time()(hour in 0u8..24, minute in 0u8..60) -> String {
            format!("{:02}:{:02}", hour, minute)
        }
    }

    proptest! {
        /// Parse then display roundtrips
        #[test]
        fn parse_display_roundtrip(time_str in valid_time()) {
            let parsed = TimeOfDay::parse_hhmm(&time_str).unwrap();
            prop_assert_eq!(parsed.to_string(), time_str);
        }

        /// Numeric order agrees with lexical order of the padded strings
        #[test]
        fn order_matches_lexical(a in valid_time(), b in valid_time()) {
            let ta = TimeOfDay::parse_hhmm(&a).unwrap();
            let tb = TimeOfDay::parse_hhmm(&b).unwrap();
            prop_assert_eq!(ta.cmp(&tb), a.cmp(&b));
        }

        /// Order agrees with minutes since midnight
        #[test]
        fn order_matches_minutes(
            h1 in 0u8..24, m1 in 0u8..60,
            h2 in 0u8..24, m2 in 0u8..60
        ) {
            let t1 = TimeOfDay::new(h1, m1).unwrap();
            let t2 = TimeOfDay::new(h2, m2).unwrap();
            prop_assert_eq!(
                t1.cmp(&t2),
                t1.minutes_since_midnight().cmp(&t2.minutes_since_midnight())
            );
        }

        /// Invalid hour is rejected
        #[test]
        fn invalid_hour_rejected(hour in 24u32..100, minute in 0u32..60) {
            let s = format!("{:02}:{:02}", hour, minute);
            prop_assert!(TimeOfDay::parse_hhmm(&s).is_err());
        }

        /// Invalid minute is rejected
        #[test]
        fn invalid_minute_rejected(hour in 0u32..24, minute in 60u32..100) {
            let s = format!("{:02}:{:02}", hour, minute);
            prop_assert!(TimeOfDay::parse_hhmm(&s).is_err());
        }
    }
}
