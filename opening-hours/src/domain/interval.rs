//! Opening interval within a single day.

use std::fmt;

use super::TimeOfDay;

/// Error returned when an interval would close before it opens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("interval closes at {close} before it opens at {open}")]
pub struct InvalidInterval {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

/// An opening interval: open and close times on the same day.
///
/// Both ends are inclusive. Intervals that run past midnight are not
/// representable; `close` is never earlier than `open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    open: TimeOfDay,
    close: TimeOfDay,
}

impl Interval {
    /// Create an interval, rejecting one that closes before it opens.
    ///
    /// ```
    /// use opening_hours::domain::{Interval, TimeOfDay};
    ///
    /// let nine = TimeOfDay::new(9, 0).unwrap();
    /// let five = TimeOfDay::new(17, 0).unwrap();
    ///
    /// assert!(Interval::new(nine, five).is_ok());
    /// assert!(Interval::new(five, nine).is_err());
    /// ```
    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Result<Self, InvalidInterval> {
        if close < open {
            return Err(InvalidInterval { open, close });
        }
        Ok(Self { open, close })
    }

    pub fn open(&self) -> TimeOfDay {
        self.open
    }

    pub fn close(&self) -> TimeOfDay {
        self.close
    }

    /// Whether `time` falls within the interval, ends included.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.open <= time && time <= self.close
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.open, self.close)
    }
}
