//! Day-of-week type.

use std::fmt;

/// Error returned when parsing an invalid two-letter day code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid day code: {reason}")]
pub struct InvalidWeekday {
    reason: &'static str,
}

/// A day of the week, Monday first.
///
/// The ordinal (`index`) runs from 0 (Monday) to 6 (Sunday) and is what
/// day-range expansion and the "next opening" scan step through.
///
/// # Examples
///
/// ```
/// use opening_hours::domain::Weekday;
///
/// let fr = Weekday::from_code("Fr").unwrap();
/// assert_eq!(fr, Weekday::Friday);
/// assert_eq!(fr.index(), 4);
/// assert_eq!(fr.code(), "fr");
///
/// // Sunday wraps back to Monday
/// assert_eq!(Weekday::Sunday.succ(), Weekday::Monday);
///
/// assert!(Weekday::from_code("mon").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Two-letter codes in ordinal order.
const CODES: [&str; 7] = ["mo", "tu", "we", "th", "fr", "sa", "su"];

const NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

impl Weekday {
    /// All days, Monday through Sunday.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Returns the day with the given ordinal (0 = Monday), if in range.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Parse a two-letter day code (`mo`, `tu`, ... `su`), ignoring case.
    pub fn from_code(s: &str) -> Result<Self, InvalidWeekday> {
        if s.len() != 2 {
            return Err(InvalidWeekday {
                reason: "must be exactly 2 letters",
            });
        }

        let lower = s.to_ascii_lowercase();
        CODES
            .iter()
            .position(|&code| code == lower)
            .and_then(|i| Self::from_index(i as u8))
            .ok_or(InvalidWeekday {
                reason: "must be one of mo, tu, we, th, fr, sa, su",
            })
    }

    /// Returns the ordinal, 0 (Monday) to 6 (Sunday).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase two-letter code.
    pub fn code(self) -> &'static str {
        CODES[self as usize]
    }

    /// Returns the English day name, e.g. "Monday".
    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// The following day, wrapping from Sunday to Monday.
    pub fn succ(self) -> Self {
        self.add_days(1)
    }

    /// The day `n` days after this one, wrapping through the week.
    pub fn add_days(self, n: u8) -> Self {
        Self::ALL[(self as usize + n as usize) % 7]
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        // num_days_from_monday is always 0..=6
        Self::ALL[day.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
