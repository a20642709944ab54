//! Token classification.
//!
//! A token is classified purely by its shape: either a day range
//! (`mo`, `mo-fr`) or a time range (`09:00-17:00`).

use crate::domain::{Interval, TimeOfDay, Weekday};

use super::ParseError;

/// An inclusive run of days, `start` never after `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    start: Weekday,
    end: Weekday,
}

impl DayRange {
    /// A range covering a single day.
    pub fn single(day: Weekday) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Monday through Sunday.
    pub fn whole_week() -> Self {
        Self {
            start: Weekday::Monday,
            end: Weekday::Sunday,
        }
    }

    /// A range from `start` to `end`, walking forward without wrapping.
    pub fn new(start: Weekday, end: Weekday) -> Result<Self, ParseError> {
        if end < start {
            return Err(ParseError::WrappedDayRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The days covered, in order.
    pub fn days(&self) -> impl Iterator<Item = Weekday> {
        (self.start.index()..=self.end.index()).filter_map(Weekday::from_index)
    }
}

/// A classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Days(DayRange),
    Times(Interval),
}

/// Classify a single whitespace-free token.
///
/// Returns `UnrecognizedToken` when the token has neither shape, and the
/// more specific error when it has the right shape but describes a
/// range the grammar does not allow.
pub fn classify(token: &str) -> Result<Token, ParseError> {
    if let Some(days) = day_range(token)? {
        return Ok(Token::Days(days));
    }
    if let Some(interval) = time_range(token)? {
        return Ok(Token::Times(interval));
    }
    Err(ParseError::UnrecognizedToken {
        token: token.to_string(),
    })
}

/// `day` or `day-day`.
fn day_range(token: &str) -> Result<Option<DayRange>, ParseError> {
    match token.split_once('-') {
        None => Ok(Weekday::from_code(token).ok().map(DayRange::single)),
        Some((start, end)) => {
            let (Ok(start), Ok(end)) = (Weekday::from_code(start), Weekday::from_code(end)) else {
                return Ok(None);
            };
            DayRange::new(start, end).map(Some)
        }
    }
}

/// `HH:MM-HH:MM`.
fn time_range(token: &str) -> Result<Option<Interval>, ParseError> {
    let Some((open, close)) = token.split_once('-') else {
        return Ok(None);
    };
    let (Ok(open), Ok(close)) = (TimeOfDay::parse_hhmm(open), TimeOfDay::parse_hhmm(close))
    else {
        return Ok(None);
    };
    Interval::new(open, close)
        .map(Some)
        .map_err(|e| ParseError::OvernightInterval {
            open: e.open,
            close: e.close,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse_hhmm(s).unwrap()
    }

    #[test]
    fn single_day() {
        assert_eq!(
            classify("we").unwrap(),
            Token::Days(DayRange::single(Weekday::Wednesday))
        );
    }

    #[test]
    fn day_span() {
        let Token::Days(range) = classify("mo-fr").unwrap() else {
            panic!("expected day range");
        };
        let days: Vec<_> = range.days().collect();
        assert_eq!(
            days,
            vec![
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday
            ]
        );
    }

    #[test]
    fn day_span_same_day() {
        let Token::Days(range) = classify("sa-sa").unwrap() else {
            panic!("expected day range");
        };
        assert_eq!(range.days().collect::<Vec<_>>(), vec![Weekday::Saturday]);
    }

    #[test]
    fn whole_week_covers_seven_days() {
        assert_eq!(DayRange::whole_week().days().count(), 7);
    }

    #[test]
    fn wrapped_day_span_rejected() {
        assert_eq!(
            classify("fr-mo"),
            Err(ParseError::WrappedDayRange {
                start: Weekday::Friday,
                end: Weekday::Monday
            })
        );
    }

    #[test]
    fn time_span() {
        assert_eq!(
            classify("09:00-17:30").unwrap(),
            Token::Times(Interval::new(t("09:00"), t("17:30")).unwrap())
        );
    }

    #[test]
    fn overnight_time_span_rejected() {
        assert_eq!(
            classify("22:00-02:00"),
            Err(ParseError::OvernightInterval {
                open: t("22:00"),
                close: t("02:00")
            })
        );
    }

    #[test]
    fn malformed_tokens_unrecognized() {
        for token in [
            "garbage", "mon", "mo-", "-fr", "mofr", "mo-xx", "mo-fr-sa", "9:00-17:00", "09:00",
            "09:00-", "25:00-26:00", "09:00-17:00+", "off", "24/7",
        ] {
            assert_eq!(
                classify(token),
                Err(ParseError::UnrecognizedToken {
                    token: token.to_string()
                }),
                "token {token:?}"
            );
        }
    }
}
