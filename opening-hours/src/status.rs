//! Open/closed evaluation.
//!
//! Answers "is it open right now, and until when?" for a weekly schedule
//! and a query instant given as a day of the week plus a time of day.

use chrono::{Datelike, Timelike};

use crate::domain::{TimeOfDay, Weekday, WeeklySchedule};
use crate::parser::ParseError;

/// The instant a schedule is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment {
    pub day: Weekday,
    pub time: TimeOfDay,
}

impl Moment {
    pub fn new(day: Weekday, time: TimeOfDay) -> Self {
        Self { day, time }
    }

    /// Take the weekday and wall-clock time from any chrono date-time.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use opening_hours::domain::Weekday;
    /// use opening_hours::status::Moment;
    ///
    /// // 2024-03-15 was a Friday
    /// let dt = NaiveDate::from_ymd_opt(2024, 3, 15)
    ///     .unwrap()
    ///     .and_hms_opt(14, 30, 10)
    ///     .unwrap();
    /// let now = Moment::from_datetime(&dt);
    /// assert_eq!(now.day, Weekday::Friday);
    /// assert_eq!(now.time.to_string(), "14:30");
    /// ```
    pub fn from_datetime<T: Datelike + Timelike>(dt: &T) -> Self {
        // chrono keeps hour < 24 and minute < 60
        let time =
            TimeOfDay::new(dt.hour() as u8, dt.minute() as u8).unwrap_or(TimeOfDay::MIDNIGHT);
        Self {
            day: dt.weekday().into(),
            time,
        }
    }
}

/// Whether the facility is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenState {
    Open,
    Closed,
    /// The schedule can't tell (seasonal, or no hours known).
    Unknown,
}

/// The next change of state: closing time when open, opening time when
/// closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub day: Weekday,
    pub time: TimeOfDay,
}

/// Result of evaluating a schedule at a moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub state: OpenState,
    pub transition: Option<Transition>,
}

impl Status {
    fn open_until(day: Weekday, time: TimeOfDay) -> Self {
        Self {
            state: OpenState::Open,
            transition: Some(Transition { day, time }),
        }
    }

    fn closed_until(transition: Option<Transition>) -> Self {
        Self {
            state: OpenState::Closed,
            transition,
        }
    }

    /// Open with no scheduled closing.
    pub fn always_open() -> Self {
        Self {
            state: OpenState::Open,
            transition: None,
        }
    }

    pub fn unknown() -> Self {
        Self {
            state: OpenState::Unknown,
            transition: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == OpenState::Open
    }

    pub fn transition_day(&self) -> Option<Weekday> {
        self.transition.map(|t| t.day)
    }

    pub fn transition_time(&self) -> Option<TimeOfDay> {
        self.transition.map(|t| t.time)
    }
}

/// Evaluate `schedule` at `now`.
///
/// Interval ends are inclusive: at exactly the opening or the closing
/// minute the facility counts as open.
///
/// # Examples
///
/// ```
/// use opening_hours::domain::{TimeOfDay, Weekday};
/// use opening_hours::parser::parse;
/// use opening_hours::status::{Moment, OpenState, evaluate};
///
/// let schedule = parse(Some("mo-fr 09:00-17:00")).unwrap();
///
/// let noon = Moment::new(Weekday::Monday, TimeOfDay::new(12, 0).unwrap());
/// let status = evaluate(&schedule, noon);
/// assert_eq!(status.state, OpenState::Open);
/// assert_eq!(status.transition_time(), TimeOfDay::new(17, 0).ok());
///
/// let friday_night = Moment::new(Weekday::Friday, TimeOfDay::new(18, 0).unwrap());
/// let status = evaluate(&schedule, friday_night);
/// assert_eq!(status.state, OpenState::Closed);
/// assert_eq!(status.transition_day(), Some(Weekday::Monday));
/// ```
pub fn evaluate(schedule: &WeeklySchedule, now: Moment) -> Status {
    match schedule {
        WeeklySchedule::AlwaysOpen => Status::always_open(),
        WeeklySchedule::Seasonal => Status::unknown(),
        WeeklySchedule::Daily(_) => evaluate_daily(schedule, now),
    }
}

/// Evaluate a parse result: any error, sentinel or failure, is `Unknown`.
pub fn evaluate_parsed(parsed: &Result<WeeklySchedule, ParseError>, now: Moment) -> Status {
    match parsed {
        Ok(schedule) => evaluate(schedule, now),
        Err(_) => Status::unknown(),
    }
}

fn evaluate_daily(schedule: &WeeklySchedule, now: Moment) -> Status {
    match schedule.interval_for(now.day) {
        Some(today) if today.contains(now.time) => Status::open_until(now.day, today.close()),
        Some(today) if now.time < today.open() => Status::closed_until(Some(Transition {
            day: now.day,
            time: today.open(),
        })),
        _ => Status::closed_until(next_opening_after(schedule, now.day)),
    }
}

/// The first opening on the days after `today`, looking at most a week
/// ahead. A week ahead is `today` again, so a place open one day a week
/// reports next week's opening once today's has passed.
fn next_opening_after(schedule: &WeeklySchedule, today: Weekday) -> Option<Transition> {
    (1..=7).find_map(|offset| {
        let day = today.add_days(offset);
        schedule
            .interval_for(day)
            .map(|iv| Transition { day, time: iv.open() })
    })
}
