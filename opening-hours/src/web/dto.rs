//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Weekday, WeeklySchedule};
use crate::format::{day_hours, describe_status, to_12_hour};
use crate::status::{Moment, OpenState, Status, Transition};

/// Query for the hours endpoint.
#[derive(Debug, Deserialize)]
pub struct HoursRequest {
    /// Raw `opening_hours` value, e.g. "mo-fr 09:00-17:00"
    pub opening_hours: Option<String>,

    /// Two-letter day code (defaults to today)
    pub day: Option<String>,

    /// Time in HH:MM format (defaults to now)
    pub time: Option<String>,
}

/// Open/closed state as sent over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StateResult {
    Open,
    Closed,
    Unknown,
}

impl From<OpenState> for StateResult {
    fn from(state: OpenState) -> Self {
        match state {
            OpenState::Open => StateResult::Open,
            OpenState::Closed => StateResult::Closed,
            OpenState::Unknown => StateResult::Unknown,
        }
    }
}

/// The next opening or closing.
#[derive(Debug, Serialize)]
pub struct TransitionResult {
    /// Day name, e.g. "Monday"
    pub day: String,

    /// 24-hour time, e.g. "17:00"
    pub time: String,

    /// 12-hour time, e.g. "5:00 PM"
    pub display: String,
}

impl From<Transition> for TransitionResult {
    fn from(tr: Transition) -> Self {
        Self {
            day: tr.day.name().to_string(),
            time: tr.time.to_string(),
            display: to_12_hour(tr.time),
        }
    }
}

/// Hours for one day of the week.
#[derive(Debug, Serialize)]
pub struct DayHoursResult {
    /// Day name
    pub day: String,

    /// Opening time (HH:MM), absent when closed
    pub open: Option<String>,

    /// Closing time (HH:MM), absent when closed
    pub close: Option<String>,

    /// Human-readable hours, e.g. "9:00 AM - 5:00 PM" or "closed"
    pub display: String,
}

/// Response for the hours endpoint.
#[derive(Debug, Serialize)]
pub struct HoursResponse {
    /// Current state
    pub state: StateResult,

    /// One-line status, e.g. "Open until 5:00 PM"
    pub summary: String,

    /// Next change of state, if known
    pub transition: Option<TransitionResult>,

    /// Per-day hours, Monday first (empty when no hours are known)
    pub week: Vec<DayHoursResult>,

    /// Why hours are unknown, when they are
    pub note: Option<String>,
}

impl HoursResponse {
    /// Build the response for a parsed schedule.
    pub fn from_schedule(schedule: &WeeklySchedule, status: &Status, now: Moment) -> Self {
        let week = if schedule.is_seasonal() {
            Vec::new()
        } else {
            Weekday::ALL
                .into_iter()
                .map(|day| {
                    let interval = schedule.interval_for(day);
                    DayHoursResult {
                        day: day.name().to_string(),
                        open: interval.map(|iv| iv.open().to_string()),
                        close: interval.map(|iv| iv.close().to_string()),
                        display: day_hours(schedule, day),
                    }
                })
                .collect()
        };

        Self {
            state: status.state.into(),
            summary: describe_status(status, now),
            transition: status.transition.map(TransitionResult::from),
            week,
            note: schedule
                .is_seasonal()
                .then(|| "hours vary by season".to_string()),
        }
    }

    /// Build the response when the text held no schedule information.
    pub fn unknown(note: String, now: Moment) -> Self {
        Self {
            state: StateResult::Unknown,
            summary: describe_status(&Status::unknown(), now),
            transition: None,
            week: Vec::new(),
            note: Some(note),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
