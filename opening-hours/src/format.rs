//! Human-readable rendering of times, statuses and weekly hours.

use crate::domain::{TimeOfDay, Weekday, WeeklySchedule};
use crate::status::{Moment, OpenState, Status};

/// Render a time on the 12-hour clock.
///
/// Hours 0-11 get "AM" and are shown as-is, so midnight is "0:00 AM"
/// rather than "12:00 AM". Hours 12-23 have 12 subtracted and get "PM".
///
/// ```
/// use opening_hours::domain::TimeOfDay;
/// use opening_hours::format::to_12_hour;
///
/// assert_eq!(to_12_hour(TimeOfDay::new(9, 5).unwrap()), "9:05 AM");
/// assert_eq!(to_12_hour(TimeOfDay::new(17, 0).unwrap()), "5:00 PM");
/// assert_eq!(to_12_hour(TimeOfDay::new(0, 30).unwrap()), "0:30 AM");
/// ```
pub fn to_12_hour(time: TimeOfDay) -> String {
    let (hour, suffix) = if time.hour() < 12 {
        (time.hour(), "AM")
    } else {
        (time.hour() - 12, "PM")
    };
    format!("{}:{:02} {}", hour, time.minute(), suffix)
}

/// One-line status, e.g. "Open until 5:00 PM" or "Closed until Monday 9:00 AM".
///
/// `now` decides whether a closed place reopens later today, in which case
/// the day is left out.
pub fn describe_status(status: &Status, now: Moment) -> String {
    match (status.state, status.transition) {
        (OpenState::Open, Some(tr)) => format!("Open until {}", to_12_hour(tr.time)),
        (OpenState::Open, None) => "Open 24/7".to_string(),
        (OpenState::Closed, Some(tr)) if tr.day == now.day && tr.time > now.time => {
            format!("Closed until {}", to_12_hour(tr.time))
        }
        (OpenState::Closed, Some(tr)) => {
            format!("Closed until {} {}", tr.day.name(), to_12_hour(tr.time))
        }
        (OpenState::Closed, None) => "Closed".to_string(),
        (OpenState::Unknown, _) => "Hours unknown".to_string(),
    }
}

/// One line per day, Monday first: "Monday  9:00 AM - 5:00 PM" or
/// "Sunday  closed".
///
/// A seasonal schedule has no per-day hours and yields no lines.
pub fn weekly_lines(schedule: &WeeklySchedule) -> Vec<String> {
    if schedule.is_seasonal() {
        return Vec::new();
    }

    Weekday::ALL
        .into_iter()
        .map(|day| format!("{}  {}", day.name(), day_hours(schedule, day)))
        .collect()
}

/// The hours for one day: "9:00 AM - 5:00 PM", "closed", "open 24 hours",
/// or "varies" for a seasonal schedule.
pub fn day_hours(schedule: &WeeklySchedule, day: Weekday) -> String {
    match schedule.interval_for(day) {
        Some(iv) => format!("{} - {}", to_12_hour(iv.open()), to_12_hour(iv.close())),
        None if schedule.is_always_open() => "open 24 hours".to_string(),
        None if schedule.is_seasonal() => "varies".to_string(),
        None => "closed".to_string(),
    }
}

/// The "Hours" entry of a place panel: the status line, a carriage
/// return, then the weekly lines separated by newlines.
pub fn place_info_hours(schedule: &WeeklySchedule, status: &Status, now: Moment) -> String {
    format!(
        "{}\r{}",
        describe_status(status, now),
        weekly_lines(schedule).join("\n")
    )
}
