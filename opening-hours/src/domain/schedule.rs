//! Weekly schedule model.

use super::{Interval, Weekday};

/// A parsed weekly schedule.
///
/// Built once from an `opening_hours` value and never mutated afterwards,
/// so it can be shared freely between evaluations.
///
/// # Examples
///
/// ```
/// use opening_hours::domain::{Interval, TimeOfDay, Weekday, WeeklySchedule};
///
/// let iv = Interval::new(
///     TimeOfDay::new(9, 0).unwrap(),
///     TimeOfDay::new(17, 0).unwrap(),
/// )
/// .unwrap();
///
/// let schedule = WeeklySchedule::closed().with_interval(Weekday::Monday, Some(iv));
/// assert_eq!(schedule.interval_for(Weekday::Monday), Some(iv));
/// assert_eq!(schedule.interval_for(Weekday::Tuesday), None);
/// assert!(!schedule.is_always_open());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeeklySchedule {
    /// Open around the clock ("24/7").
    AlwaysOpen,

    /// Varies through the year; hours not known ("seasonal").
    Seasonal,

    /// At most one interval per day, indexed by `Weekday::index`.
    /// `None` means closed that day.
    Daily([Option<Interval>; 7]),
}

impl WeeklySchedule {
    /// A daily schedule with every day closed.
    pub fn closed() -> Self {
        WeeklySchedule::Daily([None; 7])
    }

    /// Returns a copy with `day` set to `interval`.
    ///
    /// `AlwaysOpen` and `Seasonal` are returned unchanged.
    pub fn with_interval(self, day: Weekday, interval: Option<Interval>) -> Self {
        match self {
            WeeklySchedule::Daily(mut days) => {
                days[day.index() as usize] = interval;
                WeeklySchedule::Daily(days)
            }
            other => other,
        }
    }

    /// The interval for `day`, or `None` when closed or not a daily schedule.
    pub fn interval_for(&self, day: Weekday) -> Option<Interval> {
        match self {
            WeeklySchedule::Daily(days) => days[day.index() as usize],
            WeeklySchedule::AlwaysOpen | WeeklySchedule::Seasonal => None,
        }
    }

    pub fn is_always_open(&self) -> bool {
        matches!(self, WeeklySchedule::AlwaysOpen)
    }

    pub fn is_seasonal(&self) -> bool {
        matches!(self, WeeklySchedule::Seasonal)
    }

    /// Whether any day of a daily schedule has an interval.
    pub fn has_any_interval(&self) -> bool {
        match self {
            WeeklySchedule::Daily(days) => days.iter().any(Option::is_some),
            WeeklySchedule::AlwaysOpen | WeeklySchedule::Seasonal => false,
        }
    }

    /// Iterate `(day, interval)` pairs, Monday first.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, Option<Interval>)> + '_ {
        Weekday::ALL
            .into_iter()
            .map(move |day| (day, self.interval_for(day)))
    }
}
