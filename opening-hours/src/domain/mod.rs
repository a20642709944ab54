//! Domain types for opening hours.
//!
//! These types enforce their invariants at construction time: a
//! `TimeOfDay` is always a valid wall-clock time and an `Interval` never
//! closes before it opens.

mod interval;
mod schedule;
mod time;
mod weekday;

pub use interval::{Interval, InvalidInterval};
pub use schedule::WeeklySchedule;
pub use time::{TimeError, TimeOfDay};
pub use weekday::{InvalidWeekday, Weekday};
