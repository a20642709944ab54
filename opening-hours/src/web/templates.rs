//! Askama templates for the web frontend.

use askama::Template;

use super::dto::HoursResponse;

/// Hours panel fragment, the HTML form of `HoursResponse`.
#[derive(Template)]
#[template(path = "hours.html")]
pub struct HoursTemplate {
    /// CSS modifier: "open", "closed" or "unknown"
    pub state: &'static str,
    pub summary: String,
    pub note: Option<String>,
    pub days: Vec<DayView>,
}

/// One row of the weekly table.
#[derive(Debug, Clone)]
pub struct DayView {
    pub day: String,
    pub hours: String,
}

impl HoursTemplate {
    /// Create from the JSON response so both renderings agree.
    pub fn from_response(resp: &HoursResponse) -> Self {
        use super::dto::StateResult;

        let state = match resp.state {
            StateResult::Open => "open",
            StateResult::Closed => "closed",
            StateResult::Unknown => "unknown",
        };

        Self {
            state,
            summary: resp.summary.clone(),
            note: resp.note.clone(),
            days: resp
                .week
                .iter()
                .map(|d| DayView {
                    day: d.day.clone(),
                    hours: d.display.clone(),
                })
                .collect(),
        }
    }
}
