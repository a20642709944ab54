//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Local;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::domain::{TimeOfDay, Weekday};
use crate::status::{Moment, evaluate};

use super::dto::*;
use super::state::AppState;
use super::templates::HoursTemplate;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/hours", get(hours))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Resolve the query instant, defaulting each part to local now.
fn query_moment(req: &HoursRequest) -> Result<Moment, AppError> {
    let now = Moment::from_datetime(&Local::now());

    let day = match req.day.as_deref() {
        Some(code) => Weekday::from_code(code).map_err(|e| AppError::BadRequest {
            message: format!("Invalid day {code:?}: {e}"),
        })?,
        None => now.day,
    };

    let time = match req.time.as_deref() {
        Some(hhmm) => TimeOfDay::parse_hhmm(hhmm).map_err(|e| AppError::BadRequest {
            message: format!("Invalid time {hhmm:?}: {e}"),
        })?,
        None => now.time,
    };

    Ok(Moment::new(day, time))
}

/// Evaluate an `opening_hours` value at a moment.
///
/// Returns JSON by default, or the hours panel fragment for HTML clients.
async fn hours(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<HoursRequest>,
) -> Result<Response, AppError> {
    let now = query_moment(&req)?;
    let text = req.opening_hours.as_deref().unwrap_or_default();

    let parsed = state.cache.get_or_parse(text).await;
    let resp = match parsed.as_ref() {
        Ok(schedule) => HoursResponse::from_schedule(schedule, &evaluate(schedule, now), now),
        Err(e) if e.is_sentinel() => {
            debug!(text, reason = %e, "no hours in opening_hours value");
            HoursResponse::unknown(e.to_string(), now)
        }
        Err(e) => {
            return Err(AppError::Unprocessable {
                message: format!("Unsupported opening_hours {text:?}: {e}"),
            });
        }
    };

    if accepts_html(&headers) {
        let html = HoursTemplate::from_response(&resp)
            .render()
            .map_err(|e| AppError::Internal {
                message: format!("Template error: {}", e),
            })?;
        Ok(Html(html).into_response())
    } else {
        Ok(Json(resp).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
