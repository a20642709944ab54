//! Web layer for the opening hours service.
//!
//! Provides HTTP endpoints for evaluating `opening_hours` values.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
