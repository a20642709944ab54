//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, ScheduleCache};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Parse results keyed by `opening_hours` text
    pub cache: Arc<ScheduleCache>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(cache_config: &CacheConfig) -> Self {
        Self {
            cache: Arc::new(ScheduleCache::new(cache_config)),
        }
    }
}
