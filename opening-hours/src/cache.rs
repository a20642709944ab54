//! Cache of parse results.
//!
//! The same `opening_hours` value tends to be looked up over and over
//! (every visit to a place panel re-sends it). Parse results are cached by
//! their trimmed text, failures included, so a bad value is not re-parsed
//! on every request either.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::WeeklySchedule;
use crate::parser::{ParseError, parse};

/// A cached parse outcome, shared between requests.
pub type ParseEntry = Arc<Result<WeeklySchedule, ParseError>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Parse results keyed by the trimmed `opening_hours` text.
#[derive(Clone)]
pub struct ScheduleCache {
    entries: MokaCache<String, ParseEntry>,
}

impl ScheduleCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let entries = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { entries }
    }

    /// Return the cached parse of `text`, parsing and caching on a miss.
    pub async fn get_or_parse(&self, text: &str) -> ParseEntry {
        let key = text.trim().to_string();
        self.entries
            .get_with(key, async {
                trace!(text, "parsing opening_hours (cache miss)");
                Arc::new(parse(Some(text)))
            })
            .await
    }

    /// Number of cached entries (approximate until pending work is run).
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }
}
