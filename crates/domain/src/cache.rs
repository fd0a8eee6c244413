use crate::job::JobSearchResult;
use crate::job_query::CacheKey;
use std::sync::Arc;

/// Age below which a cached search result is served as-is (1 hour).
pub const FRESHNESS_WINDOW_MS: i64 = 3_600_000;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub key: CacheKey,
    pub data: Arc<JobSearchResult>,
    /// Milliseconds since the UNIX epoch.
    pub stored_at: i64,
}

impl CacheEntry {
    pub fn age_ms(&self, now_ms: i64) -> i64 {
        now_ms.saturating_sub(self.stored_at)
    }

    pub fn is_fresh(&self, now_ms: i64, window_ms: i64) -> bool {
        self.age_ms(now_ms) < window_ms
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CacheStats {
    pub total_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub evictions: u64,
    pub expired: u64,
    pub hit_rate: f64,
}
