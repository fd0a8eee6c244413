use jobsponsored_domain::{CacheEntry, CacheKey, CacheStats, JobSearchResult};
use std::sync::Arc;

/// Keyed store of search results.
///
/// Freshness is the caller's concern: `get` returns entries of any age.
pub trait JobCacheStore: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<CacheEntry>;

    /// Stamps the entry with the current time, replacing any previous one.
    fn put(&self, key: CacheKey, data: Arc<JobSearchResult>);

    /// Removes entries stored at or before `cutoff_ms`, returning how many.
    fn remove_stored_before(&self, cutoff_ms: i64) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record_hit(&self) {}

    fn record_miss(&self) {}

    fn stats(&self) -> CacheStats;
}
