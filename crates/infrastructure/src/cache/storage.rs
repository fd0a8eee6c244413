use super::CacheMetrics;
use dashmap::DashMap;
use jobsponsored_application::ports::{Clock, JobCacheStore};
use jobsponsored_domain::{CacheEntry, CacheKey, CacheStats, JobSearchResult};
use rustc_hash::FxBuildHasher;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;
use tracing::{debug, info};

/// In-memory job search cache.
///
/// Bounded by `max_entries`: inserting a new key into a full cache evicts
/// the entry with the oldest `stored_at`. The bound is approximate under
/// concurrent inserts. Freshness is decided by the reader.
pub struct JobCache {
    entries: DashMap<CacheKey, CacheEntry, FxBuildHasher>,
    max_entries: usize,
    clock: Arc<dyn Clock>,
    metrics: Arc<CacheMetrics>,
}

impl JobCache {
    pub fn new(max_entries: usize, clock: Arc<dyn Clock>) -> Self {
        info!(max_entries, "Initializing job search cache");

        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            max_entries: max_entries.max(1),
            clock,
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    fn evict_oldest(&self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|entry| entry.value().stored_at)
            .map(|entry| entry.key().clone());

        if let Some(key) = oldest {
            if self.entries.remove(&key).is_some() {
                CacheMetrics::incr(&self.metrics.evictions, 1);
                debug!(cache_key = %key, "Evicted oldest job search");
            }
        }
    }
}

impl JobCacheStore for JobCache {
    fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn put(&self, key: CacheKey, data: Arc<JobSearchResult>) {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.evict_oldest();
        }

        let entry = CacheEntry {
            key: key.clone(),
            data,
            stored_at: self.clock.now_millis(),
        };
        self.entries.insert(key, entry);
        CacheMetrics::incr(&self.metrics.insertions, 1);
    }

    fn remove_stored_before(&self, cutoff_ms: i64) -> usize {
        let mut removed = 0usize;
        self.entries.retain(|_, entry| {
            let keep = entry.stored_at > cutoff_ms;
            if !keep {
                removed += 1;
            }
            keep
        });

        CacheMetrics::incr(&self.metrics.expired, removed as u64);
        removed
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn record_hit(&self) {
        CacheMetrics::incr(&self.metrics.hits, 1);
    }

    fn record_miss(&self) {
        CacheMetrics::incr(&self.metrics.misses, 1);
    }

    fn stats(&self) -> CacheStats {
        let m = &self.metrics;
        CacheStats {
            total_entries: self.entries.len(),
            hits: m.hits.load(AtomicOrdering::Relaxed),
            misses: m.misses.load(AtomicOrdering::Relaxed),
            insertions: m.insertions.load(AtomicOrdering::Relaxed),
            evictions: m.evictions.load(AtomicOrdering::Relaxed),
            expired: m.expired.load(AtomicOrdering::Relaxed),
            hit_rate: m.hit_rate(),
        }
    }
}
