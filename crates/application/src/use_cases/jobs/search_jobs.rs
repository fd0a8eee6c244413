use jobsponsored_domain::{job_filter, DomainError, JobQuery, JobSearchResult, FRESHNESS_WINDOW_MS};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::{Clock, JobCacheStore, JobProvider};

/// Cached, filtered job search.
///
/// A fresh cache entry is returned verbatim. On a miss or a stale entry the
/// provider is queried once, the result is filtered for the tier and stored.
/// Concurrent misses for one key may each reach the provider; the last
/// write wins.
pub struct SearchJobsUseCase {
    provider: Arc<dyn JobProvider>,
    cache: Arc<dyn JobCacheStore>,
    clock: Arc<dyn Clock>,
    freshness_window_ms: i64,
}

impl SearchJobsUseCase {
    pub fn new(
        provider: Arc<dyn JobProvider>,
        cache: Arc<dyn JobCacheStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            provider,
            cache,
            clock,
            freshness_window_ms: FRESHNESS_WINDOW_MS,
        }
    }

    pub fn with_freshness_window(mut self, window_ms: i64) -> Self {
        self.freshness_window_ms = window_ms;
        self
    }

    #[instrument(
        skip(self, query),
        fields(keyword = %query.keyword, country = %query.country, tier = ?query.tier)
    )]
    pub async fn execute(&self, query: JobQuery) -> Result<Arc<JobSearchResult>, DomainError> {
        let key = query.cache_key();

        if let Some(entry) = self.cache.get(&key) {
            let now = self.clock.now_millis();
            if entry.is_fresh(now, self.freshness_window_ms) {
                self.cache.record_hit();
                debug!(cache_key = %key, age_ms = entry.age_ms(now), "Serving cached job search");
                return Ok(entry.data);
            }
            debug!(cache_key = %key, age_ms = entry.age_ms(now), "Cached job search is stale");
        }
        self.cache.record_miss();

        let upstream_jobs = self.provider.search(&query).await?;
        let upstream_count = upstream_jobs.len();

        let jobs = job_filter::apply(upstream_jobs, query.tier);
        let result = JobSearchResult::new(jobs).into_shared();
        self.cache.put(key.clone(), Arc::clone(&result));

        info!(
            cache_key = %key,
            upstream = upstream_count,
            returned = result.total,
            "Job search refreshed"
        );

        Ok(result)
    }
}
