use jobsponsored_domain::FRESHNESS_WINDOW_MS;
use std::sync::Arc;
use tracing::debug;

use crate::ports::{Clock, JobCacheStore};

/// Drops entries that can no longer be served, bounding cache growth.
pub struct SweepExpiredCacheUseCase {
    cache: Arc<dyn JobCacheStore>,
    clock: Arc<dyn Clock>,
    max_age_ms: i64,
}

impl SweepExpiredCacheUseCase {
    pub fn new(cache: Arc<dyn JobCacheStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            cache,
            clock,
            max_age_ms: FRESHNESS_WINDOW_MS,
        }
    }

    pub fn with_max_age(mut self, max_age_ms: i64) -> Self {
        self.max_age_ms = max_age_ms;
        self
    }

    pub fn execute(&self) -> usize {
        let cutoff = self.clock.now_millis().saturating_sub(self.max_age_ms);
        let removed = self.cache.remove_stored_before(cutoff);

        debug!(
            removed,
            remaining = self.cache.len(),
            "Expired job searches swept"
        );

        removed
    }
}
