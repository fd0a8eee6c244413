use jobsponsored_domain::CacheStats;
use std::sync::Arc;

use crate::ports::JobCacheStore;

pub struct GetCacheStatsUseCase {
    cache: Arc<dyn JobCacheStore>,
}

impl GetCacheStatsUseCase {
    pub fn new(cache: Arc<dyn JobCacheStore>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> CacheStats {
        self.cache.stats()
    }
}
