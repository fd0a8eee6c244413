#![allow(dead_code)]

use jobsponsored_application::ports::Clock;
use jobsponsored_domain::{config::GeolocationConfig, config::JobProviderConfig, JobQuery, Tier};
use std::sync::atomic::{AtomicI64, Ordering};

pub struct ManualClock {
    now_ms: AtomicI64,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self {
            now_ms: AtomicI64::new(start_ms),
        }
    }

    pub fn advance(&self, ms: i64) {
        self.now_ms.fetch_add(ms, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now_ms.load(Ordering::Relaxed)
    }
}

pub fn key(keyword: &str) -> jobsponsored_domain::CacheKey {
    JobQuery::new(keyword, "ca", Tier::Free).cache_key()
}

pub fn jobs_config(server_uri: &str) -> JobProviderConfig {
    JobProviderConfig {
        base_url: format!("{server_uri}/v1/api/jobs"),
        app_id: "test-app".to_string(),
        app_key: "test-key".to_string(),
        results_per_page: 50,
    }
}

pub fn geolocation_config(server_uri: &str) -> GeolocationConfig {
    GeolocationConfig {
        base_url: format!("{server_uri}/ipgeo"),
        api_key: "geo-key".to_string(),
    }
}
