use jobsponsored_api::AppState;
use jobsponsored_application::use_cases::{
    CheckVpnUseCase, GetCacheStatsUseCase, GetGovtLinksUseCase, SearchJobsUseCase,
    SweepExpiredCacheUseCase,
};
use jobsponsored_domain::Config;
use jobsponsored_infrastructure::{
    build_http_client, AdzunaJobProvider, IpGeolocationClient, JobCache, SystemClock,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Wired application graph: HTTP state plus the handles background jobs need.
pub struct Services {
    pub state: AppState,
    pub sweep_cache: Arc<SweepExpiredCacheUseCase>,
}

impl Services {
    pub fn build(config: &Config) -> anyhow::Result<Self> {
        let http = build_http_client(Duration::from_secs(config.upstream.timeout_secs))?;
        let clock = Arc::new(SystemClock);
        let cache = Arc::new(JobCache::new(config.cache.max_entries, clock.clone()));

        let jobs = Arc::new(AdzunaJobProvider::new(http.clone(), &config.upstream.jobs));
        let reputation = Arc::new(IpGeolocationClient::new(http, &config.upstream.geolocation));

        let freshness_ms = config.cache.ttl_ms();
        let state = AppState {
            search_jobs: Arc::new(
                SearchJobsUseCase::new(jobs, cache.clone(), clock.clone())
                    .with_freshness_window(freshness_ms),
            ),
            check_vpn: Arc::new(CheckVpnUseCase::new(reputation)),
            get_govt_links: Arc::new(GetGovtLinksUseCase::new()),
            get_cache_stats: Arc::new(GetCacheStatsUseCase::new(cache.clone())),
        };
        let sweep_cache =
            Arc::new(SweepExpiredCacheUseCase::new(cache, clock).with_max_age(freshness_ms));

        info!(
            max_entries = config.cache.max_entries,
            freshness_ms, "Services initialized"
        );

        Ok(Self { state, sweep_cache })
    }
}
