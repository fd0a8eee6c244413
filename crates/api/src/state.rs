use jobsponsored_application::use_cases::{
    CheckVpnUseCase, GetCacheStatsUseCase, GetGovtLinksUseCase, SearchJobsUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub search_jobs: Arc<SearchJobsUseCase>,
    pub check_vpn: Arc<CheckVpnUseCase>,
    pub get_govt_links: Arc<GetGovtLinksUseCase>,
    pub get_cache_stats: Arc<GetCacheStatsUseCase>,
}
