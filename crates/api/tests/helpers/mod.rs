#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Response;
use axum::Router;
use http_body_util::BodyExt;
use jobsponsored_api::{create_app, AppState};
use jobsponsored_application::ports::{Clock, IpReputationProvider, JobProvider};
use jobsponsored_application::use_cases::{
    CheckVpnUseCase, GetCacheStatsUseCase, GetGovtLinksUseCase, SearchJobsUseCase,
};
use jobsponsored_domain::{DomainError, IpSecurity, Job, JobQuery};
use jobsponsored_infrastructure::JobCache;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

pub fn make_job(id: u32, title: &str, description: &str) -> Job {
    Job::new(json!({
        "id": id.to_string(),
        "title": title,
        "description": { "text": description },
    }))
}

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

pub struct StubJobProvider {
    jobs: Vec<Job>,
    calls: AtomicU64,
    fail: AtomicBool,
    last_query: Mutex<Option<JobQuery>>,
}

impl StubJobProvider {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs,
            calls: AtomicU64::new(0),
            fail: AtomicBool::new(false),
            last_query: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        let provider = Self::new(Vec::new());
        provider.fail.store(true, Ordering::Relaxed);
        provider
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn last_query(&self) -> Option<JobQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobProvider for StubJobProvider {
    async fn search(&self, query: &JobQuery) -> Result<Vec<Job>, DomainError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        *self.last_query.lock().unwrap() = Some(query.clone());
        if self.fail.load(Ordering::Relaxed) {
            return Err(DomainError::UpstreamUnavailable("status 503".into()));
        }
        Ok(self.jobs.clone())
    }
}

pub struct StubIpReputation {
    security: IpSecurity,
    fail: bool,
    last_ip: Mutex<Option<String>>,
}

impl StubIpReputation {
    pub fn clean() -> Self {
        Self::returning(IpSecurity::default())
    }

    pub fn returning(security: IpSecurity) -> Self {
        Self {
            security,
            fail: false,
            last_ip: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            security: IpSecurity::default(),
            fail: true,
            last_ip: Mutex::new(None),
        }
    }

    pub fn last_ip(&self) -> Option<String> {
        self.last_ip.lock().unwrap().clone()
    }
}

#[async_trait]
impl IpReputationProvider for StubIpReputation {
    async fn lookup_security(&self, ip: &str) -> Result<IpSecurity, DomainError> {
        *self.last_ip.lock().unwrap() = Some(ip.to_string());
        if self.fail {
            return Err(DomainError::ReputationCheckFailed("timeout".into()));
        }
        Ok(self.security)
    }
}

pub struct TestApp {
    pub router: Router,
    pub jobs: Arc<StubJobProvider>,
    pub reputation: Arc<StubIpReputation>,
    pub clock: Arc<ManualClock>,
    pub cache: Arc<JobCache>,
}

pub fn build_app(
    jobs: StubJobProvider,
    reputation: StubIpReputation,
    public_dir: &Path,
) -> TestApp {
    let jobs = Arc::new(jobs);
    let reputation = Arc::new(reputation);
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    let cache = Arc::new(JobCache::new(100, clock.clone()));

    let state = AppState {
        search_jobs: Arc::new(SearchJobsUseCase::new(
            jobs.clone(),
            cache.clone(),
            clock.clone(),
        )),
        check_vpn: Arc::new(CheckVpnUseCase::new(reputation.clone())),
        get_govt_links: Arc::new(GetGovtLinksUseCase::new()),
        get_cache_stats: Arc::new(GetCacheStatsUseCase::new(cache.clone())),
    };

    TestApp {
        router: create_app(state, public_dir),
        jobs,
        reputation,
        clock,
        cache,
    }
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}
