#![allow(dead_code)]

use async_trait::async_trait;
use jobsponsored_application::ports::{Clock, IpReputationProvider, JobCacheStore, JobProvider};
use jobsponsored_domain::{
    CacheEntry, CacheKey, CacheStats, DomainError, IpSecurity, Job, JobQuery, JobSearchResult,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// Job builders
// ============================================================================

pub fn make_job(id: u32, title: &str, description: &str) -> Job {
    Job::new(json!({
        "id": id.to_string(),
        "title": title,
        "description": { "text": description },
        "redirect_url": format!("https://jobs.example/{id}"),
    }))
}

pub fn make_visa_jobs(count: u32) -> Vec<Job> {
    (0..count)
        .map(|i| make_job(i, &format!("Job {i}"), "LMIA approved"))
        .collect()
}

// ============================================================================
// Mock JobProvider
// ============================================================================

pub struct MockJobProvider {
    jobs: Mutex<Vec<Job>>,
    call_count: AtomicU64,
    should_fail: AtomicBool,
    last_query: Mutex<Option<JobQuery>>,
}

impl MockJobProvider {
    pub fn new() -> Self {
        Self::with_jobs(Vec::new())
    }

    pub fn with_jobs(jobs: Vec<Job>) -> Self {
        Self {
            jobs: Mutex::new(jobs),
            call_count: AtomicU64::new(0),
            should_fail: AtomicBool::new(false),
            last_query: Mutex::new(None),
        }
    }

    pub fn set_jobs(&self, jobs: Vec<Job>) {
        *self.jobs.lock().unwrap() = jobs;
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn last_query(&self) -> Option<JobQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobProvider for MockJobProvider {
    async fn search(&self, query: &JobQuery) -> Result<Vec<Job>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_query.lock().unwrap() = Some(query.clone());
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::UpstreamUnavailable(
                "connection refused".to_string(),
            ));
        }
        Ok(self.jobs.lock().unwrap().clone())
    }
}

// ============================================================================
// Mock IpReputationProvider
// ============================================================================

pub struct MockIpReputationProvider {
    responses: Mutex<HashMap<String, IpSecurity>>,
    call_count: AtomicU64,
    should_fail: AtomicBool,
}

impl MockIpReputationProvider {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            call_count: AtomicU64::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_response(&self, ip: &str, security: IpSecurity) {
        self.responses
            .lock()
            .unwrap()
            .insert(ip.to_string(), security);
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl IpReputationProvider for MockIpReputationProvider {
    async fn lookup_security(&self, ip: &str) -> Result<IpSecurity, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::ReputationCheckFailed("timeout".to_string()));
        }
        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(ip)
            .copied()
            .unwrap_or_default())
    }
}

// ============================================================================
// Manual clock
// ============================================================================

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

// ============================================================================
// In-memory JobCacheStore
// ============================================================================

pub struct InMemoryJobCache {
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
    clock: Arc<dyn Clock>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl InMemoryJobCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }
}

impl JobCacheStore for InMemoryJobCache {
    fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn put(&self, key: CacheKey, data: Arc<JobSearchResult>) {
        let entry = CacheEntry {
            key: key.clone(),
            data,
            stored_at: self.clock.now_millis(),
        };
        self.entries.lock().unwrap().insert(key, entry);
    }

    fn remove_stored_before(&self, cutoff_ms: i64) -> usize {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|_, e| e.stored_at > cutoff_ms);
        before - entries.len()
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            ..CacheStats::default()
        }
    }
}
