use async_trait::async_trait;
use jobsponsored_application::ports::JobProvider;
use jobsponsored_domain::config::JobProviderConfig;
use jobsponsored_domain::{DomainError, Job, JobQuery};
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

/// Search endpoint response; only `results` is read.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Option<Vec<Job>>,
}

/// Adzuna job search client (`/{country}/search/1`).
pub struct AdzunaJobProvider {
    client: Client,
    base_url: String,
    app_id: String,
    app_key: String,
    results_per_page: String,
}

impl AdzunaJobProvider {
    pub fn new(client: Client, config: &JobProviderConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
            results_per_page: config.results_per_page.to_string(),
        }
    }

    fn search_url(&self, country: &str) -> Result<Url, DomainError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            DomainError::InvalidConfig(format!("Invalid job provider URL {}: {e}", self.base_url))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                DomainError::InvalidConfig(format!(
                    "Job provider URL {} cannot be a base",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend([country, "search", "1"]);

        Ok(url)
    }
}

#[async_trait]
impl JobProvider for AdzunaJobProvider {
    async fn search(&self, query: &JobQuery) -> Result<Vec<Job>, DomainError> {
        let url = self.search_url(&query.country)?;

        debug!(url = %url, keyword = %query.keyword, "Querying job provider");

        let response = self
            .client
            .get(url)
            .query(&[
                ("app_id", self.app_id.as_str()),
                ("app_key", self.app_key.as_str()),
                ("results_per_page", self.results_per_page.as_str()),
                ("what", &*query.keyword),
                ("content-type", "application/json"),
            ])
            .send()
            .await
            .map_err(|e| {
                DomainError::UpstreamUnavailable(format!("Job provider request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UpstreamUnavailable(format!(
                "Job provider returned HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            DomainError::InvalidUpstreamResponse(format!("Job provider body: {e}"))
        })?;

        let jobs = body.results.unwrap_or_default();
        debug!(count = jobs.len(), "Job provider response received");

        Ok(jobs)
    }
}
