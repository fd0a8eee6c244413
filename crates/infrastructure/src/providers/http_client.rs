use jobsponsored_domain::DomainError;
use std::time::Duration;

/// Pooled HTTP client shared by the upstream providers.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(timeout)
        .pool_max_idle_per_host(4)
        .user_agent(concat!("jobsponsored/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| DomainError::InvalidConfig(format!("Failed to build HTTP client: {e}")))
}
