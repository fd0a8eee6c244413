use serde::{Deserialize, Serialize};

/// Third-party HTTP providers consumed by the proxy.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default)]
    pub jobs: JobProviderConfig,

    #[serde(default)]
    pub geolocation: GeolocationConfig,

    /// Request timeout shared by both providers, in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Adzuna job search credentials and endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JobProviderConfig {
    #[serde(default = "default_jobs_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub app_id: String,

    #[serde(default)]
    pub app_key: String,

    /// Page size requested from the provider (default: 50)
    #[serde(default = "default_results_per_page")]
    pub results_per_page: u32,
}

/// ipgeolocation.io credentials and endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeolocationConfig {
    #[serde(default = "default_geolocation_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub api_key: String,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_jobs_base_url() -> String {
    "https://api.adzuna.com/v1/api/jobs".to_string()
}

fn default_results_per_page() -> u32 {
    50
}

fn default_geolocation_base_url() -> String {
    "https://api.ipgeolocation.io/ipgeo".to_string()
}

impl Default for JobProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_jobs_base_url(),
            app_id: String::new(),
            app_key: String::new(),
            results_per_page: default_results_per_page(),
        }
    }
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            base_url: default_geolocation_base_url(),
            api_key: String::new(),
        }
    }
}
