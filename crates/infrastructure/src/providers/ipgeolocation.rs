use async_trait::async_trait;
use jobsponsored_application::ports::IpReputationProvider;
use jobsponsored_domain::config::GeolocationConfig;
use jobsponsored_domain::{DomainError, IpSecurity};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    security: Option<IpSecurity>,
}

/// ipgeolocation.io lookup restricted to the `security` field set.
pub struct IpGeolocationClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl IpGeolocationClient {
    pub fn new(client: Client, config: &GeolocationConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl IpReputationProvider for IpGeolocationClient {
    async fn lookup_security(&self, ip: &str) -> Result<IpSecurity, DomainError> {
        debug!(ip = %ip, "Looking up IP security");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("ip", ip),
                ("fields", "security"),
            ])
            .send()
            .await
            .map_err(|e| DomainError::ReputationCheckFailed(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::ReputationCheckFailed(format!(
                "geolocation provider returned HTTP {}",
                status.as_u16()
            )));
        }

        let body: LookupResponse = response
            .json()
            .await
            .map_err(|e| DomainError::ReputationCheckFailed(format!("malformed body: {e}")))?;

        Ok(body.security.unwrap_or_default())
    }
}
