use async_trait::async_trait;
use jobsponsored_domain::{DomainError, IpSecurity};

#[async_trait]
pub trait IpReputationProvider: Send + Sync {
    /// Single lookup of the `security` field set for `ip`. No retries.
    async fn lookup_security(&self, ip: &str) -> Result<IpSecurity, DomainError>;
}
