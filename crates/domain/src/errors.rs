use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Invalid upstream response: {0}")]
    InvalidUpstreamResponse(String),

    #[error("Reputation check failed: {0}")]
    ReputationCheckFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DomainError {
    /// True for failures of the primary job-search path.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            DomainError::UpstreamUnavailable(_) | DomainError::InvalidUpstreamResponse(_)
        )
    }
}
