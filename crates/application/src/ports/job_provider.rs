use async_trait::async_trait;
use jobsponsored_domain::{DomainError, Job, JobQuery};

#[async_trait]
pub trait JobProvider: Send + Sync {
    /// First page of results for `query.keyword` in `query.country`, in provider order.
    async fn search(&self, query: &JobQuery) -> Result<Vec<Job>, DomainError>;
}
