//! Job Sponsored Domain Layer
pub mod cache;
pub mod config;
pub mod errors;
pub mod govt_links;
pub mod job;
pub mod job_filter;
pub mod job_query;
pub mod security;

pub use cache::{CacheEntry, CacheStats, FRESHNESS_WINDOW_MS};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use govt_links::GovtLinks;
pub use job::{Job, JobSearchResult};
pub use job_query::{CacheKey, JobQuery, Tier};
pub use security::IpSecurity;
