pub mod clock;
pub mod ip_reputation;
pub mod job_cache;
pub mod job_provider;

pub use clock::Clock;
pub use ip_reputation::IpReputationProvider;
pub use job_cache::JobCacheStore;
pub use job_provider::JobProvider;
