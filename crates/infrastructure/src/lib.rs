//! Job Sponsored Infrastructure Layer
pub mod cache;
pub mod clock;
pub mod providers;

pub use cache::{CacheMetrics, JobCache};
pub use clock::SystemClock;
pub use providers::{build_http_client, AdzunaJobProvider, IpGeolocationClient};
