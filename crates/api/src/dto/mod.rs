pub mod cache;
pub mod error;
pub mod jobs;
pub mod links;
pub mod query;
pub mod vpn;

pub use cache::CacheStatsResponse;
pub use error::ErrorResponse;
pub use jobs::JobSearchParams;
pub use links::GovtLinksParams;
pub use query::QueryPairs;
pub use vpn::VpnCheckResponse;
