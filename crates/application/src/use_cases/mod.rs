pub mod cache;
pub mod jobs;
pub mod links;
pub mod vpn;

// Re-export use cases
pub use cache::{GetCacheStatsUseCase, SweepExpiredCacheUseCase};
pub use jobs::SearchJobsUseCase;
pub use links::GetGovtLinksUseCase;
pub use vpn::CheckVpnUseCase;
