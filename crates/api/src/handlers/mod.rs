pub mod cache;
pub mod health;
pub mod jobs;
pub mod links;
pub mod vpn;

pub use cache::get_cache_stats;
pub use health::health_check;
pub use jobs::search_jobs;
pub use links::get_govt_links;
pub use vpn::check_vpn;
