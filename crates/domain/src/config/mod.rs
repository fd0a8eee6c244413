//! Configuration module for Job Sponsored
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration, loading and CLI overrides
//! - `server`: HTTP binding and static pages
//! - `upstream`: Job search and IP geolocation providers
//! - `cache`: Search result cache sizing and freshness
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::{GeolocationConfig, JobProviderConfig, UpstreamConfig};
