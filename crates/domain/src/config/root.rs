use serde::{Deserialize, Serialize};
use std::path::Path;

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

const ENV_PORT: &str = "PORT";
const ENV_ADZUNA_APP_ID: &str = "ADZUNA_APP_ID";
const ENV_ADZUNA_APP_KEY: &str = "ADZUNA_APP_KEY";
const ENV_IPGEO_API_KEY: &str = "IPGEO_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over file and environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub public_dir: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Defaults → TOML file → environment → CLI flags.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.apply_cli_overrides(overrides);

        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Applies the environment variables the deployment scripts set.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                key: ENV_PORT,
                value: port.clone(),
            })?;
        }
        if let Some(app_id) = lookup(ENV_ADZUNA_APP_ID) {
            self.upstream.jobs.app_id = app_id;
        }
        if let Some(app_key) = lookup(ENV_ADZUNA_APP_KEY) {
            self.upstream.jobs.app_key = app_key;
        }
        if let Some(api_key) = lookup(ENV_IPGEO_API_KEY) {
            self.upstream.geolocation.api_key = api_key;
        }
        Ok(())
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(dir) = overrides.public_dir {
            self.server.public_dir = dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port cannot be 0".into()));
        }
        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::Validation("cache.ttl_secs must be > 0".into()));
        }
        if self.cache.max_entries == 0 {
            return Err(ConfigError::Validation(
                "cache.max_entries must be > 0".into(),
            ));
        }
        if self.upstream.jobs.results_per_page == 0 {
            return Err(ConfigError::Validation(
                "upstream.jobs.results_per_page must be > 0".into(),
            ));
        }
        for (name, url) in [
            ("upstream.jobs.base_url", &self.upstream.jobs.base_url),
            (
                "upstream.geolocation.base_url",
                &self.upstream.geolocation.base_url,
            ),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Validation(format!(
                    "{name} must start with http:// or https://"
                )));
            }
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}
