//! # Job Sponsored
//!
//! Job search proxy with visa filtering and static pages

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use jobsponsored_domain::CliOverrides;
use jobsponsored_jobs::{CacheSweepJob, JobRunner};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser)]
#[command(name = "jobsponsored")]
#[command(version)]
#[command(about = "Visa-sponsored job search proxy")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// HTTP port (overrides config and PORT)
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Directory holding the static pages
    #[arg(long)]
    public_dir: Option<String>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            port: self.port,
            bind_address: self.bind.clone(),
            public_dir: self.public_dir.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        port = config.server.port,
        bind = %config.server.bind_address,
        public_dir = %config.server.public_dir,
        cache_ttl_secs = config.cache.ttl_secs,
        cache_max_entries = config.cache.max_entries,
        "Configuration loaded"
    );

    let services = di::Services::build(&config)?;

    let shutdown = CancellationToken::new();
    JobRunner::new()
        .with_cache_sweep(
            CacheSweepJob::new(services.sweep_cache.clone())
                .with_interval(Duration::from_secs(config.cache.sweep_interval_secs))
                .with_cancellation(shutdown.clone()),
        )
        .start()
        .await;

    let result = server::start_web_server(&config, services.state).await;
    shutdown.cancel();
    result
}
