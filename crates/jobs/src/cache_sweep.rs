use jobsponsored_application::use_cases::SweepExpiredCacheUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodically drops job searches older than the freshness window.
pub struct CacheSweepJob {
    sweep: Arc<SweepExpiredCacheUseCase>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl CacheSweepJob {
    pub fn new(sweep: Arc<SweepExpiredCacheUseCase>) -> Self {
        Self {
            sweep,
            interval: Duration::from_secs(300),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval.as_secs(),
            "Starting cache sweep job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let removed = self.sweep.execute();
                        if removed > 0 {
                            info!(removed, "Cache sweep completed");
                        } else {
                            debug!("Cache sweep found nothing to remove");
                        }
                    }
                }
            }
        });
    }
}
