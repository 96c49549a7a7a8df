use hearth_dns_application::use_cases::PurgeExpiredRecordsUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

const DEFAULT_PURGE_INTERVAL_SECS: u64 = 60;

/// Periodically drops directory entries whose TTL has elapsed, from memory
/// and from the database. Lookups already hide expired entries; this only
/// reclaims them.
pub struct DirectoryExpiryJob {
    purge: Arc<PurgeExpiredRecordsUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl DirectoryExpiryJob {
    pub fn new(purge: Arc<PurgeExpiredRecordsUseCase>) -> Self {
        Self {
            purge,
            interval_secs: DEFAULT_PURGE_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, secs: u64) -> Self {
        self.interval_secs = secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting directory expiry job");

        let job = Arc::clone(&self);
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(job.interval_secs));
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        info!("DirectoryExpiryJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        job.run_once().await;
                    }
                }
            }
        });
    }

    async fn run_once(&self) {
        let now = chrono::Utc::now().timestamp();
        match self.purge.execute(now).await {
            Ok(outcome) if outcome.entries_removed > 0 || outcome.rows_removed > 0 => {
                info!(
                    entries_removed = outcome.entries_removed,
                    rows_removed = outcome.rows_removed,
                    "Expired directory entries purged"
                );
            }
            Ok(_) => debug!("No expired directory entries"),
            Err(e) => error!(error = %e, "Directory expiry purge failed"),
        }
    }
}
