//! Waits for an asynchronously generated artifact to land in the object store.

use super::traits::{ObjectStore, StoreLocation};
use crate::{
    config::DEFAULT_POLL_INTERVAL,
    error::{NovaError, Result, StoreError},
    models::JobHandle,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollReport {
    pub path: PathBuf,
    pub not_found_checks: u32,
    pub bytes: u64,
}

/// Fixed-interval existence checks. Not-found retries forever unless a
/// timeout is set; any other store error ends the wait immediately.
/// Cancellation is honoured while waiting and while downloading.
pub struct ArtifactPoller {
    store: Arc<dyn ObjectStore>,
    interval: Duration,
    timeout: Option<Duration>,
}

impl ArtifactPoller {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self {
            store,
            interval: DEFAULT_POLL_INTERVAL,
            timeout: None,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn wait_and_download(
        &self,
        location: &StoreLocation,
        job: &JobHandle,
        dest: &Path,
        cancel: &CancellationToken,
    ) -> Result<PollReport> {
        let key = location.key_for(&job.artifact_key());
        let deadline = self.timeout.map(|t| Instant::now() + t);
        let mut not_found_checks = 0u32;

        log::info!(
            "Polling s3://{}/{} every {}s",
            location.bucket,
            key,
            self.interval.as_secs_f32()
        );

        loop {
            if cancel.is_cancelled() {
                return Err(NovaError::Cancelled);
            }

            match self.store.head(location, &key).await {
                Ok(()) => break,
                Err(StoreError::NotFound(_)) => {
                    not_found_checks += 1;
                    log::info!(
                        "⏳ Video not ready yet (check {}), waiting {}s...",
                        not_found_checks,
                        self.interval.as_secs_f32()
                    );
                }
                Err(StoreError::Other(msg)) => {
                    log::error!("Stopping poll for {}: {}", key, msg);
                    return Err(NovaError::StorageError(msg));
                }
            }

            // The last sleep is cut short so one final check lands on the deadline.
            let wait = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return Err(NovaError::TimedOut(not_found_checks));
                    }
                    self.interval.min(deadline - now)
                }
                None => self.interval,
            };

            tokio::select! {
                _ = cancel.cancelled() => return Err(NovaError::Cancelled),
                _ = tokio::time::sleep(wait) => {}
            }
        }

        let bytes = tokio::select! {
            _ = cancel.cancelled() => {
                if tokio::fs::remove_file(dest).await.is_ok() {
                    log::debug!("Removed partial download {}", dest.display());
                }
                return Err(NovaError::Cancelled);
            }
            result = self.store.download(location, &key, dest) => result?,
        };
        log::info!("Downloaded {} bytes to {}", bytes, dest.display());

        Ok(PollReport {
            path: dest.to_path_buf(),
            not_found_checks,
            bytes,
        })
    }
}
