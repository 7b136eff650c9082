use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::application::ports::{ArtifactStore, ArtifactStoreError};

/// Deletes artifacts older than `max_age`, every `interval`.
pub struct RetentionSweeper {
    store: Arc<dyn ArtifactStore>,
    max_age: Duration,
    interval: Duration,
}

impl RetentionSweeper {
    pub fn new(store: Arc<dyn ArtifactStore>, max_age: Duration, interval: Duration) -> Self {
        Self {
            store,
            max_age,
            interval,
        }
    }

    pub async fn run(self) {
        tracing::info!(
            max_age_secs = self.max_age.as_secs(),
            interval_secs = self.interval.as_secs(),
            "Retention sweeper started"
        );

        let mut ticker = tokio::time::interval(self.interval);
        loop {
            ticker.tick().await;
            if let Err(e) = self.sweep(Utc::now()).await {
                tracing::error!(error = %e, "Retention sweep failed");
            }
        }
    }

    /// Removes everything last modified before `now - max_age`. Returns the
    /// number of deleted artifacts.
    pub async fn sweep(&self, now: DateTime<Utc>) -> Result<usize, ArtifactStoreError> {
        let max_age = chrono::Duration::from_std(self.max_age)
            .unwrap_or_else(|_| chrono::Duration::MAX);
        let cutoff = now.checked_sub_signed(max_age).unwrap_or(DateTime::<Utc>::MIN_UTC);

        let mut deleted = 0;
        for artifact in self.store.list().await? {
            if artifact.last_modified >= cutoff {
                continue;
            }

            match self.store.delete(&artifact.name).await {
                Ok(()) => deleted += 1,
                Err(e) => {
                    tracing::warn!(artifact = %artifact.name, error = %e, "Failed to delete expired artifact");
                }
            }
        }

        if deleted > 0 {
            tracing::info!(deleted, "Expired artifacts removed");
        }

        Ok(deleted)
    }
}
