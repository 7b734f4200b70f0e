//! Bounded parallel deletion of selected directories.

use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use tokio::sync::{Semaphore, mpsc};

use modclean_core::{DEFAULT_DELETE_CONCURRENCY, DeleteError, DeletionOutcome, DirectoryEntry};

use crate::DELETION_CHANNEL_SIZE;

/// Deletes directories with at most `max_concurrent` removals in flight.
///
/// Every entry is attempted; one failure never cancels the others.
#[derive(Debug, Clone)]
pub struct DeletionPool {
    max_concurrent: usize,
    gauge: Arc<InFlightGauge>,
}

impl DeletionPool {
    /// Create a pool. A limit of zero is treated as one.
    pub fn new(max_concurrent: usize) -> Self {
        Self {
            max_concurrent: max_concurrent.max(1),
            gauge: Arc::new(InFlightGauge::default()),
        }
    }

    /// Maximum number of simultaneous removals.
    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Highest number of removals observed running at once.
    pub fn peak_in_flight(&self) -> usize {
        self.gauge.peak.load(Ordering::SeqCst)
    }

    /// Start deleting `entries` in the background.
    ///
    /// Outcomes are sent as each removal finishes. The channel closes once
    /// every entry has been attempted, so draining it is a full join.
    /// Must be called from within a tokio runtime.
    pub fn start_deletion(&self, entries: Vec<DirectoryEntry>) -> mpsc::Receiver<DeletionOutcome> {
        let (tx, rx) = mpsc::channel(DELETION_CHANNEL_SIZE);
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));

        tracing::debug!(
            entries = entries.len(),
            max_concurrent = self.max_concurrent,
            "starting deletion"
        );

        for entry in entries {
            let tx = tx.clone();
            let semaphore = Arc::clone(&semaphore);
            let gauge = Arc::clone(&self.gauge);

            tokio::spawn(async move {
                let outcome = delete_entry(entry, semaphore, gauge).await;
                // A dropped receiver does not stop the remaining deletions.
                let _ = tx.send(outcome).await;
            });
        }

        rx
    }

    /// Delete `entries` and wait for every outcome.
    pub async fn delete_all(&self, entries: Vec<DirectoryEntry>) -> Vec<DeletionOutcome> {
        let mut outcomes = Vec::with_capacity(entries.len());
        let mut rx = self.start_deletion(entries);
        while let Some(outcome) = rx.recv().await {
            outcomes.push(outcome);
        }
        outcomes
    }
}

impl Default for DeletionPool {
    fn default() -> Self {
        Self::new(DEFAULT_DELETE_CONCURRENCY)
    }
}

/// Remove one directory while holding a pool permit.
async fn delete_entry(
    entry: DirectoryEntry,
    semaphore: Arc<Semaphore>,
    gauge: Arc<InFlightGauge>,
) -> DeletionOutcome {
    // Dropping the permit at the end of this function releases it, even
    // when the removal fails or its task panics.
    let _permit = match semaphore.acquire_owned().await {
        Ok(permit) => permit,
        Err(e) => {
            let error = DeleteError::Task {
                path: entry.path().to_path_buf(),
                message: e.to_string(),
            };
            return DeletionOutcome::failure(entry, error, Duration::ZERO);
        }
    };
    let _active = gauge.enter();

    let start = Instant::now();
    let path = entry.path().to_path_buf();
    let result = tokio::task::spawn_blocking(move || fs::remove_dir_all(&path)).await;
    let elapsed = start.elapsed();

    match result {
        Ok(Ok(())) => {
            tracing::debug!(path = %entry.path().display(), ?elapsed, "deleted");
            DeletionOutcome::success(entry, elapsed)
        }
        Ok(Err(source)) => {
            tracing::debug!(path = %entry.path().display(), error = %source, "deletion failed");
            let error = DeleteError::Io {
                path: entry.path().to_path_buf(),
                source,
            };
            DeletionOutcome::failure(entry, error, elapsed)
        }
        Err(join_error) => {
            let error = DeleteError::Task {
                path: entry.path().to_path_buf(),
                message: join_error.to_string(),
            };
            DeletionOutcome::failure(entry, error, elapsed)
        }
    }
}

/// Counts removals currently running and the highest count seen.
#[derive(Debug, Default)]
struct InFlightGauge {
    current: AtomicUsize,
    peak: AtomicUsize,
}

impl InFlightGauge {
    fn enter(self: &Arc<Self>) -> InFlightGuard {
        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        InFlightGuard {
            gauge: Arc::clone(self),
        }
    }
}

struct InFlightGuard {
    gauge: Arc<InFlightGauge>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.gauge.current.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn make_dir(root: &Path, name: &str, files: usize) -> DirectoryEntry {
        let dir = root.join(name);
        fs::create_dir_all(dir.join("nested")).unwrap();
        for i in 0..files {
            fs::write(dir.join("nested").join(format!("{i}.js")), b"module").unwrap();
        }
        DirectoryEntry::new(dir, files as u64 * 6)
    }

    #[test]
    fn test_zero_limit_is_clamped() {
        assert_eq!(DeletionPool::new(0).max_concurrent(), 1);
        assert_eq!(DeletionPool::default().max_concurrent(), 3);
    }

    #[tokio::test]
    async fn test_deletes_every_entry() {
        let temp = TempDir::new().unwrap();
        let entries: Vec<_> = (0..5)
            .map(|i| make_dir(temp.path(), &format!("p{i}"), 3))
            .collect();

        let outcomes = DeletionPool::new(2).delete_all(entries.clone()).await;

        assert_eq!(outcomes.len(), 5);
        assert!(outcomes.iter().all(DeletionOutcome::is_success));
        for entry in &entries {
            assert!(!entry.path().exists());
        }
        assert!(temp.path().exists());
    }

    #[tokio::test]
    async fn test_missing_entry_fails_alone() {
        let temp = TempDir::new().unwrap();
        let present = make_dir(temp.path(), "present", 2);
        let missing = DirectoryEntry::new(temp.path().join("missing"), 0);

        let outcomes = DeletionPool::new(1)
            .delete_all(vec![missing.clone(), present.clone()])
            .await;

        assert_eq!(outcomes.len(), 2);
        let failed: Vec<_> = outcomes.iter().filter(|o| !o.is_success()).collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].entry, missing);
        assert!(matches!(failed[0].error, Some(DeleteError::Io { .. })));
        assert!(!present.path().exists());
    }

    #[tokio::test]
    async fn test_empty_input_closes_channel() {
        let mut rx = DeletionPool::default().start_deletion(Vec::new());
        assert!(rx.recv().await.is_none());
    }
}
