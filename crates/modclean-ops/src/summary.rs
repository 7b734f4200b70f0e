//! Aggregated results of a deletion run.

use modclean_core::{DeletionOutcome, format_size};

/// Totals over every outcome of a deletion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletionSummary {
    /// Number of directories removed.
    pub succeeded: usize,
    /// Number of directories that could not be removed.
    pub failed: usize,
    /// Snapshot size of the removed directories.
    pub bytes_freed: u64,
}

impl DeletionSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a single outcome into the totals.
    pub fn record(&mut self, outcome: &DeletionOutcome) {
        if outcome.is_success() {
            self.succeeded += 1;
            self.bytes_freed += outcome.entry.size();
        } else {
            self.failed += 1;
        }
    }

    pub fn from_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a DeletionOutcome>) -> Self {
        let mut summary = Self::new();
        for outcome in outcomes {
            summary.record(outcome);
        }
        summary
    }

    /// Number of entries attempted.
    pub fn attempted(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Check if every deletion succeeded.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Get a human-readable summary of the run.
    pub fn summary(&self) -> String {
        if self.failed == 0 {
            format!(
                "Freed {} ({} deleted)",
                format_size(self.bytes_freed),
                self.succeeded
            )
        } else {
            format!(
                "Freed {} ({} deleted, {} failed)",
                format_size(self.bytes_freed),
                self.succeeded,
                self.failed
            )
        }
    }
}
