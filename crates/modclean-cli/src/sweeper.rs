//! Discovery, selection, confirmation and deletion, in that order.

use std::io::Write;
use std::time::Duration;

use modclean_core::{DeletionOutcome, DirectoryEntry, SelectionSet, SweepConfig, format_size};
use modclean_ops::{DeletionPool, DeletionSummary};
use modclean_scan::{DirectoryFinder, FindReport};

use crate::error::SweepError;
use crate::prompt::Prompter;

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepSummary {
    /// No directory matched the target name.
    NoneFound,
    /// The operator selected nothing.
    NothingSelected,
    /// The operator declined the confirmation.
    Cancelled,
    /// Deletion ran; individual failures are counted here.
    Completed(DeletionSummary),
}

/// Runs one interactive sweep, writing report lines to `out` and error
/// lines to `err`.
pub struct Sweeper<P, O, E> {
    config: SweepConfig,
    prompter: P,
    out: O,
    err: E,
}

impl<P, O, E> Sweeper<P, O, E>
where
    P: Prompter,
    O: Write,
    E: Write,
{
    pub fn new(config: SweepConfig, prompter: P, out: O, err: E) -> Self {
        Self {
            config,
            prompter,
            out,
            err,
        }
    }

    /// Consume the sweeper, returning its writers.
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Run the whole sequence. Must be called from within a tokio runtime.
    pub async fn run(&mut self) -> Result<SweepSummary, SweepError> {
        let root = self.config.root.display().to_string();
        let target = self.config.target_name.clone();

        writeln!(
            self.out,
            "Scanning for {target} in {root} (this may take a moment)..."
        )?;

        let report = match self.discover().await {
            Ok(report) => report,
            Err(e) => {
                writeln!(self.err, "Error walking directory: {e}")?;
                return Err(e);
            }
        };
        tracing::debug!(
            matches = report.entries.len(),
            skipped = report.skipped.len(),
            elapsed = ?report.duration,
            "discovery finished"
        );
        for warning in &report.skipped {
            tracing::debug!(path = %warning.path.display(), kind = ?warning.kind, "skipped: {}", warning.message);
        }

        if report.is_empty() {
            writeln!(self.out, "No {target} directories found in {root}")?;
            return Ok(SweepSummary::NoneFound);
        }
        let entries = report.entries;

        let selection = match self.select(&entries, &target) {
            Ok(selection) => selection,
            Err(e) => {
                writeln!(self.err, "Error during selection: {e}")?;
                return Err(e);
            }
        };
        if selection.is_empty() {
            writeln!(self.out, "No directories selected for deletion.")?;
            return Ok(SweepSummary::NothingSelected);
        }

        let total = format_size(selection.total_size(&entries));
        let question = format!(
            "Are you sure you want to DELETE {} directories (total size: {total})? This cannot be undone!",
            selection.len()
        );
        let confirmed = match self.prompter.confirm(&question) {
            Ok(confirmed) => confirmed,
            Err(e) => {
                writeln!(self.err, "Error during confirmation: {e}")?;
                return Err(e.into());
            }
        };
        if !confirmed {
            writeln!(self.out, "Operation cancelled.")?;
            return Ok(SweepSummary::Cancelled);
        }

        writeln!(
            self.out,
            "\nDeleting {} directories (total size: {total})",
            selection.len()
        )?;
        let summary = self.delete(selection.selected(&entries)).await?;
        writeln!(self.out, "\nOperation completed! {}", summary.summary())?;

        Ok(SweepSummary::Completed(summary))
    }

    async fn discover(&self) -> Result<FindReport, SweepError> {
        let finder = DirectoryFinder::new(&self.config);
        let root = self.config.root.clone();
        let report = tokio::task::spawn_blocking(move || finder.find(&root))
            .await
            .map_err(|e| SweepError::Task(e.to_string()))??;
        Ok(report)
    }

    fn select(&mut self, entries: &[DirectoryEntry], target: &str) -> Result<SelectionSet, SweepError> {
        let options: Vec<String> = entries.iter().map(DirectoryEntry::label).collect();
        let message = format!(
            "Found {} {target} directories. Select directories to DELETE:",
            entries.len()
        );
        let indices = self
            .prompter
            .select(&message, &options, self.config.page_size)?;
        Ok(SelectionSet::new(indices, entries.len())?)
    }

    /// Delete the selection, printing each outcome as it arrives.
    ///
    /// A failed write stops the reporting but not the draining: every
    /// removal finishes before the write error is returned.
    async fn delete(&mut self, selected: Vec<DirectoryEntry>) -> Result<DeletionSummary, SweepError> {
        let pool = DeletionPool::new(self.config.delete_concurrency);
        let mut rx = pool.start_deletion(selected);
        let mut summary = DeletionSummary::new();
        let mut reported = Ok(());

        while let Some(outcome) = rx.recv().await {
            summary.record(&outcome);
            if reported.is_ok() {
                reported = self.report_outcome(&outcome);
            }
        }

        reported?;
        Ok(summary)
    }

    fn report_outcome(&mut self, outcome: &DeletionOutcome) -> std::io::Result<()> {
        match &outcome.error {
            None => writeln!(
                self.out,
                "Deleted [{}] ({}) in {}",
                outcome.entry.path().display(),
                format_size(outcome.entry.size()),
                format_elapsed(outcome.elapsed)
            ),
            Some(error) => writeln!(self.err, "ERROR: {error}"),
        }
    }
}

/// Round to whole milliseconds for display (`"12ms"`, `"1.5s"`).
pub fn format_elapsed(elapsed: Duration) -> String {
    let rounded = Duration::from_millis((elapsed.as_secs_f64() * 1000.0).round() as u64);
    format!("{rounded:?}")
}
