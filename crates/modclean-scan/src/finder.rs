//! JWalk-based discovery of target directories with parallel sizing.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;
use jwalk::{Parallelism, WalkDir};
use rayon::{Scope, ThreadPool, ThreadPoolBuilder};

use modclean_core::{DirectoryEntry, ScanError, ScanWarning, SweepConfig, WarningKind};

use crate::size::compute_size;

/// Message sent from a sizing task back to the coordinating thread.
type SizeResult = Result<DirectoryEntry, ScanWarning>;

/// Everything a discovery pass produced.
#[derive(Debug, Clone)]
pub struct FindReport {
    /// Canonical root that was walked.
    pub root: PathBuf,
    /// Matches whose size was computed, in completion order.
    pub entries: Vec<DirectoryEntry>,
    /// Subtrees and matches that were skipped, with the reason.
    pub skipped: Vec<ScanWarning>,
    /// Wall time of the walk plus sizing.
    pub duration: Duration,
}

impl FindReport {
    /// Sum of the sizes of every discovered entry.
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(DirectoryEntry::size).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Finds directories by base name and sizes each one concurrently.
///
/// The walk never descends into a match, so a target nested inside
/// another target is never reported on its own.
pub struct DirectoryFinder {
    target_name: String,
    size_concurrency: usize,
    walk_threads: usize,
}

impl DirectoryFinder {
    /// Create a finder from a sweep configuration.
    pub fn new(config: &SweepConfig) -> Self {
        Self {
            target_name: config.target_name.clone(),
            size_concurrency: config.effective_size_concurrency(),
            walk_threads: config.walk_threads,
        }
    }

    /// Create a finder for `target_name` with default concurrency.
    pub fn for_target(target_name: impl Into<String>) -> Self {
        let mut config = SweepConfig::default();
        config.target_name = target_name.into();
        Self::new(&config)
    }

    /// Walk `root` and return every match with its size.
    ///
    /// Only a root that cannot be resolved or listed is an error. Unreadable
    /// subtrees and matches that fail to size are recorded in
    /// [`FindReport::skipped`] and the pass carries on.
    pub fn find(&self, root: &Path) -> Result<FindReport, ScanError> {
        let start = Instant::now();
        let root_path = root.canonicalize().map_err(|e| ScanError::io(root, e))?;

        if !root_path.is_dir() {
            return Err(ScanError::NotADirectory { path: root_path });
        }
        std::fs::read_dir(&root_path).map_err(|e| ScanError::io(&root_path, e))?;

        let pool = self.sizing_pool()?;
        let (tx, rx) = crossbeam_channel::unbounded::<SizeResult>();
        let mut skipped = Vec::new();

        pool.in_place_scope(|scope| {
            if self.is_target(&root_path) {
                dispatch_size(scope, &tx, root_path.clone());
                return;
            }

            for entry_result in self.walker(&root_path) {
                let entry = match entry_result {
                    Ok(e) => e,
                    Err(err) => {
                        let warning = walk_warning(err, &root_path);
                        tracing::debug!(path = %warning.path.display(), "skipping unreadable subtree");
                        skipped.push(warning);
                        continue;
                    }
                };

                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    continue;
                }
                if entry.file_name().to_str() == Some(self.target_name.as_str()) {
                    dispatch_size(scope, &tx, entry.path());
                }
            }
        });

        // Every sizing task has finished once the scope returns.
        drop(tx);
        let mut entries = Vec::new();
        for result in rx {
            match result {
                Ok(entry) => entries.push(entry),
                Err(warning) => skipped.push(warning),
            }
        }

        Ok(FindReport {
            root: root_path,
            entries,
            skipped,
            duration: start.elapsed(),
        })
    }

    fn is_target(&self, path: &Path) -> bool {
        path.file_name().and_then(|n| n.to_str()) == Some(self.target_name.as_str())
    }

    /// Build the walker, pruning matched directories before they are read.
    fn walker(&self, root: &Path) -> WalkDir {
        let parallelism = match self.walk_threads {
            0 => Parallelism::RayonDefaultPool {
                busy_timeout: Duration::from_millis(100),
            },
            n => Parallelism::RayonNewPool(n),
        };

        let target = self.target_name.clone();
        WalkDir::new(root)
            .parallelism(parallelism)
            .skip_hidden(false)
            .follow_links(false)
            .process_read_dir(move |_depth, _path, _state, children| {
                for child in children.iter_mut().flatten() {
                    if child.file_type.is_dir() && child.file_name.to_str() == Some(target.as_str()) {
                        child.read_children_path = None;
                    }
                }
            })
    }

    fn sizing_pool(&self) -> Result<ThreadPool, ScanError> {
        ThreadPoolBuilder::new()
            .num_threads(self.size_concurrency.max(1))
            .thread_name(|i| format!("modclean-size-{i}"))
            .build()
            .map_err(|e| ScanError::Other {
                message: format!("failed to start sizing pool: {e}"),
            })
    }
}

/// Size one match on the pool and report the result over `tx`.
fn dispatch_size<'scope>(scope: &Scope<'scope>, tx: &Sender<SizeResult>, path: PathBuf) {
    tracing::debug!(path = %path.display(), "found match");
    let tx = tx.clone();
    scope.spawn(move |_| {
        let result = match compute_size(&path) {
            Ok(size) => Ok(DirectoryEntry::new(path, size)),
            Err(err) => {
                tracing::debug!(
                    path = %path.display(),
                    failed_at = ?err.path(),
                    error = %err,
                    "dropping match"
                );
                Err(ScanWarning::size_error(path, &err))
            }
        };
        // The receiver outlives the scope.
        let _ = tx.send(result);
    });
}

/// Turn a walker error into a skipped-subtree warning.
fn walk_warning(err: jwalk::Error, root: &Path) -> ScanWarning {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    match err.io_error() {
        Some(io) => ScanWarning::read_error(path, io),
        None => ScanWarning::new(path, err.to_string(), WarningKind::ReadError),
    }
}
