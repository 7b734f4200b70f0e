//! Discovered directories, operator selections and deletion outcomes.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{DeleteError, SelectionError};
use crate::format::format_size;

/// A matched directory and the size it had when it was discovered.
///
/// Sizes are a snapshot: nothing re-measures an entry after discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    path: PathBuf,
    size: u64,
}

impl DirectoryEntry {
    /// Create a new entry.
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    /// Path of the matched directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Total bytes of the non-directory entries beneath the path.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Label used when offering this entry for selection.
    pub fn label(&self) -> String {
        format!("{} ({})", self.path.display(), format_size(self.size))
    }
}

/// Ordered, duplicate-free, in-range indices into a list of entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet {
    indices: Vec<usize>,
}

impl SelectionSet {
    /// Validate indices against a list of `len` entries.
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn new(indices: impl IntoIterator<Item = usize>, len: usize) -> Result<Self, SelectionError> {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        for index in indices {
            if index >= len {
                return Err(SelectionError::OutOfRange { index, len });
            }
            if seen.insert(index) {
                kept.push(index);
            }
        }
        Ok(Self { indices: kept })
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Clone the selected entries out of `entries`, in selection order.
    pub fn selected(&self, entries: &[DirectoryEntry]) -> Vec<DirectoryEntry> {
        self.indices.iter().map(|&i| entries[i].clone()).collect()
    }

    /// Sum of the snapshot sizes of the selected entries.
    pub fn total_size(&self, entries: &[DirectoryEntry]) -> u64 {
        self.indices.iter().map(|&i| entries[i].size()).sum()
    }
}

/// Result of attempting to delete one entry.
#[derive(Debug)]
pub struct DeletionOutcome {
    /// The entry that was deleted (or not).
    pub entry: DirectoryEntry,
    /// Why the deletion failed, if it did.
    pub error: Option<DeleteError>,
    /// Time spent in the removal itself.
    pub elapsed: Duration,
}

impl DeletionOutcome {
    pub fn success(entry: DirectoryEntry, elapsed: Duration) -> Self {
        Self {
            entry,
            error: None,
            elapsed,
        }
    }

    pub fn failure(entry: DirectoryEntry, error: DeleteError, elapsed: Duration) -> Self {
        Self {
            entry,
            error: Some(error),
            elapsed,
        }
    }

    /// Check if the directory was removed.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<DirectoryEntry> {
        vec![
            DirectoryEntry::new("/a/node_modules", 500),
            DirectoryEntry::new("/b/node_modules", 1500),
            DirectoryEntry::new("/c/node_modules", 2048),
        ]
    }

    #[test]
    fn test_entry_label() {
        let entry = DirectoryEntry::new("/b/node_modules", 1536);
        assert_eq!(entry.label(), "/b/node_modules (1.5 KB)");
    }

    #[test]
    fn test_selection_dedup_keeps_order() {
        let selection = SelectionSet::new([2, 0, 2, 0], 3).unwrap();
        assert_eq!(selection.indices(), &[2, 0]);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_selection_out_of_range() {
        let err = SelectionSet::new([0, 3], 3).unwrap_err();
        assert_eq!(err, SelectionError::OutOfRange { index: 3, len: 3 });
    }

    #[test]
    fn test_selection_total_and_entries() {
        let entries = entries();
        let selection = SelectionSet::new([0, 1], entries.len()).unwrap();
        assert_eq!(selection.total_size(&entries), 2000);

        let selected = selection.selected(&entries);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].path(), Path::new("/a/node_modules"));
    }

    #[test]
    fn test_empty_selection() {
        let selection = SelectionSet::new(Vec::new(), 3).unwrap();
        assert!(selection.is_empty());
        assert_eq!(selection.total_size(&entries()), 0);
    }
}
