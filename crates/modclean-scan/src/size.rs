//! Recursive size computation for a single directory subtree.

use std::path::Path;

use jwalk::{Parallelism, WalkDir};

use modclean_core::ScanError;

/// Sum the sizes of every non-directory entry beneath `path`.
///
/// Directories contribute nothing. Symlinks are never followed; a link
/// counts its own length, not its target's. The first traversal or
/// metadata error aborts the computation, so a result is either the full
/// sum or an error.
pub fn compute_size(path: &Path) -> Result<u64, ScanError> {
    // Matches are already sized in parallel, so each walk stays serial.
    let walker = WalkDir::new(path)
        .parallelism(Parallelism::Serial)
        .skip_hidden(false)
        .follow_links(false);

    let mut total: u64 = 0;
    for entry_result in walker {
        let entry = entry_result.map_err(|err| walk_error(err, path))?;
        if entry.file_type().is_dir() {
            continue;
        }
        let metadata = entry.metadata().map_err(|err| walk_error(err, &entry.path()))?;
        total = total.saturating_add(metadata.len());
    }

    Ok(total)
}

/// Convert a jwalk error into a [`ScanError`] with path context.
pub(crate) fn walk_error(err: jwalk::Error, fallback: &Path) -> ScanError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| fallback.to_path_buf());
    let message = err.to_string();
    match err.into_io_error() {
        Some(source) => ScanError::io(path, source),
        None => ScanError::Walk { path, message },
    }
}
