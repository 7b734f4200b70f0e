//! Error types for discovery and deletion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a discovery pass or a size computation.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Root path is not a directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Walker failure that carried no underlying I/O error.
    #[error("Walk error at {path}: {message}")]
    Walk { path: PathBuf, message: String },

    /// Other error.
    #[error("{message}")]
    Other { message: String },
}

impl ScanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// The path the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::PermissionDenied { path }
            | Self::NotFound { path }
            | Self::Io { path, .. }
            | Self::NotADirectory { path }
            | Self::Walk { path, .. } => Some(path),
            Self::Other { .. } => None,
        }
    }
}

/// Failure to remove a selected directory.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// The filesystem refused the removal.
    #[error("failed to delete {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The blocking removal task panicked or was cancelled.
    #[error("failed to delete {}: {message}", path.display())]
    Task { path: PathBuf, message: String },
}

impl DeleteError {
    /// Path that could not be deleted.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Task { path, .. } => path,
        }
    }
}

/// An invalid selection returned by the selection collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("selected index {index} is out of range for {len} entries")]
    OutOfRange { index: usize, len: usize },
}

/// Kind of skipped item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Permission was denied.
    PermissionDenied,
    /// Error reading a directory listing.
    ReadError,
    /// Sizing a matched directory failed; the match was dropped.
    SizeError,
}

/// Something the finder skipped instead of failing the whole pass.
#[derive(Debug, Clone)]
pub struct ScanWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ScanWarning {
    /// Create a new scan warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create a warning for a match whose size could not be computed.
    pub fn size_error(path: impl Into<PathBuf>, error: &ScanError) -> Self {
        Self {
            path: path.into(),
            message: format!("Size error: {error}"),
            kind: WarningKind::SizeError,
        }
    }

    /// Create a warning for a subtree the walker could not read.
    pub fn read_error(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let path = path.into();
        if error.kind() == std::io::ErrorKind::PermissionDenied {
            return Self {
                message: format!("Permission denied: {}", path.display()),
                path,
                kind: WarningKind::PermissionDenied,
            };
        }
        Self {
            message: format!("Read error: {error}"),
            path,
            kind: WarningKind::ReadError,
        }
    }
}

impl std::fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}
