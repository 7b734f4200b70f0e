//! Core types and configuration for modclean.
//!
//! This crate provides the data model shared by the discovery, deletion and
//! orchestration crates: discovered entries, operator selections, deletion
//! outcomes, error types and the size formatter.

mod config;
mod entry;
mod error;
mod format;

pub use config::{
    DEFAULT_DELETE_CONCURRENCY, DEFAULT_PAGE_SIZE, DEFAULT_TARGET_NAME, SweepConfig,
    SweepConfigBuilder,
};
pub use entry::{DeletionOutcome, DirectoryEntry, SelectionSet};
pub use error::{DeleteError, ScanError, ScanWarning, SelectionError, WarningKind};
pub use format::format_size;
