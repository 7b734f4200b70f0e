//! Directory discovery and sizing engine for modclean.
//!
//! This crate walks a directory tree looking for directories with a given
//! base name (`node_modules` by default) and measures each match.
//!
//! # Overview
//!
//! - **Parallel traversal** via jwalk/rayon
//! - **Subtree pruning**: a match is never descended into, so nested
//!   matches are not reported twice
//! - **Bounded sizing**: every match is sized on a dedicated rayon pool
//!   while the walk continues
//! - **Best-effort results**: unreadable subtrees and failed sizes end up
//!   in [`FindReport::skipped`] instead of aborting the pass
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use modclean_scan::DirectoryFinder;
//!
//! let finder = DirectoryFinder::for_target("node_modules");
//! let report = finder.find(Path::new("/path/to/projects")).unwrap();
//!
//! for entry in &report.entries {
//!     println!("{} {} bytes", entry.path().display(), entry.size());
//! }
//! ```

mod finder;
mod size;

pub use finder::{DirectoryFinder, FindReport};
pub use size::compute_size;

// Re-export core types for convenience
pub use modclean_core::{DirectoryEntry, ScanError, ScanWarning, SweepConfig, WarningKind};
