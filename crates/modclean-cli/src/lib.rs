//! Interactive orchestration for modclean.
//!
//! This crate wires discovery, the operator prompts and the deletion pool
//! into a single run:
//!
//! 1. find every target directory under the root and size it
//! 2. offer the matches for multi-selection
//! 3. confirm the total size of the selection
//! 4. delete the selection with bounded parallelism, reporting each outcome
//!
//! The prompts sit behind the [`Prompter`] trait so a run can be driven
//! without a terminal.
//!
//! # Usage
//!
//! ```rust,no_run
//! use modclean_cli::{DialoguerPrompter, Sweeper};
//! use modclean_core::SweepConfig;
//!
//! # async fn demo() -> Result<(), modclean_cli::SweepError> {
//! let config = SweepConfig::new("/path/to/projects");
//! let mut sweeper = Sweeper::new(
//!     config,
//!     DialoguerPrompter::new(),
//!     std::io::stdout(),
//!     std::io::stderr(),
//! );
//! let summary = sweeper.run().await?;
//! println!("{summary:?}");
//! # Ok(())
//! # }
//! ```

mod error;
mod prompt;
mod sweeper;

pub use error::SweepError;
pub use prompt::{DialoguerPrompter, PromptError, Prompter};
pub use sweeper::{SweepSummary, Sweeper, format_elapsed};
