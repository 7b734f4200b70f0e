//! Errors that stop a sweep.

use thiserror::Error;

use modclean_core::{ScanError, SelectionError};

use crate::prompt::PromptError;

/// A failure that aborts the whole run.
///
/// Finding nothing, selecting nothing and declining the confirmation are
/// normal outcomes, not errors.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The root could not be walked.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// The selection or confirmation prompt failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// The selection prompt returned indices that do not exist.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// The discovery task died before reporting.
    #[error("discovery task failed: {0}")]
    Task(String),

    /// Writing the report failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
