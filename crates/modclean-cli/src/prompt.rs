//! Interactive selection and confirmation.

use dialoguer::{Confirm, MultiSelect};
use thiserror::Error;

/// Failure of the interactive collaborator itself.
///
/// An empty selection or a declined confirmation is not an error.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The terminal interaction failed.
    #[error(transparent)]
    Interaction(#[from] dialoguer::Error),

    /// The prompt could not produce an answer.
    #[error("{0}")]
    Unavailable(String),
}

/// Asks the operator which entries to delete and whether to proceed.
pub trait Prompter {
    /// Offer `options` and return the chosen indices, possibly none.
    fn select(
        &mut self,
        message: &str,
        options: &[String],
        page_size: usize,
    ) -> Result<Vec<usize>, PromptError>;

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> Result<bool, PromptError>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn select(
        &mut self,
        message: &str,
        options: &[String],
        page_size: usize,
    ) -> Result<Vec<usize>, PromptError> {
        let chosen = MultiSelect::new()
            .with_prompt(message)
            .items(options)
            .max_length(page_size)
            .interact()?;
        Ok(chosen)
    }

    fn confirm(&mut self, message: &str) -> Result<bool, PromptError> {
        let confirmed = Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()?;
        Ok(confirmed)
    }
}
