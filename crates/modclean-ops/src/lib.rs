//! Bounded parallel deletion engine for modclean.
//!
//! Deletions run as tokio tasks gated by a semaphore, with the removal
//! itself on the blocking pool. Outcomes are reported through a channel as
//! they complete.

mod delete;
mod summary;

pub use delete::DeletionPool;
pub use summary::DeletionSummary;

/// Default channel buffer size for deletion outcomes.
pub const DELETION_CHANNEL_SIZE: usize = 100;
