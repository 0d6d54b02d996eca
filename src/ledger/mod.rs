/// Completion ledger boundary
///
/// The completion ledger is the external collaborator that owns persistence.
/// This module defines the read contract the stats engine consumes, plus an
/// in-memory implementation used by tests and the CLI.

pub mod memory;

pub use memory::InMemoryLedger;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{CompletionRecord, UserId};

/// Errors that can occur when reading from the ledger
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    #[error("Habit not found: {habit_id}")]
    HabitNotFound { habit_id: String },
}

/// Read contract for the completion ledger
///
/// Implementations may return completions unordered and with duplicates;
/// the stats engine tolerates both. Retry and backoff, if any, belong to
/// the implementation, never to the callers.
pub trait CompletionLedger {
    /// Fetch a user's completions, optionally restricted to days on or
    /// after `since`
    fn fetch_completions(
        &self,
        user_id: &UserId,
        since: Option<NaiveDate>,
    ) -> Result<Vec<CompletionRecord>, LedgerError>;

    /// Count the user's non-archived habits
    ///
    /// This is the denominator for gold-star and percentage calculations.
    fn fetch_active_habit_count(&self, user_id: &UserId) -> Result<u32, LedgerError>;
}
