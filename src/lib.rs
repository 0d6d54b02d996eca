/// Public library interface for the habit stats engine
///
/// This crate turns a raw log of daily habit completions into streaks,
/// gold-star days, and completion-rate statistics. The computation core is
/// pure; the only boundaries with errors are date parsing, the completion
/// ledger, and file loading.

use std::path::Path;

use thiserror::Error;

// Internal modules
mod domain;
mod ledger;
mod stats;

// Re-export public modules and types
pub use domain::calendar;
pub use domain::{CompletionRecord, DomainError, Habit, HabitId, UserId};
pub use ledger::{CompletionLedger, InMemoryLedger, LedgerError};
pub use stats::{
    aggregate_by_day, average_per_active_day, compute_user_stats, compute_user_stats_as_of,
    gold_star_day_count, habit_streaks, habit_streaks_as_of, streaks, streaks_as_of,
    trailing_window_rate, user_stats, StreakResult, UserStats,
};

/// Errors that can occur at the crate boundary
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load completion records from a JSON export file
///
/// The file holds a JSON array of `{habit_id, user_id, date}` objects with
/// `YYYY-MM-DD` dates. Malformed dates or structure fail here rather than
/// producing misleading numbers downstream.
pub fn load_records(path: &Path) -> Result<Vec<CompletionRecord>, StatsError> {
    let contents = std::fs::read_to_string(path)?;
    let records: Vec<CompletionRecord> = serde_json::from_str(&contents)?;

    tracing::info!("Loaded {} completion records from {}", records.len(), path.display());
    Ok(records)
}
