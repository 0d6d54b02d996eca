/// Stats facade composing the streak and aggregation engines
///
/// This module is the single entry point for every consumer that displays
/// streaks or statistics. All call sites go through `compute_user_stats`
/// (or the ledger-backed `user_stats`), so the same underlying data always
/// yields identical numbers everywhere it is shown.

pub mod aggregate;
pub mod streak;

pub use aggregate::{aggregate_by_day, average_per_active_day, gold_star_day_count, trailing_window_rate};
pub use streak::{streaks, streaks_as_of, StreakResult};

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{calendar, CompletionRecord, HabitId, UserId};
use crate::ledger::{CompletionLedger, LedgerError};

/// Days covered by the weekly progress rate
const WEEKLY_WINDOW_DAYS: u32 = 7;

/// Composed statistics read model for one user
///
/// Entirely derived from the completion ledger; never persisted. An empty
/// ledger yields a well-defined all-zero value, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    /// Number of non-archived habits
    pub total_habits: u32,
    /// Distinct (habit, day) completions across all time
    pub total_completions: u32,
    /// Consecutive days with any habit done, ending today or yesterday
    pub current_streak: u32,
    /// Longest such run anywhere in history
    pub longest_streak: u32,
    /// Days where every active habit was completed
    pub gold_star_days: u32,
    /// Average completions per day with at least one completion
    pub avg_habits_per_day: f64,
    /// Trailing 7-day completion rate, 0-100
    pub weekly_progress: u8,
    /// Days with at least one completion
    pub total_active_days: u32,
    /// Distinct habits completed today
    pub completed_today: u32,
}

impl UserStats {
    /// The all-zero stats for a user with no completion history
    pub fn empty(active_habit_count: u32) -> Self {
        Self {
            total_habits: active_habit_count,
            total_completions: 0,
            current_streak: 0,
            longest_streak: 0,
            gold_star_days: 0,
            avg_habits_per_day: 0.0,
            weekly_progress: 0,
            total_active_days: 0,
            completed_today: 0,
        }
    }
}

/// Compute the full stats read model relative to the current local day
///
/// Pure and deterministic for a fixed day: no I/O, no shared state, safe to
/// call concurrently from any number of contexts.
pub fn compute_user_stats(records: &[CompletionRecord], active_habit_count: u32) -> UserStats {
    compute_user_stats_as_of(records, active_habit_count, calendar::today())
}

/// Compute the full stats read model relative to a pinned "today"
pub fn compute_user_stats_as_of(
    records: &[CompletionRecord],
    active_habit_count: u32,
    today: NaiveDate,
) -> UserStats {
    let aggregate = aggregate_by_day(records);

    // User-level streak: any habit done that day counts.
    let day_set: Vec<NaiveDate> = aggregate.keys().copied().collect();
    let streak = streaks_as_of(&day_set, today);

    UserStats {
        total_habits: active_habit_count,
        total_completions: aggregate.values().sum(),
        current_streak: streak.current,
        longest_streak: streak.longest,
        gold_star_days: gold_star_day_count(&aggregate, active_habit_count),
        avg_habits_per_day: average_per_active_day(&aggregate),
        weekly_progress: trailing_window_rate(
            &aggregate,
            WEEKLY_WINDOW_DAYS,
            active_habit_count,
            today,
        ),
        total_active_days: aggregate.len() as u32,
        completed_today: aggregate.get(&today).copied().unwrap_or(0),
    }
}

/// Compute per-habit streaks relative to the current local day
pub fn habit_streaks(records: &[CompletionRecord]) -> HashMap<HabitId, StreakResult> {
    habit_streaks_as_of(records, calendar::today())
}

/// Compute per-habit streaks relative to a pinned "today"
pub fn habit_streaks_as_of(
    records: &[CompletionRecord],
    today: NaiveDate,
) -> HashMap<HabitId, StreakResult> {
    let mut days_per_habit: HashMap<&HabitId, BTreeSet<NaiveDate>> = HashMap::new();
    for record in records {
        days_per_habit
            .entry(&record.habit_id)
            .or_default()
            .insert(record.date);
    }

    days_per_habit
        .into_iter()
        .map(|(habit_id, days)| {
            let days: Vec<NaiveDate> = days.into_iter().collect();
            (habit_id.clone(), streaks_as_of(&days, today))
        })
        .collect()
}

/// Fetch a user's ledger and compute their stats
///
/// This is the only path with I/O: one fetch per collaborator call, then
/// everything is delegated to the pure functions above. Fetch failures
/// propagate unchanged; there is no retry policy here.
pub fn user_stats<L: CompletionLedger>(
    ledger: &L,
    user_id: &UserId,
) -> Result<UserStats, LedgerError> {
    let records = ledger.fetch_completions(user_id, None)?;
    let active_habit_count = ledger.fetch_active_habit_count(user_id)?;

    tracing::debug!(
        "Computing stats for user {} from {} records ({} active habits)",
        user_id,
        records.len(),
        active_habit_count
    );

    Ok(compute_user_stats(&records, active_habit_count))
}
