/// CompletionRecord entity for tracking habit completions
///
/// This module defines the CompletionRecord struct that represents one habit
/// being marked done on one calendar day. At most one record exists per
/// (habit, day) pair; the ledger enforces that invariant on insert.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{HabitId, UserId};

/// A record of one habit completed on one calendar day
///
/// The date carries no time-of-day component and is always the user-local
/// calendar day (see the calendar module). Records arriving from upstream
/// may be unordered and may contain duplicates; every consumer deduplicates
/// before counting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Which habit was completed
    pub habit_id: HabitId,
    /// Which user owns the habit
    pub user_id: UserId,
    /// The local calendar day the completion was for
    pub date: NaiveDate,
}

impl CompletionRecord {
    /// Create a new completion record
    pub fn new(habit_id: HabitId, user_id: UserId, date: NaiveDate) -> Self {
        Self {
            habit_id,
            user_id,
            date,
        }
    }
}
