/// In-memory completion ledger
///
/// A reference implementation of the ledger read contract backed by plain
/// collections. It models the write-side lifecycle the hosted store
/// provides: idempotent completion inserts, same-day un-marking, and habit
/// archival that keeps history but leaves the active count.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::domain::{CompletionRecord, Habit, HabitId, UserId};
use crate::ledger::{CompletionLedger, LedgerError};

#[derive(Debug, Default)]
struct UserData {
    habits: Vec<Habit>,
    // One entry per (habit, day); set semantics make re-marking a no-op.
    completions: HashSet<(HabitId, NaiveDate)>,
}

/// Ledger backed by in-memory collections
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    users: HashMap<UserId, UserData>,
}

impl InMemoryLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a habit for a user
    pub fn add_habit(&mut self, user_id: &UserId, habit: Habit) {
        tracing::debug!("Adding habit '{}' for user {}", habit.name, user_id);
        self.users.entry(user_id.clone()).or_default().habits.push(habit);
    }

    /// Archive a habit, keeping its completion history
    pub fn archive_habit(&mut self, user_id: &UserId, habit_id: &HabitId) -> Result<(), LedgerError> {
        let data = self.user_data_mut(user_id)?;

        let habit = data
            .habits
            .iter_mut()
            .find(|h| &h.id == habit_id)
            .ok_or_else(|| LedgerError::HabitNotFound {
                habit_id: habit_id.to_string(),
            })?;

        habit.archive();
        Ok(())
    }

    /// Mark a habit complete on a day
    ///
    /// Idempotent: marking an already-completed (habit, day) pair is a
    /// no-op, never an error. Returns whether a new record was created.
    pub fn mark_complete(
        &mut self,
        user_id: &UserId,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<bool, LedgerError> {
        let data = self.user_data_mut(user_id)?;

        if !data.habits.iter().any(|h| &h.id == habit_id) {
            return Err(LedgerError::HabitNotFound {
                habit_id: habit_id.to_string(),
            });
        }

        Ok(data.completions.insert((habit_id.clone(), date)))
    }

    /// Remove a completion, if present
    pub fn unmark_complete(
        &mut self,
        user_id: &UserId,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<bool, LedgerError> {
        let data = self.user_data_mut(user_id)?;
        Ok(data.completions.remove(&(habit_id.clone(), date)))
    }

    fn user_data(&self, user_id: &UserId) -> Result<&UserData, LedgerError> {
        self.users.get(user_id).ok_or_else(|| LedgerError::UserNotFound {
            user_id: user_id.to_string(),
        })
    }

    fn user_data_mut(&mut self, user_id: &UserId) -> Result<&mut UserData, LedgerError> {
        self.users
            .get_mut(user_id)
            .ok_or_else(|| LedgerError::UserNotFound {
                user_id: user_id.to_string(),
            })
    }
}

impl CompletionLedger for InMemoryLedger {
    fn fetch_completions(
        &self,
        user_id: &UserId,
        since: Option<NaiveDate>,
    ) -> Result<Vec<CompletionRecord>, LedgerError> {
        let data = self.user_data(user_id)?;

        Ok(data
            .completions
            .iter()
            .filter(|(_, date)| since.map_or(true, |s| *date >= s))
            .map(|(habit_id, date)| CompletionRecord::new(habit_id.clone(), user_id.clone(), *date))
            .collect())
    }

    fn fetch_active_habit_count(&self, user_id: &UserId) -> Result<u32, LedgerError> {
        let data = self.user_data(user_id)?;
        Ok(data.habits.iter().filter(|h| h.is_active()).count() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn setup() -> (InMemoryLedger, UserId, HabitId) {
        let mut ledger = InMemoryLedger::new();
        let user = UserId::new();
        let habit = Habit::new("Read".to_string(), day(1)).unwrap();
        let habit_id = habit.id.clone();
        ledger.add_habit(&user, habit);
        (ledger, user, habit_id)
    }

    #[test]
    fn test_mark_complete_is_idempotent() {
        let (mut ledger, user, habit_id) = setup();

        assert!(ledger.mark_complete(&user, &habit_id, day(10)).unwrap());
        // Re-marking the same day is a no-op, not an error.
        assert!(!ledger.mark_complete(&user, &habit_id, day(10)).unwrap());

        let records = ledger.fetch_completions(&user, None).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_unmark_removes_completion() {
        let (mut ledger, user, habit_id) = setup();

        ledger.mark_complete(&user, &habit_id, day(10)).unwrap();
        assert!(ledger.unmark_complete(&user, &habit_id, day(10)).unwrap());
        assert!(!ledger.unmark_complete(&user, &habit_id, day(10)).unwrap());

        assert!(ledger.fetch_completions(&user, None).unwrap().is_empty());
    }

    #[test]
    fn test_since_filters_older_completions() {
        let (mut ledger, user, habit_id) = setup();

        ledger.mark_complete(&user, &habit_id, day(5)).unwrap();
        ledger.mark_complete(&user, &habit_id, day(15)).unwrap();

        let records = ledger.fetch_completions(&user, Some(day(10))).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, day(15));
    }

    #[test]
    fn test_archive_keeps_history_but_drops_count() {
        let (mut ledger, user, habit_id) = setup();

        ledger.mark_complete(&user, &habit_id, day(10)).unwrap();
        ledger.archive_habit(&user, &habit_id).unwrap();

        assert_eq!(ledger.fetch_active_habit_count(&user).unwrap(), 0);
        assert_eq!(ledger.fetch_completions(&user, None).unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_user_is_an_error() {
        let ledger = InMemoryLedger::new();
        let result = ledger.fetch_completions(&UserId::new(), None);

        assert!(matches!(result, Err(LedgerError::UserNotFound { .. })));
    }

    #[test]
    fn test_unknown_habit_is_an_error() {
        let (mut ledger, user, _) = setup();
        let result = ledger.mark_complete(&user, &HabitId::new(), day(10));

        assert!(matches!(result, Err(LedgerError::HabitNotFound { .. })));
    }
}
