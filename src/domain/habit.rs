/// Habit entity
///
/// The stats engine only cares about habits as grouping keys and as the
/// source of the active-habit denominator, so this struct is deliberately
/// slim: a name, a creation day, and an archived flag. Archiving a habit
/// removes it from denominators while leaving its completion history intact.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, HabitId};

/// A habit the user tracks daily
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read for 30min")
    pub name: String,
    /// Local calendar day the habit was created
    pub created_on: NaiveDate,
    /// Archived habits keep their history but leave the active count
    pub archived: bool,
}

impl Habit {
    /// Create a new active habit with validation
    pub fn new(name: String, created_on: NaiveDate) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;

        Ok(Self {
            id: HabitId::new(),
            name,
            created_on,
            archived: false,
        })
    }

    /// Create a habit from existing data (used when loading exported data)
    pub fn from_existing(id: HabitId, name: String, created_on: NaiveDate, archived: bool) -> Self {
        Self {
            id,
            name,
            created_on,
            archived,
        }
    }

    /// Whether this habit counts toward active-habit denominators
    pub fn is_active(&self) -> bool {
        !self.archived
    }

    /// Archive this habit, keeping its completion history
    pub fn archive(&mut self) {
        self.archived = true;
    }

    /// Validate habit name according to business rules
    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(())
    }
}
