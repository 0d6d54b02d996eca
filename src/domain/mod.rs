/// Domain module containing core data types and calendar logic
///
/// This module defines the core entities (CompletionRecord, Habit) and the
/// calendar-day utilities every other layer builds on.

pub mod calendar;
pub mod habit;
pub mod record;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use record::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid value: {message}")]
    InvalidValue { message: String },
}
