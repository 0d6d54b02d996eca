/// Streak calculation
///
/// This module computes current and longest streaks from an unordered
/// collection of calendar days. It is the single streak algorithm for the
/// whole crate: every call site that displays a streak goes through here,
/// so the same ledger always produces the same numbers.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::calendar;

/// Current and longest streak for one day set
///
/// Derived on demand from the completion ledger and never persisted; any
/// cached copy elsewhere is a display mirror, not a source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakResult {
    /// Consecutive days ending today or yesterday
    pub current: u32,
    /// Longest run of consecutive days anywhere in history
    pub longest: u32,
}

/// Compute streaks relative to the current local day
///
/// Input days may be unordered and may contain duplicates; neither affects
/// the result.
pub fn streaks(days: &[NaiveDate]) -> StreakResult {
    streaks_as_of(days, calendar::today())
}

/// Compute streaks relative to a pinned "today"
///
/// The current streak is alive iff the most recent completion is at most one
/// day old: the user hasn't necessarily acted yet today, so a completion
/// yesterday must not zero the streak at midnight.
pub fn streaks_as_of(days: &[NaiveDate], today: NaiveDate) -> StreakResult {
    // Deduplicate; duplicate entries must never inflate a streak.
    let unique: BTreeSet<NaiveDate> = days.iter().copied().collect();
    if unique.is_empty() {
        return StreakResult::default();
    }

    // Most recent first.
    let sorted: Vec<NaiveDate> = unique.into_iter().rev().collect();

    let mut current = 0;
    if calendar::days_between(today, sorted[0]) <= 1 {
        current = 1;
        for pair in sorted.windows(2) {
            if calendar::days_between(pair[0], pair[1]) == 1 {
                current += 1;
            } else {
                // A gap ends the backward scan; it does not reset the count.
                break;
            }
        }
    }

    // Longest streak scans the entire history, not just the trailing run.
    let mut longest = 1;
    let mut run = 1;
    for pair in sorted.windows(2) {
        if calendar::days_between(pair[0], pair[1]) == 1 {
            run += 1;
        } else {
            run = 1;
        }
        longest = longest.max(run);
    }

    StreakResult {
        current,
        longest: longest.max(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn days_ago(n: i64) -> NaiveDate {
        today() - Duration::days(n)
    }

    #[test]
    fn test_empty_input() {
        let result = streaks_as_of(&[], today());
        assert_eq!(result, StreakResult { current: 0, longest: 0 });
    }

    #[test]
    fn test_single_completion_today() {
        let result = streaks_as_of(&[today()], today());
        assert_eq!(result, StreakResult { current: 1, longest: 1 });
    }

    #[test]
    fn test_single_completion_yesterday_still_alive() {
        let result = streaks_as_of(&[days_ago(1)], today());
        assert_eq!(result, StreakResult { current: 1, longest: 1 });
    }

    #[test]
    fn test_single_stale_completion() {
        let result = streaks_as_of(&[days_ago(2)], today());
        assert_eq!(result, StreakResult { current: 0, longest: 1 });
    }

    #[test]
    fn test_three_consecutive_days_ending_today() {
        let days = [today(), days_ago(1), days_ago(2)];
        let result = streaks_as_of(&days, today());
        assert_eq!(result, StreakResult { current: 3, longest: 3 });
    }

    #[test]
    fn test_gap_in_history_ends_current_but_not_longest() {
        // today, today-1, then a gap at today-2, then today-3..today-5
        let days = [days_ago(5), days_ago(4), days_ago(3), days_ago(1), today()];
        let result = streaks_as_of(&days, today());
        assert_eq!(result.current, 2);
        assert_eq!(result.longest, 3);
    }

    #[test]
    fn test_stale_pair_has_zero_current() {
        let days = [days_ago(3), days_ago(2)];
        let result = streaks_as_of(&days, today());
        assert_eq!(result, StreakResult { current: 0, longest: 2 });
    }

    #[test]
    fn test_duplicates_never_inflate() {
        let days = [today(), today(), today(), days_ago(1), days_ago(1)];
        let result = streaks_as_of(&days, today());
        assert_eq!(result, StreakResult { current: 2, longest: 2 });
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let ordered = [days_ago(2), days_ago(1), today()];
        let shuffled = [days_ago(1), today(), days_ago(2)];

        assert_eq!(
            streaks_as_of(&ordered, today()),
            streaks_as_of(&shuffled, today())
        );
    }

    #[test]
    fn test_longest_examines_full_history() {
        // A 10-day run long ago must beat the short current run.
        let mut days: Vec<NaiveDate> = (100..110).map(days_ago).collect();
        days.push(today());
        days.push(days_ago(1));

        let result = streaks_as_of(&days, today());
        assert_eq!(result.current, 2);
        assert_eq!(result.longest, 10);
    }

    #[test]
    fn test_longest_never_below_current() {
        for offset in 0..30 {
            let days: Vec<NaiveDate> = (0..offset).map(days_ago).collect();
            let result = streaks_as_of(&days, today());
            assert!(result.longest >= result.current);
        }
    }
}
