/// Daily aggregation of completions
///
/// This module turns a flat list of (habit, day) completions into per-day
/// distinct-habit counts and derives gold-star days, all-time averages, and
/// trailing-window completion rates from that aggregate.

use std::collections::{BTreeMap, HashSet};

use chrono::{Duration, NaiveDate};

use crate::domain::CompletionRecord;

/// Count distinct habits completed per calendar day
///
/// Duplicate (habit, date) pairs collapse to one, so upstream duplication
/// can never inflate a day's count. Days with no completions are absent
/// from the map.
pub fn aggregate_by_day(records: &[CompletionRecord]) -> BTreeMap<NaiveDate, u32> {
    let mut habits_per_day: BTreeMap<NaiveDate, HashSet<&crate::domain::HabitId>> = BTreeMap::new();

    for record in records {
        habits_per_day
            .entry(record.date)
            .or_default()
            .insert(&record.habit_id);
    }

    habits_per_day
        .into_iter()
        .map(|(day, habits)| (day, habits.len() as u32))
        .collect()
}

/// Count days where every habit was completed
///
/// A day earns a gold star when its distinct-habit count meets the
/// threshold, which defaults to the user's current active habit count.
/// Historical days are judged against today's count, not the count that
/// existed back then. With no active habits there is nothing to earn a
/// star for, so the answer is zero rather than every day.
pub fn gold_star_day_count(aggregate: &BTreeMap<NaiveDate, u32>, threshold: u32) -> u32 {
    if threshold == 0 {
        return 0;
    }

    aggregate.values().filter(|&&count| count >= threshold).count() as u32
}

/// Average completions per day with at least one completion
///
/// Days with zero completions are excluded from the denominator, not
/// treated as zero-count samples.
pub fn average_per_active_day(aggregate: &BTreeMap<NaiveDate, u32>) -> f64 {
    if aggregate.is_empty() {
        return 0.0;
    }

    let total: u32 = aggregate.values().sum();
    total as f64 / aggregate.len() as f64
}

/// Completion rate over a trailing window, as a rounded 0-100 percentage
///
/// Restricts the aggregate to the last `window_days` days inclusive of
/// `as_of`, takes each active day's `count / habit_count` ratio (capped at
/// 1.0, since archived habits can leave historical counts above today's
/// denominator), and averages the ratios. Days inside the window with no
/// activity are excluded from the average, consistent with the all-time
/// policy.
pub fn trailing_window_rate(
    aggregate: &BTreeMap<NaiveDate, u32>,
    window_days: u32,
    habit_count: u32,
    as_of: NaiveDate,
) -> u8 {
    if window_days == 0 || habit_count == 0 {
        return 0;
    }

    let window_start = as_of - Duration::days(window_days as i64 - 1);

    let mut ratio_sum = 0.0;
    let mut active_days = 0u32;
    for (_, &count) in aggregate.range(window_start..=as_of) {
        ratio_sum += (count as f64 / habit_count as f64).min(1.0);
        active_days += 1;
    }

    if active_days == 0 {
        return 0;
    }

    (ratio_sum / active_days as f64 * 100.0).round() as u8
}
