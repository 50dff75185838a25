//! Derived workout statistics.
//!
//! Stateless projections over the current workout snapshot. Nothing here is
//! a maintained counter; every value is recomputed from the collection so it
//! cannot diverge from the source of truth.

use std::collections::HashSet;

use chrono::{DateTime, Datelike, Duration, Local, Months, NaiveDate, Utc};

use crate::workouts::types::{TimeFrame, Workout};

/// One bar of the activity chart: the bucket's start date and how many
/// workouts fall inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityBucket {
    /// Day (or first day of month for the year view) the bucket covers
    pub date: NaiveDate,
    /// Workouts in the bucket
    pub count: usize,
}

/// Workouts within the rolling 7-day window ending at `now`.
pub fn workouts_this_week(workouts: &[Workout], now: DateTime<Utc>) -> usize {
    let week_ago = now - Duration::days(7);
    workouts.iter().filter(|w| w.date >= week_ago).count()
}

/// Consecutive local-calendar days with at least one workout, ending on
/// `today`. Zero when there is no workout today.
pub fn current_streak(workouts: &[Workout], today: NaiveDate) -> u32 {
    let active_days: HashSet<NaiveDate> = workouts
        .iter()
        .map(|w| w.date.with_timezone(&Local).date_naive())
        .collect();

    let mut streak = 0;
    let mut day = today;
    while active_days.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }

    streak
}

/// Bucketed workout counts for the activity chart, oldest bucket first.
/// The newest bucket covers `today` (or the current month for the year
/// view).
pub fn activity_buckets(
    workouts: &[Workout],
    time_frame: TimeFrame,
    today: NaiveDate,
) -> Vec<ActivityBucket> {
    match time_frame {
        TimeFrame::Week => daily_buckets(workouts, 7, today),
        TimeFrame::Month => daily_buckets(workouts, 30, today),
        TimeFrame::Year => monthly_buckets(workouts, 12, today),
    }
}

fn daily_buckets(workouts: &[Workout], days: i64, today: NaiveDate) -> Vec<ActivityBucket> {
    let local_days: Vec<NaiveDate> = workouts
        .iter()
        .map(|w| w.date.with_timezone(&Local).date_naive())
        .collect();

    (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let count = local_days.iter().filter(|d| **d == date).count();
            ActivityBucket { date, count }
        })
        .collect()
}

fn monthly_buckets(workouts: &[Workout], months: u32, today: NaiveDate) -> Vec<ActivityBucket> {
    let local_days: Vec<NaiveDate> = workouts
        .iter()
        .map(|w| w.date.with_timezone(&Local).date_naive())
        .collect();

    let current_month = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);

    (0..months)
        .rev()
        .map(|offset| {
            let date = current_month
                .checked_sub_months(Months::new(offset))
                .unwrap_or(current_month);
            let count = local_days
                .iter()
                .filter(|d| d.year() == date.year() && d.month() == date.month())
                .count();
            ActivityBucket { date, count }
        })
        .collect()
}
