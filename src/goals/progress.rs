//! Goal progress derivation.
//!
//! Pure functions of a goal plus the workout history. The tracker decides
//! when derived values are written back into goal records; nothing here
//! mutates state.

use super::types::{Goal, GoalType};
use crate::workouts::types::Workout;

/// Calories credited per workout minute. Flat rate, no per-type weighting.
pub const CALORIES_PER_MINUTE: u64 = 5;

/// Derive progress from the workout history alone, ignoring any manual
/// override or completion flag.
///
/// Only workouts dated on or before the goal's deadline count. The result
/// is clamped to at most 1.0 and is never negative.
pub fn automatic_progress(goal: &Goal, workouts: &[Workout]) -> f64 {
    let relevant = workouts.iter().filter(|w| w.date <= goal.deadline);

    let achieved: u64 = match goal.goal_type {
        GoalType::WorkoutCount => relevant.count() as u64,
        GoalType::MinutesExercised => relevant.map(|w| u64::from(w.duration_minutes)).sum(),
        GoalType::CaloriesBurned => relevant
            .map(|w| u64::from(w.duration_minutes) * CALORIES_PER_MINUTE)
            .sum(),
    };

    (achieved as f64 / f64::from(goal.target)).min(1.0)
}

/// The progress value any reader of the goal observes:
///
/// 1. a completed goal reads as 1.0, whatever is stored;
/// 2. otherwise a manual override is returned verbatim;
/// 3. otherwise progress is derived from the workout history.
pub fn effective_progress(goal: &Goal, workouts: &[Workout]) -> f64 {
    if goal.is_completed {
        return 1.0;
    }

    if let Some(manual) = goal.manual_progress {
        return manual;
    }

    automatic_progress(goal, workouts)
}
