//! Integration tests for tracker mutation and recompute behaviour against
//! the file-backed store.

use chrono::{DateTime, Duration, Utc};
use fittrack::{
    FitnessTracker, Goal, GoalType, JsonStore, TimeFrame, TrackerEvent, Workout, WorkoutType,
};

fn tracker_in(dir: &tempfile::TempDir) -> FitnessTracker {
    FitnessTracker::load(Box::new(JsonStore::new(dir.path())))
}

fn workout(name: &str, minutes: u32, date: DateTime<Utc>) -> Workout {
    Workout::new(name.to_string(), WorkoutType::Hiit, minutes, date)
}

fn goal(title: &str, goal_type: GoalType, target: u32, due_in_days: i64) -> Goal {
    Goal::new(
        title.to_string(),
        goal_type,
        target,
        Utc::now() + Duration::days(due_in_days),
    )
}

#[test]
fn test_goal_completion_scenario_across_sessions() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let now = Utc::now();

    // Session one: a count goal and two of the three workouts it needs
    {
        let mut tracker = tracker_in(&dir);
        tracker.add_goal(goal("Three this week", GoalType::WorkoutCount, 3, 7));
        tracker.add_workout(workout("First", 30, now - Duration::hours(5)));
        tracker.add_workout(workout("Second", 30, now - Duration::hours(4)));

        assert!(!tracker.goals()[0].is_completed);
    }

    // Session two: restore and finish the goal
    {
        let mut tracker = tracker_in(&dir);
        assert_eq!(tracker.workouts().len(), 2);
        assert_eq!(tracker.goals()[0].manual_progress, Some(2.0 / 3.0));

        tracker.add_workout(workout("Third", 30, now - Duration::hours(3)));
        assert!(tracker.goals()[0].is_completed);
        assert_eq!(tracker.goal_progress(&tracker.goals()[0]), 1.0);
    }

    // Session three: completion survived the round trip
    {
        let tracker = tracker_in(&dir);
        assert!(tracker.goals()[0].is_completed);
    }
}

#[test]
fn test_minutes_and_calories_derivations() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut tracker = tracker_in(&dir);
    let now = Utc::now();

    tracker.add_goal(goal("150 minutes", GoalType::MinutesExercised, 150, 7));
    tracker.add_goal(goal("1000 calories", GoalType::CaloriesBurned, 1000, 7));

    for i in 0..3 {
        tracker.add_workout(workout("Hour", 60, now - Duration::hours(i)));
    }

    // 180/150 minutes clamps to 1.0; 180 min * 5 kcal = 900/1000 calories
    assert_eq!(tracker.goals()[0].manual_progress, Some(1.0));
    assert!(tracker.goals()[0].is_completed);
    assert_eq!(tracker.goals()[1].manual_progress, Some(0.9));
    assert!(!tracker.goals()[1].is_completed);
}

#[test]
fn test_manual_override_then_workout_mutation_takes_over() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut tracker = tracker_in(&dir);

    tracker.add_goal(goal("Ten sessions", GoalType::WorkoutCount, 10, 7));
    let id = tracker.goals()[0].id;

    assert!(tracker.set_goal_progress(id, 0.7));
    assert_eq!(tracker.goal_progress(&tracker.goals()[0]), 0.7);

    // The next workout mutation's recompute pass overwrites the override
    tracker.add_workout(workout("One", 30, Utc::now()));
    assert_eq!(tracker.goals()[0].manual_progress, Some(0.1));
}

#[test]
fn test_bulk_deletes() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut tracker = tracker_in(&dir);
    let now = Utc::now();

    for i in 0..4 {
        tracker.add_workout(workout("Session", 30, now - Duration::days(i)));
    }
    let doomed: Vec<_> = tracker.workouts()[..2].iter().map(|w| w.id).collect();
    assert_eq!(tracker.delete_workouts(&doomed), 2);
    assert_eq!(tracker.workouts().len(), 2);

    tracker.add_goal(goal("A", GoalType::WorkoutCount, 5, 7));
    tracker.add_goal(goal("B", GoalType::WorkoutCount, 5, 7));
    let goal_ids: Vec<_> = tracker.goals().iter().map(|g| g.id).collect();
    assert_eq!(tracker.delete_goals(&goal_ids), 2);
    assert!(tracker.goals().is_empty());
}

#[test]
fn test_dashboard_views_over_live_state() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut tracker = tracker_in(&dir);
    let now = Utc::now();

    for i in 0..6 {
        tracker.add_workout(workout("Session", 30, now - Duration::days(i * 3)));
    }

    assert_eq!(tracker.recent_workouts().len(), 5);
    assert_eq!(tracker.workouts_this_week(), 3);

    let buckets = tracker.activity_buckets(TimeFrame::Week);
    assert_eq!(buckets.len(), 7);
    assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), 3);
}

#[test]
fn test_events_fan_out_to_multiple_subscribers() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut tracker = tracker_in(&dir);

    let first = tracker.subscribe();
    let second = tracker.subscribe();

    tracker.add_workout(workout("Session", 30, Utc::now()));

    assert_eq!(first.try_recv(), Ok(TrackerEvent::WorkoutsChanged));
    assert_eq!(second.try_recv(), Ok(TrackerEvent::WorkoutsChanged));
}
