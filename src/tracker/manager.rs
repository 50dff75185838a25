//! Fitness tracker state manager.
//!
//! The tracker is the exclusive owner of the workout and goal collections.
//! Presentation layers read its derived views and call its mutation
//! operations; they never touch the collections directly. Every mutation
//! runs to completion synchronously, persists best-effort through the
//! injected store, and notifies subscribers.

use chrono::{Local, Utc};
use crossbeam::channel::{unbounded, Receiver, Sender};
use uuid::Uuid;

use crate::goals::progress::{automatic_progress, effective_progress};
use crate::goals::types::{Goal, GoalFilterOption, GoalSortOption};
use crate::storage::store::TrackerStore;
use crate::tracker::stats::{self, ActivityBucket};
use crate::workouts::types::{TimeFrame, Workout};

/// Number of workouts shown in the recent-activity view.
const RECENT_WORKOUTS: usize = 5;

/// Change notification sent to subscribers after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerEvent {
    /// The workout collection changed
    WorkoutsChanged,
    /// One or more goal records changed
    GoalsChanged,
}

/// Owner of the workout and goal collections.
///
/// Workouts are kept sorted descending by date after every mutation; goals
/// keep insertion order. Progress is stored on write: each workout mutation
/// sweeps the non-completed goals and persists their derived progress.
pub struct FitnessTracker {
    store: Box<dyn TrackerStore>,
    workouts: Vec<Workout>,
    goals: Vec<Goal>,
    subscribers: Vec<Sender<TrackerEvent>>,
}

impl FitnessTracker {
    /// Restore tracker state from the given store.
    ///
    /// A store that fails to load a collection contributes an empty one;
    /// the session starts regardless.
    pub fn load(store: Box<dyn TrackerStore>) -> Self {
        let workouts = store.load_workouts().unwrap_or_else(|e| {
            tracing::error!("Failed to load workouts: {}", e);
            Vec::new()
        });
        let goals = store.load_goals().unwrap_or_else(|e| {
            tracing::error!("Failed to load goals: {}", e);
            Vec::new()
        });

        tracing::info!("Loaded {} workouts and {} goals", workouts.len(), goals.len());

        let mut tracker = Self {
            store,
            workouts,
            goals,
            subscribers: Vec::new(),
        };
        tracker.sort_workouts();
        tracker
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&mut self) -> Receiver<TrackerEvent> {
        let (sender, receiver) = unbounded();
        self.subscribers.push(sender);
        receiver
    }

    // ========== Workout Mutations ==========

    /// Insert a workout.
    pub fn add_workout(&mut self, workout: Workout) {
        self.workouts.push(workout);
        self.after_workout_change();
    }

    /// Replace the workout matching `workout.id`. Returns `false` without
    /// side effects if no such workout exists.
    pub fn update_workout(&mut self, workout: Workout) -> bool {
        let Some(index) = self.workouts.iter().position(|w| w.id == workout.id) else {
            tracing::warn!("Update for unknown workout {}", workout.id);
            return false;
        };

        self.workouts[index] = workout;
        self.after_workout_change();
        true
    }

    /// Remove the workout with the given id. Returns whether it existed.
    pub fn delete_workout(&mut self, id: Uuid) -> bool {
        self.delete_workouts(&[id]) > 0
    }

    /// Remove every workout whose id is in `ids`. Returns how many were
    /// removed.
    pub fn delete_workouts(&mut self, ids: &[Uuid]) -> usize {
        let before = self.workouts.len();
        self.workouts.retain(|w| !ids.contains(&w.id));
        let removed = before - self.workouts.len();

        if removed > 0 {
            self.after_workout_change();
        }
        removed
    }

    // ========== Goal Mutations ==========

    /// Insert a goal. A newly created goal always starts at zero progress
    /// and not completed, whatever the caller supplied.
    pub fn add_goal(&mut self, mut goal: Goal) {
        goal.manual_progress = Some(0.0);
        goal.is_completed = false;
        self.goals.push(goal);

        self.persist_goals();
        self.notify(TrackerEvent::GoalsChanged);
    }

    /// Replace the goal matching `goal.id`. Returns `false` without side
    /// effects if no such goal exists.
    pub fn update_goal(&mut self, goal: Goal) -> bool {
        let Some(index) = self.goals.iter().position(|g| g.id == goal.id) else {
            tracing::warn!("Update for unknown goal {}", goal.id);
            return false;
        };

        self.goals[index] = goal;
        self.persist_goals();
        self.notify(TrackerEvent::GoalsChanged);
        true
    }

    /// Remove the goal with the given id. Returns whether it existed.
    /// Removing a goal cannot affect any other goal's progress, so no
    /// recompute runs.
    pub fn delete_goal(&mut self, id: Uuid) -> bool {
        self.delete_goals(&[id]) > 0
    }

    /// Remove every goal whose id is in `ids`. Returns how many were
    /// removed.
    pub fn delete_goals(&mut self, ids: &[Uuid]) -> usize {
        let before = self.goals.len();
        self.goals.retain(|g| !ids.contains(&g.id));
        let removed = before - self.goals.len();

        if removed > 0 {
            self.persist_goals();
            self.notify(TrackerEvent::GoalsChanged);
        }
        removed
    }

    /// Manually set a goal's progress. The fraction is clamped to [0, 1],
    /// stored as the authoritative value, and completion follows from it.
    /// The override wins over automatic derivation until the goal or its
    /// workouts change again. Returns `false` if the goal does not exist.
    pub fn set_goal_progress(&mut self, id: Uuid, fraction: f64) -> bool {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) else {
            return false;
        };

        let fraction = fraction.clamp(0.0, 1.0);
        goal.manual_progress = Some(fraction);
        goal.is_completed = fraction >= 1.0;

        self.persist_goals();
        self.notify(TrackerEvent::GoalsChanged);
        true
    }

    /// Flip a goal's completion flag without touching its stored progress.
    /// While completed, the goal's effective progress reads 1.0 regardless
    /// of the stored value. Returns `false` if the goal does not exist.
    pub fn toggle_goal_completion(&mut self, id: Uuid) -> bool {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) else {
            return false;
        };

        goal.is_completed = !goal.is_completed;

        self.persist_goals();
        self.notify(TrackerEvent::GoalsChanged);
        true
    }

    // ========== Derived Views ==========

    /// All workouts, sorted descending by date.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// All goals, in insertion order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// The most recent workouts.
    pub fn recent_workouts(&self) -> &[Workout] {
        &self.workouts[..self.workouts.len().min(RECENT_WORKOUTS)]
    }

    /// Goals not yet completed, in insertion order.
    pub fn active_goals(&self) -> Vec<&Goal> {
        self.goals.iter().filter(|g| g.is_active()).collect()
    }

    /// Workouts within the rolling 7-day window ending now.
    pub fn workouts_this_week(&self) -> usize {
        stats::workouts_this_week(&self.workouts, Utc::now())
    }

    /// Consecutive local-calendar days with at least one workout, ending
    /// today.
    pub fn current_streak(&self) -> u32 {
        stats::current_streak(&self.workouts, Local::now().date_naive())
    }

    /// Bucketed workout counts for the activity chart, oldest first.
    pub fn activity_buckets(&self, time_frame: TimeFrame) -> Vec<ActivityBucket> {
        stats::activity_buckets(&self.workouts, time_frame, Local::now().date_naive())
    }

    /// A goal's progress as any reader should observe it, derived live
    /// against the current workout history.
    pub fn goal_progress(&self, goal: &Goal) -> f64 {
        effective_progress(goal, &self.workouts)
    }

    /// Workouts whose name contains the query, case-insensitively. An empty
    /// query returns everything.
    pub fn search_workouts(&self, query: &str) -> Vec<&Workout> {
        if query.trim().is_empty() {
            return self.workouts.iter().collect();
        }

        let needle = query.to_lowercase();
        self.workouts
            .iter()
            .filter(|w| w.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Goals filtered and sorted for listing. Sorting is stable, so ties
    /// keep insertion order.
    pub fn goals_view(&self, filter: GoalFilterOption, sort: GoalSortOption) -> Vec<&Goal> {
        let mut view: Vec<&Goal> = self.goals.iter().filter(|g| filter.matches(g)).collect();

        match sort {
            GoalSortOption::Deadline => view.sort_by_key(|g| g.deadline),
            GoalSortOption::Progress => view.sort_by(|a, b| {
                effective_progress(b, &self.workouts)
                    .total_cmp(&effective_progress(a, &self.workouts))
            }),
            GoalSortOption::Name => view.sort_by_key(|g| g.title.to_lowercase()),
        }

        view
    }

    // ========== Internals ==========

    fn sort_workouts(&mut self) {
        self.workouts.sort_by(|a, b| b.date.cmp(&a.date));
    }

    /// Re-sort, sweep goal progress, persist both collections, and notify.
    /// Runs after every workout-affecting mutation.
    fn after_workout_change(&mut self) {
        self.sort_workouts();
        let goals_changed = self.recompute_goal_progress();

        self.persist_workouts();
        if goals_changed {
            self.persist_goals();
        }

        self.notify(TrackerEvent::WorkoutsChanged);
        if goals_changed {
            self.notify(TrackerEvent::GoalsChanged);
        }
    }

    /// Store-on-write recompute pass: every non-completed goal gets its
    /// derived progress written into `manual_progress`, and completion
    /// follows from it. Completed goals are sticky and never touched.
    fn recompute_goal_progress(&mut self) -> bool {
        let mut changed = false;

        for goal in &mut self.goals {
            if goal.is_completed {
                continue;
            }

            let progress = automatic_progress(goal, &self.workouts);
            let completed = progress >= 1.0;

            if goal.manual_progress != Some(progress) || goal.is_completed != completed {
                goal.manual_progress = Some(progress);
                goal.is_completed = completed;
                changed = true;
            }
        }

        changed
    }

    /// Persistence is best-effort: the in-memory state stays authoritative
    /// for the running session and a failed write is never rolled back.
    fn persist_workouts(&self) {
        if let Err(e) = self.store.save_workouts(&self.workouts) {
            tracing::error!("Failed to save workouts: {}", e);
        }
    }

    fn persist_goals(&self) {
        if let Err(e) = self.store.save_goals(&self.goals) {
            tracing::error!("Failed to save goals: {}", e);
        }
    }

    fn notify(&mut self, event: TrackerEvent) {
        self.subscribers.retain(|sender| sender.send(event).is_ok());
    }
}
