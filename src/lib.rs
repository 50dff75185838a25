//! FitTrack - Personal Fitness Tracking Data Model
//!
//! A single-user, single-device fitness tracking core: workout and goal
//! records, a state manager deriving goal progress and activity statistics
//! from the workout history, and a file-backed persistence round-trip.
//! Presentation layers subscribe to the tracker's change events and call
//! its operations; this crate carries all the state and policy.

pub mod goals;
pub mod storage;
pub mod tracker;
pub mod workouts;

// Re-export commonly used types
pub use goals::{Goal, GoalFilterOption, GoalSortOption, GoalType};
pub use storage::{JsonStore, StoreError, TrackerStore};
pub use tracker::{ActivityBucket, FitnessTracker, TrackerEvent};
pub use workouts::{TimeFrame, Workout, WorkoutType};
