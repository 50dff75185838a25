//! Tracker module: the state owner for workouts and goals.

pub mod manager;
pub mod stats;

pub use manager::{FitnessTracker, TrackerEvent};
pub use stats::ActivityBucket;
