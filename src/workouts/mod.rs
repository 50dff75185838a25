//! Workout module for completed exercise sessions.

pub mod types;

pub use types::{TimeFrame, Workout, WorkoutType};
