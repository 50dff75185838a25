//! Workout types and enums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of exercise session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Aerobic endurance training
    Cardio,
    /// Resistance and weight training
    Strength,
    /// Stretching and mobility work
    Flexibility,
    /// High-intensity interval training
    Hiit,
    /// Yoga practice
    Yoga,
}

impl WorkoutType {
    /// Get display name for the workout type.
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Strength => "Strength",
            WorkoutType::Flexibility => "Flexibility",
            WorkoutType::Hiit => "HIIT",
            WorkoutType::Yoga => "Yoga",
        }
    }

    /// Icon tag consumed by the presentation layer.
    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutType::Cardio => "heart.fill",
            WorkoutType::Strength => "dumbbell.fill",
            WorkoutType::Flexibility => "figure.walk",
            WorkoutType::Hiit => "bolt.fill",
            WorkoutType::Yoga => "figure.mind.and.body",
        }
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Time window for activity charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFrame {
    /// Last 7 days, one bucket per day
    Week,
    /// Last 30 days, one bucket per day
    Month,
    /// Last 12 months, one bucket per month
    Year,
}

impl TimeFrame {
    /// Get display name for the time frame.
    pub fn display_name(&self) -> &'static str {
        match self {
            TimeFrame::Week => "Week",
            TimeFrame::Month => "Month",
            TimeFrame::Year => "Year",
        }
    }
}

impl std::fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A completed exercise session.
///
/// Workouts are immutable by replacement: updates swap the whole record,
/// never individual fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Type of workout
    pub workout_type: WorkoutType,
    /// Duration in minutes (1-180)
    pub duration_minutes: u32,
    /// When the session took place
    pub date: DateTime<Utc>,
    /// Optional free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Workout {
    /// Create a new workout.
    pub fn new(
        name: String,
        workout_type: WorkoutType,
        duration_minutes: u32,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            workout_type,
            duration_minutes,
            date,
            notes: None,
        }
    }

    /// Validate duration value (1-180 minutes).
    pub fn validate_duration(minutes: u32) -> bool {
        (1..=180).contains(&minutes)
    }

    /// Validate display name (non-empty).
    pub fn validate_name(name: &str) -> bool {
        !name.trim().is_empty()
    }
}
