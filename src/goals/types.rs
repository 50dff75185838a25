//! Fitness goal type definitions.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fitness goal with a target to reach by a deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// Type of goal
    pub goal_type: GoalType,
    /// Target threshold (count, minutes, or calories depending on type)
    pub target: u32,
    /// Date the goal should be reached by; time-of-day is ignored for
    /// day comparisons
    pub deadline: DateTime<Utc>,
    /// Manually set progress fraction in [0, 1]. When present it is the
    /// authoritative progress value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_progress: Option<f64>,
    /// Whether the goal has been completed
    pub is_completed: bool,
}

impl Goal {
    /// Create a new goal. Progress starts unset and completion false;
    /// the tracker forces both to their initial values on insertion.
    pub fn new(title: String, goal_type: GoalType, target: u32, deadline: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            goal_type,
            target,
            deadline,
            manual_progress: None,
            is_completed: false,
        }
    }

    /// Whether the goal is still being worked toward.
    pub fn is_active(&self) -> bool {
        !self.is_completed
    }

    /// Days from today (local calendar, start of day) until the deadline.
    /// Negative when overdue, zero when due today.
    pub fn days_remaining(&self) -> i64 {
        self.days_remaining_from(Local::now().date_naive())
    }

    /// Days from the given date until the deadline.
    pub fn days_remaining_from(&self, today: NaiveDate) -> i64 {
        let deadline = self.deadline.with_timezone(&Local).date_naive();
        (deadline - today).num_days()
    }

    /// Validate target value (positive).
    pub fn validate_target(target: u32) -> bool {
        target > 0
    }

    /// Validate display title (non-empty).
    pub fn validate_title(title: &str) -> bool {
        !title.trim().is_empty()
    }
}

/// Type of fitness goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Number of workouts completed
    WorkoutCount,
    /// Total minutes exercised
    MinutesExercised,
    /// Total calories burned
    CaloriesBurned,
}

impl GoalType {
    /// Get display name for the goal type.
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalType::WorkoutCount => "Workouts Completed",
            GoalType::MinutesExercised => "Minutes Exercised",
            GoalType::CaloriesBurned => "Calories Burned",
        }
    }
}

impl std::fmt::Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Sort order for goal listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalSortOption {
    /// Soonest deadline first
    Deadline,
    /// Highest progress first
    Progress,
    /// Alphabetical by title
    Name,
}

impl GoalSortOption {
    /// Get display name for the sort option.
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalSortOption::Deadline => "Deadline",
            GoalSortOption::Progress => "Progress",
            GoalSortOption::Name => "Name",
        }
    }
}

impl std::fmt::Display for GoalSortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Completion filter for goal listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalFilterOption {
    /// Every goal
    All,
    /// Goals not yet completed
    Active,
    /// Completed goals
    Completed,
}

impl GoalFilterOption {
    /// Whether the given goal passes this filter.
    pub fn matches(&self, goal: &Goal) -> bool {
        match self {
            GoalFilterOption::All => true,
            GoalFilterOption::Active => !goal.is_completed,
            GoalFilterOption::Completed => goal.is_completed,
        }
    }

    /// Get display name for the filter option.
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalFilterOption::All => "All",
            GoalFilterOption::Active => "Active",
            GoalFilterOption::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for GoalFilterOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
