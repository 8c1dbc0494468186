// ABOUTME: Daily progress records, daily/weekly goals, and streak results
// ABOUTME: Includes the partial-update merge semantics for daily progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Daily water and calorie targets, one singleton per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyGoals {
    /// Water target in liters
    pub water: f64,
    /// Calorie target in kcal
    pub calories: f64,
}

impl Default for DailyGoals {
    fn default() -> Self {
        Self {
            water: 2.0,
            calories: 2000.0,
        }
    }
}

impl DailyGoals {
    /// Reject negative targets before they reach storage
    pub fn validate(&self) -> AppResult<()> {
        if self.water < 0.0 {
            return Err(AppError::invalid_input("water target cannot be negative"));
        }
        if self.calories < 0.0 {
            return Err(AppError::invalid_input("calorie target cannot be negative"));
        }
        Ok(())
    }
}

/// Accumulated intake for one calendar date
///
/// Created lazily on the first update of a day and never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    /// Calendar date this record belongs to
    pub date: NaiveDate,
    /// Accumulated water in liters
    #[serde(default)]
    pub water: f64,
    /// Accumulated calories in kcal
    #[serde(default)]
    pub calories: f64,
}

impl DailyProgress {
    /// Empty record for a date, the default every `get` falls back to
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            water: 0.0,
            calories: 0.0,
        }
    }

    /// Merge a partial update into this record
    ///
    /// Fields absent from the update retain their prior value.
    pub fn apply(&mut self, update: &ProgressUpdate) {
        if let Some(water) = update.water {
            self.water = water;
        }
        if let Some(calories) = update.calories {
            self.calories = calories;
        }
    }
}

/// Partial update for a day's progress record
///
/// `None` fields are left untouched by [`DailyProgress::apply`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProgressUpdate {
    /// New accumulated water value in liters, if changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water: Option<f64>,
    /// New accumulated calorie value in kcal, if changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
}

impl ProgressUpdate {
    /// Set only the water field
    pub fn water(value: f64) -> Self {
        Self {
            water: Some(value),
            calories: None,
        }
    }

    /// Set only the calories field
    pub fn calories(value: f64) -> Self {
        Self {
            water: None,
            calories: Some(value),
        }
    }

    /// Reject negative values before they reach storage
    pub fn validate(&self) -> AppResult<()> {
        if self.water.is_some_and(|w| w < 0.0) {
            return Err(AppError::invalid_input("water intake cannot be negative"));
        }
        if self.calories.is_some_and(|c| c < 0.0) {
            return Err(AppError::invalid_input("calorie intake cannot be negative"));
        }
        Ok(())
    }
}

/// Gym-visit target for one week, anchored at its Monday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyGoal {
    /// Number of gym visits targeted for the week
    pub goal: u32,
    /// ISO date of the Monday anchoring the week
    pub week_start: NaiveDate,
    /// When the goal was defined
    pub created_at: DateTime<Utc>,
}

impl WeeklyGoal {
    /// Define a goal for the week starting at `week_start`
    pub fn new(goal: u32, week_start: NaiveDate) -> Self {
        Self {
            goal,
            week_start,
            created_at: Utc::now(),
        }
    }
}

/// Consecutive-day streak counts for the three tracked habits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streaks {
    /// Consecutive days of gym attendance
    pub gym: u32,
    /// Consecutive days reaching the calorie adherence threshold
    pub eating: u32,
    /// Consecutive days reaching the water adherence threshold
    pub drinking: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_progress_merge_keeps_absent_fields() {
        let mut progress = DailyProgress::empty(date("2025-06-02"));
        progress.apply(&ProgressUpdate::calories(100.0));
        progress.apply(&ProgressUpdate::water(1.0));

        assert_eq!(progress.calories, 100.0);
        assert_eq!(progress.water, 1.0);
    }

    #[test]
    fn test_progress_update_rejects_negative_values() {
        assert!(ProgressUpdate::water(-0.5).validate().is_err());
        assert!(ProgressUpdate::calories(-1.0).validate().is_err());
        assert!(ProgressUpdate::default().validate().is_ok());
    }

    #[test]
    fn test_daily_goals_defaults() {
        let goals = DailyGoals::default();
        assert_eq!(goals.water, 2.0);
        assert_eq!(goals.calories, 2000.0);
    }

    #[test]
    fn test_daily_goals_reject_negative_targets() {
        let negative_water = DailyGoals {
            water: -1.0,
            calories: 2000.0,
        };
        let negative_calories = DailyGoals {
            water: 2.0,
            calories: -500.0,
        };
        assert!(negative_water.validate().is_err());
        assert!(negative_calories.validate().is_err());
        assert!(DailyGoals::default().validate().is_ok());
    }

    #[test]
    fn test_weekly_goal_serializes_camel_case() {
        let goal = WeeklyGoal::new(3, date("2025-06-02"));
        let json = serde_json::to_value(&goal).unwrap();
        assert_eq!(json["weekStart"], "2025-06-02");
        assert_eq!(json["goal"], 3);
    }
}
