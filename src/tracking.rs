// ABOUTME: Habit tracking over the storage facade: streaks and weekly gym progress
// ABOUTME: Loads history once per call and feeds the pure streak calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Habit Tracking
//!
//! [`HabitTracker`] ties the storage facade to the pure calculators. Streaks
//! are derived, never stored: each call loads the goals, the full progress
//! history, and the attendance map in one pass each, then hands everything to
//! [`crate::calculators::streaks::calculate`].

use crate::calculators::streaks;
use crate::errors::AppResult;
use crate::models::Streaks;
use crate::storage::{Storage, StorageProvider};
use chrono::{Datelike, Duration, Local, NaiveDate};

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Weekly gym goal progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyGymProgress {
    /// Target number of visits, if a goal is set
    pub goal: Option<u32>,
    /// Visits recorded in the week so far
    pub attended: u32,
}

impl WeeklyGymProgress {
    /// Whether the goal is set and met
    pub fn achieved(&self) -> bool {
        self.goal.is_some_and(|goal| self.attended >= goal)
    }
}

/// Habit tracking service over the selected storage backend
#[derive(Clone)]
pub struct HabitTracker {
    storage: Storage,
}

impl HabitTracker {
    /// Create a tracker over the given storage
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Current streaks as of the local calendar date
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be loaded.
    pub async fn streaks(&self) -> AppResult<Streaks> {
        self.streaks_on(Local::now().date_naive()).await
    }

    /// Streaks as of an explicit date, for testing and backfills
    pub async fn streaks_on(&self, today: NaiveDate) -> AppResult<Streaks> {
        let goals = self.storage.get_daily_goals().await?;
        let history = self.storage.all_daily_progress().await?;
        let attendance = self.storage.all_gym_attendance().await?;
        Ok(streaks::calculate(&history, &attendance, &goals, today))
    }

    /// Gym visits recorded in the week starting at `week_start`
    pub async fn weekly_gym_count(&self, week_start: NaiveDate) -> AppResult<u32> {
        let week = self.storage.gym_attendance_for_week(week_start).await?;
        Ok(u32::try_from(week.values().filter(|attended| **attended).count()).unwrap_or(u32::MAX))
    }

    /// Goal-versus-actual for the week containing `date`
    ///
    /// The stored weekly goal only applies if it was defined for this same
    /// week; a stale goal from an earlier week reads as unset.
    pub async fn weekly_progress(&self, date: NaiveDate) -> AppResult<WeeklyGymProgress> {
        let monday = week_start(date);
        let goal = self
            .storage
            .get_weekly_goal()
            .await?
            .filter(|g| g.week_start == monday)
            .map(|g| g.goal);
        let attended = self.weekly_gym_count(monday).await?;
        Ok(WeeklyGymProgress { goal, attended })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2025-06-11 is a Wednesday.
        assert_eq!(week_start(date("2025-06-11")), date("2025-06-09"));
    }

    #[test]
    fn test_week_start_of_monday_is_itself() {
        assert_eq!(week_start(date("2025-06-09")), date("2025-06-09"));
    }

    #[test]
    fn test_week_start_of_sunday_is_previous_monday() {
        assert_eq!(week_start(date("2025-06-15")), date("2025-06-09"));
    }

    #[test]
    fn test_weekly_progress_achievement() {
        let unset = WeeklyGymProgress {
            goal: None,
            attended: 5,
        };
        assert!(!unset.achieved());

        let met = WeeklyGymProgress {
            goal: Some(3),
            attended: 3,
        };
        assert!(met.achieved());

        let unmet = WeeklyGymProgress {
            goal: Some(4),
            attended: 3,
        };
        assert!(!unmet.achieved());
    }
}
