// ABOUTME: Persistence facade for all Game Changer entities
// ABOUTME: One trait, a local SQLite key-value implementation, and a remote Data API implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Storage
//!
//! All persistence goes through the [`StorageProvider`] trait. The backend is
//! chosen once at startup by [`Storage::new`] from an explicit
//! [`crate::config::StorageConfig`]; call sites never branch on whether the
//! remote store is configured.
//!
//! Contract shared by all implementations:
//! - every `get_*` returns a default value, never an error, when no record
//!   exists;
//! - `update_daily_progress` merges the partial update with the existing
//!   record instead of overwriting it;
//! - the remote implementation falls back to local storage on any remote
//!   failure, so a save propagates an error only when both paths fail.

use crate::models::{
    DailyGoals, DailyProgress, Message, ProgressUpdate, PublicUser, User, UserInfo, WeeklyGoal,
    Workout,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

pub mod factory;
pub mod local;
pub mod remote;

pub use factory::Storage;
pub use local::LocalStore;
pub use remote::RemoteStore;

/// Core persistence abstraction
///
/// All storage implementations must implement this trait to provide a
/// consistent interface for the application layer.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Descriptive string for the active backend
    fn backend_info(&self) -> &'static str;

    // ================================
    // Daily Goals
    // ================================

    /// Get the daily water/calorie targets, defaulting when unset
    async fn get_daily_goals(&self) -> Result<DailyGoals>;

    /// Save the daily water/calorie targets; negative targets are rejected
    async fn save_daily_goals(&self, goals: &DailyGoals) -> Result<()>;

    // ================================
    // Daily Progress
    // ================================

    /// Get the progress record for a date, zeroed when absent
    async fn get_daily_progress(&self, date: NaiveDate) -> Result<DailyProgress>;

    /// Merge a partial update into the record for a date, creating it lazily
    async fn update_daily_progress(&self, date: NaiveDate, update: &ProgressUpdate) -> Result<()>;

    /// Get every stored progress record keyed by date
    async fn all_daily_progress(&self) -> Result<HashMap<NaiveDate, DailyProgress>>;

    /// Get progress records within an inclusive date range, ascending
    async fn progress_history(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyProgress>>;

    // ================================
    // Workouts
    // ================================

    /// Get all workouts
    async fn get_workouts(&self) -> Result<Vec<Workout>>;

    /// Replace the full workout list
    async fn save_workouts(&self, workouts: &[Workout]) -> Result<()>;

    /// Upsert a single workout by id
    async fn save_workout(&self, workout: &Workout) -> Result<()>;

    /// Delete a workout by id
    async fn delete_workout(&self, workout_id: &str) -> Result<()>;

    // ================================
    // User Profile
    // ================================

    /// Get the profile attributes, defaulting when unset
    async fn get_user_info(&self) -> Result<UserInfo>;

    /// Save the profile attributes
    async fn save_user_info(&self, info: &UserInfo) -> Result<()>;

    // ================================
    // Weekly Goal & Gym Attendance
    // ================================

    /// Get the most recent weekly gym goal, if any
    async fn get_weekly_goal(&self) -> Result<Option<WeeklyGoal>>;

    /// Define the gym goal for a week; redefining within the same week overwrites
    async fn save_weekly_goal(&self, goal: u32, week_start: NaiveDate) -> Result<()>;

    /// Mark or unmark gym attendance for a date; unmarking removes the entry
    async fn mark_gym_attendance(&self, date: NaiveDate, attended: bool) -> Result<()>;

    /// Attendance for the 7 days starting at `week_start`, missing days false
    async fn gym_attendance_for_week(
        &self,
        week_start: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, bool>>;

    /// The full sparse attendance map
    async fn all_gym_attendance(&self) -> Result<HashMap<NaiveDate, bool>>;

    // ================================
    // Messages
    // ================================

    /// Conversation between two users, ascending by timestamp, either direction
    async fn get_messages(&self, user_a: &str, user_b: &str) -> Result<Vec<Message>>;

    /// Append a message
    async fn send_message(&self, message: &Message) -> Result<()>;

    // ================================
    // Accounts & Session
    // ================================

    /// Create a new user account
    async fn create_user(&self, user: &User) -> Result<()>;

    /// Look up an account by email
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// The persisted logged-in session, if any
    async fn current_user(&self) -> Result<Option<PublicUser>>;

    /// Persist the logged-in session
    async fn set_current_user(&self, user: &PublicUser) -> Result<()>;

    /// Clear the logged-in session
    async fn clear_current_user(&self) -> Result<()>;

    /// Email remembered across sign-outs, if any
    async fn last_email(&self) -> Result<Option<String>>;

    /// Remember or forget the last used email
    async fn set_last_email(&self, email: Option<&str>) -> Result<()>;
}
