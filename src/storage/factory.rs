// ABOUTME: Storage factory selecting the backend once at startup
// ABOUTME: Enum dispatch over the local and remote implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage factory
//!
//! [`Storage::new`] inspects the [`StorageConfig`] exactly once and returns
//! the matching backend. Enum dispatch (rather than `Box<dyn>`) keeps the
//! type `Clone` and avoids dynamic allocation on every call.

use super::{LocalStore, RemoteStore, StorageProvider};
use crate::config::StorageConfig;
use crate::models::{
    DailyGoals, DailyProgress, Message, ProgressUpdate, PublicUser, User, UserInfo, WeeklyGoal,
    Workout,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use tracing::info;

/// Storage backend selected at startup
#[derive(Clone)]
pub enum Storage {
    /// Local SQLite key-value store only
    Local(LocalStore),
    /// Remote document store with local fallback
    Remote(RemoteStore),
}

impl Storage {
    /// Open the storage backend described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the local database cannot be opened or migrated.
    /// Remote connectivity is not probed here; remote failures surface as
    /// per-call fallbacks.
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        let local = LocalStore::new(&config.database_url).await?;

        let storage = match &config.remote {
            Some(remote_config) => {
                Self::Remote(RemoteStore::new(remote_config.clone(), local))
            }
            None => Self::Local(local),
        };
        info!("storage initialized: {}", storage.backend_info());
        Ok(storage)
    }

    fn inner(&self) -> &dyn StorageProvider {
        match self {
            Self::Local(local) => local,
            Self::Remote(remote) => remote,
        }
    }
}

#[async_trait]
impl StorageProvider for Storage {
    fn backend_info(&self) -> &'static str {
        self.inner().backend_info()
    }

    async fn get_daily_goals(&self) -> Result<DailyGoals> {
        self.inner().get_daily_goals().await
    }

    async fn save_daily_goals(&self, goals: &DailyGoals) -> Result<()> {
        self.inner().save_daily_goals(goals).await
    }

    async fn get_daily_progress(&self, date: NaiveDate) -> Result<DailyProgress> {
        self.inner().get_daily_progress(date).await
    }

    async fn update_daily_progress(&self, date: NaiveDate, update: &ProgressUpdate) -> Result<()> {
        self.inner().update_daily_progress(date, update).await
    }

    async fn all_daily_progress(&self) -> Result<HashMap<NaiveDate, DailyProgress>> {
        self.inner().all_daily_progress().await
    }

    async fn progress_history(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyProgress>> {
        self.inner().progress_history(start, end).await
    }

    async fn get_workouts(&self) -> Result<Vec<Workout>> {
        self.inner().get_workouts().await
    }

    async fn save_workouts(&self, workouts: &[Workout]) -> Result<()> {
        self.inner().save_workouts(workouts).await
    }

    async fn save_workout(&self, workout: &Workout) -> Result<()> {
        self.inner().save_workout(workout).await
    }

    async fn delete_workout(&self, workout_id: &str) -> Result<()> {
        self.inner().delete_workout(workout_id).await
    }

    async fn get_user_info(&self) -> Result<UserInfo> {
        self.inner().get_user_info().await
    }

    async fn save_user_info(&self, info: &UserInfo) -> Result<()> {
        self.inner().save_user_info(info).await
    }

    async fn get_weekly_goal(&self) -> Result<Option<WeeklyGoal>> {
        self.inner().get_weekly_goal().await
    }

    async fn save_weekly_goal(&self, goal: u32, week_start: NaiveDate) -> Result<()> {
        self.inner().save_weekly_goal(goal, week_start).await
    }

    async fn mark_gym_attendance(&self, date: NaiveDate, attended: bool) -> Result<()> {
        self.inner().mark_gym_attendance(date, attended).await
    }

    async fn gym_attendance_for_week(
        &self,
        week_start: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, bool>> {
        self.inner().gym_attendance_for_week(week_start).await
    }

    async fn all_gym_attendance(&self) -> Result<HashMap<NaiveDate, bool>> {
        self.inner().all_gym_attendance().await
    }

    async fn get_messages(&self, user_a: &str, user_b: &str) -> Result<Vec<Message>> {
        self.inner().get_messages(user_a, user_b).await
    }

    async fn send_message(&self, message: &Message) -> Result<()> {
        self.inner().send_message(message).await
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        self.inner().create_user(user).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.inner().get_user_by_email(email).await
    }

    async fn current_user(&self) -> Result<Option<PublicUser>> {
        self.inner().current_user().await
    }

    async fn set_current_user(&self, user: &PublicUser) -> Result<()> {
        self.inner().set_current_user(user).await
    }

    async fn clear_current_user(&self) -> Result<()> {
        self.inner().clear_current_user().await
    }

    async fn last_email(&self) -> Result<Option<String>> {
        self.inner().last_email().await
    }

    async fn set_last_email(&self, email: Option<&str>) -> Result<()> {
        self.inner().set_last_email(email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;

    #[tokio::test]
    async fn test_local_only_config_selects_local_backend() {
        let storage = Storage::new(&StorageConfig::local_only("sqlite::memory:"))
            .await
            .unwrap();
        assert!(matches!(storage, Storage::Local(_)));
        assert!(storage.backend_info().contains("local"));
    }

    #[tokio::test]
    async fn test_remote_config_selects_remote_backend() {
        let config = StorageConfig {
            database_url: "sqlite::memory:".into(),
            remote: Some(crate::config::RemoteStoreConfig {
                api_url: "https://data.example.com/app/x/endpoint/data/v1".into(),
                api_key: "test-key".into(),
                data_source: "Cluster0".into(),
                database: "game_changer".into(),
            }),
        };
        let storage = Storage::new(&config).await.unwrap();
        assert!(matches!(storage, Storage::Remote(_)));
    }
}
