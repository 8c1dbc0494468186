// ABOUTME: Local key-value store backed by a single SQLite table
// ABOUTME: String keys map to JSON-serialized values with atomic get/set
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local key-value storage
//!
//! Each storage key holds one JSON document (a scalar, a list, or a date-keyed
//! map). Get and set are single-statement atomic; there are deliberately no
//! multi-key transactional guarantees.

use super::StorageProvider;
use crate::constants::storage_keys;
use crate::models::{
    DailyGoals, DailyProgress, Message, ProgressUpdate, PublicUser, User, UserInfo, WeeklyGoal,
    Workout,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::{Row, SqlitePool};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// Local key-value store over SQLite
#[derive(Clone)]
pub struct LocalStore {
    pool: SqlitePool,
}

impl LocalStore {
    /// Open (and create if missing) the local store
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:")
            && !database_url.contains(":memory:")
            && !database_url.contains('?')
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options).await?;
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Run schema migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get("value")))
    }

    async fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_raw(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn put_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.put_raw(key, &serde_json::to_string(value)?).await
    }

    /// Device-scoped identifier used to scope remote documents
    ///
    /// Generated lazily on first use and persisted locally.
    pub(crate) async fn device_user_id(&self) -> Result<String> {
        if let Some(id) = self.get_raw(storage_keys::USER_ID).await? {
            return Ok(id);
        }
        let id = format!("user_{}", Uuid::new_v4());
        self.put_raw(storage_keys::USER_ID, &id).await?;
        Ok(id)
    }

    async fn progress_map(&self) -> Result<HashMap<NaiveDate, DailyProgress>> {
        Ok(self
            .get_json(storage_keys::DAILY_PROGRESS)
            .await?
            .unwrap_or_default())
    }

    async fn attendance_map(&self) -> Result<HashMap<NaiveDate, bool>> {
        Ok(self
            .get_json(storage_keys::GYM_ATTENDANCE)
            .await?
            .unwrap_or_default())
    }
}

#[async_trait]
impl StorageProvider for LocalStore {
    fn backend_info(&self) -> &'static str {
        "local key-value store (SQLite)"
    }

    async fn get_daily_goals(&self) -> Result<DailyGoals> {
        Ok(self
            .get_json(storage_keys::DAILY_GOALS)
            .await?
            .unwrap_or_default())
    }

    async fn save_daily_goals(&self, goals: &DailyGoals) -> Result<()> {
        goals.validate()?;
        self.put_json(storage_keys::DAILY_GOALS, goals).await
    }

    async fn get_daily_progress(&self, date: NaiveDate) -> Result<DailyProgress> {
        let map = self.progress_map().await?;
        Ok(map
            .get(&date)
            .cloned()
            .unwrap_or_else(|| DailyProgress::empty(date)))
    }

    async fn update_daily_progress(&self, date: NaiveDate, update: &ProgressUpdate) -> Result<()> {
        update.validate()?;
        let mut map = self.progress_map().await?;
        let record = map
            .entry(date)
            .or_insert_with(|| DailyProgress::empty(date));
        record.apply(update);
        self.put_json(storage_keys::DAILY_PROGRESS, &map).await
    }

    async fn all_daily_progress(&self) -> Result<HashMap<NaiveDate, DailyProgress>> {
        self.progress_map().await
    }

    async fn progress_history(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyProgress>> {
        let map = self.progress_map().await?;
        let mut records: Vec<DailyProgress> = map
            .into_values()
            .filter(|p| p.date >= start && p.date <= end)
            .collect();
        records.sort_by_key(|p| p.date);
        Ok(records)
    }

    async fn get_workouts(&self) -> Result<Vec<Workout>> {
        Ok(self
            .get_json(storage_keys::WORKOUTS)
            .await?
            .unwrap_or_default())
    }

    async fn save_workouts(&self, workouts: &[Workout]) -> Result<()> {
        self.put_json(storage_keys::WORKOUTS, &workouts).await
    }

    async fn save_workout(&self, workout: &Workout) -> Result<()> {
        let mut workouts = self.get_workouts().await?;
        match workouts.iter_mut().find(|w| w.id == workout.id) {
            Some(existing) => *existing = workout.clone(),
            None => workouts.push(workout.clone()),
        }
        self.save_workouts(&workouts).await
    }

    async fn delete_workout(&self, workout_id: &str) -> Result<()> {
        let mut workouts = self.get_workouts().await?;
        workouts.retain(|w| w.id != workout_id);
        self.save_workouts(&workouts).await
    }

    async fn get_user_info(&self) -> Result<UserInfo> {
        Ok(self
            .get_json(storage_keys::USER_INFO)
            .await?
            .unwrap_or_default())
    }

    async fn save_user_info(&self, info: &UserInfo) -> Result<()> {
        self.put_json(storage_keys::USER_INFO, info).await
    }

    async fn get_weekly_goal(&self) -> Result<Option<WeeklyGoal>> {
        self.get_json(storage_keys::WEEKLY_GOALS).await
    }

    async fn save_weekly_goal(&self, goal: u32, week_start: NaiveDate) -> Result<()> {
        self.put_json(storage_keys::WEEKLY_GOALS, &WeeklyGoal::new(goal, week_start))
            .await
    }

    async fn mark_gym_attendance(&self, date: NaiveDate, attended: bool) -> Result<()> {
        let mut attendance = self.attendance_map().await?;
        if attended {
            attendance.insert(date, true);
        } else {
            attendance.remove(&date);
        }
        self.put_json(storage_keys::GYM_ATTENDANCE, &attendance)
            .await
    }

    async fn gym_attendance_for_week(
        &self,
        week_start: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, bool>> {
        let attendance = self.attendance_map().await?;
        let mut week = BTreeMap::new();
        for offset in 0..7 {
            let day = week_start + Duration::days(offset);
            week.insert(day, attendance.get(&day).copied().unwrap_or(false));
        }
        Ok(week)
    }

    async fn all_gym_attendance(&self) -> Result<HashMap<NaiveDate, bool>> {
        self.attendance_map().await
    }

    async fn get_messages(&self, user_a: &str, user_b: &str) -> Result<Vec<Message>> {
        let all: Vec<Message> = self
            .get_json(storage_keys::MESSAGES)
            .await?
            .unwrap_or_default();
        let mut conversation: Vec<Message> = all
            .into_iter()
            .filter(|m| m.is_between(user_a, user_b))
            .collect();
        conversation.sort_by_key(|m| m.timestamp);
        Ok(conversation)
    }

    async fn send_message(&self, message: &Message) -> Result<()> {
        let mut all: Vec<Message> = self
            .get_json(storage_keys::MESSAGES)
            .await?
            .unwrap_or_default();
        all.push(message.clone());
        self.put_json(storage_keys::MESSAGES, &all).await
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let mut users: Vec<User> = self
            .get_json(storage_keys::USERS)
            .await?
            .unwrap_or_default();
        users.push(user.clone());
        self.put_json(storage_keys::USERS, &users).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users: Vec<User> = self
            .get_json(storage_keys::USERS)
            .await?
            .unwrap_or_default();
        Ok(users.into_iter().find(|u| u.email == email))
    }

    async fn current_user(&self) -> Result<Option<PublicUser>> {
        self.get_json(storage_keys::CURRENT_USER).await
    }

    async fn set_current_user(&self, user: &PublicUser) -> Result<()> {
        self.put_json(storage_keys::CURRENT_USER, user).await
    }

    async fn clear_current_user(&self) -> Result<()> {
        self.remove(storage_keys::CURRENT_USER).await
    }

    async fn last_email(&self) -> Result<Option<String>> {
        self.get_raw(storage_keys::LAST_EMAIL).await
    }

    async fn set_last_email(&self, email: Option<&str>) -> Result<()> {
        match email {
            Some(email) => self.put_raw(storage_keys::LAST_EMAIL, email).await,
            None => self.remove(storage_keys::LAST_EMAIL).await,
        }
    }
}
