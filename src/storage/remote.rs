// ABOUTME: Remote document-store implementation over the Mongo Atlas Data API
// ABOUTME: Tries the remote call first and falls back to local storage on any failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote document storage
//!
//! Every operation is a POST to `{api_url}/action/{name}` with a JSON body of
//! `{dataSource, database, collection, filter, ...}` and an `api-key` header.
//! Per-user documents are scoped by a device-generated `userId` injected into
//! every filter; the shared `users` collection is the one unscoped exception.
//!
//! Any remote failure - network, HTTP status, body parse - logs a warning and
//! falls back to the wrapped [`LocalStore`], so a save propagates an error
//! only when both paths fail. Session state (current user, last email) is
//! always local.

use super::{LocalStore, StorageProvider};
use crate::config::RemoteStoreConfig;
use crate::constants::collections;
use crate::errors::AppError;
use crate::models::{
    DailyGoals, DailyProgress, Message, ProgressUpdate, PublicUser, User, UserInfo, WeeklyGoal,
    Workout,
};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// Whether a filter is scoped by the device user id
#[derive(Clone, Copy, PartialEq, Eq)]
enum Scope {
    PerUser,
    Shared,
}

/// Remote document store with local fallback
#[derive(Clone)]
pub struct RemoteStore {
    client: reqwest::Client,
    config: RemoteStoreConfig,
    local: LocalStore,
}

impl RemoteStore {
    /// Wrap a local store with a configured remote backend
    pub fn new(config: RemoteStoreConfig, local: LocalStore) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            local,
        }
    }

    /// The wrapped local store
    pub fn local(&self) -> &LocalStore {
        &self.local
    }

    async fn action(
        &self,
        action: &str,
        collection: &str,
        filter: Value,
        extra: Value,
        scope: Scope,
    ) -> Result<Value> {
        let mut filter = match filter {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        if scope == Scope::PerUser {
            let user_id = self.local.device_user_id().await?;
            filter.insert("userId".into(), Value::String(user_id));
        }

        let mut body = Map::new();
        body.insert(
            "dataSource".into(),
            Value::String(self.config.data_source.clone()),
        );
        body.insert(
            "database".into(),
            Value::String(self.config.database.clone()),
        );
        body.insert("collection".into(), Value::String(collection.into()));
        body.insert("filter".into(), Value::Object(filter));
        if let Value::Object(extra) = extra {
            body.extend(extra);
        }

        let url = format!("{}/action/{action}", self.config.api_url);
        let response = self
            .client
            .post(&url)
            .header("api-key", &self.config.api_key)
            .json(&Value::Object(body))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(
                AppError::external_service("data API", format!("{status}: {text}")).into(),
            );
        }

        Ok(response.json().await?)
    }

    async fn find_one<T: DeserializeOwned>(
        &self,
        collection: &str,
        filter: Value,
        extra: Value,
        scope: Scope,
    ) -> Result<Option<T>> {
        let result = self
            .action("findOne", collection, filter, extra, scope)
            .await?;
        match result.get("document") {
            Some(Value::Null) | None => Ok(None),
            Some(doc) => Ok(Some(serde_json::from_value(doc.clone())?)),
        }
    }

    async fn find<T: DeserializeOwned>(
        &self,
        collection: &str,
        filter: Value,
        extra: Value,
        scope: Scope,
    ) -> Result<Vec<T>> {
        let result = self.action("find", collection, filter, extra, scope).await?;
        match result.get("documents") {
            Some(Value::Array(docs)) => docs
                .iter()
                .map(|d| serde_json::from_value(d.clone()).map_err(Into::into))
                .collect(),
            _ => Ok(Vec::new()),
        }
    }

    /// Upsert with `$set`, stamping `userId` and `updatedAt` into the document
    async fn upsert(&self, collection: &str, filter: Value, document: Value) -> Result<()> {
        let mut fields = match document {
            Value::Object(map) => map,
            other => return Err(anyhow!("upsert document must be an object, got {other}")),
        };
        fields.insert(
            "userId".into(),
            Value::String(self.local.device_user_id().await?),
        );
        fields.insert(
            "updatedAt".into(),
            Value::String(Utc::now().to_rfc3339()),
        );

        self.action(
            "updateOne",
            collection,
            filter,
            json!({ "update": { "$set": Value::Object(fields) }, "upsert": true }),
            Scope::PerUser,
        )
        .await?;
        Ok(())
    }

    // ================================
    // Remote paths, one per operation
    // ================================

    async fn remote_get_daily_goals(&self) -> Result<DailyGoals> {
        Ok(self
            .find_one(collections::DAILY_GOALS, json!({}), json!({}), Scope::PerUser)
            .await?
            .unwrap_or_default())
    }

    async fn remote_get_daily_progress(&self, date: NaiveDate) -> Result<DailyProgress> {
        Ok(self
            .find_one(
                collections::DAILY_PROGRESS,
                json!({ "date": date }),
                json!({}),
                Scope::PerUser,
            )
            .await?
            .unwrap_or_else(|| DailyProgress::empty(date)))
    }

    async fn remote_update_daily_progress(
        &self,
        date: NaiveDate,
        update: &ProgressUpdate,
    ) -> Result<()> {
        // Fetch-and-merge so fields absent from the update keep their value
        let mut record = self.remote_get_daily_progress(date).await?;
        record.apply(update);
        self.upsert(
            collections::DAILY_PROGRESS,
            json!({ "date": date }),
            serde_json::to_value(&record)?,
        )
        .await
    }

    async fn remote_all_daily_progress(&self) -> Result<HashMap<NaiveDate, DailyProgress>> {
        let records: Vec<DailyProgress> = self
            .find(
                collections::DAILY_PROGRESS,
                json!({}),
                json!({ "sort": { "date": -1 } }),
                Scope::PerUser,
            )
            .await?;
        Ok(records.into_iter().map(|p| (p.date, p)).collect())
    }

    async fn remote_progress_history(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyProgress>> {
        self.find(
            collections::DAILY_PROGRESS,
            json!({ "date": { "$gte": start, "$lte": end } }),
            json!({ "sort": { "date": 1 } }),
            Scope::PerUser,
        )
        .await
    }

    async fn remote_get_workouts(&self) -> Result<Vec<Workout>> {
        self.find(
            collections::WORKOUTS,
            json!({}),
            json!({ "sort": { "createdAt": -1 } }),
            Scope::PerUser,
        )
        .await
    }

    async fn remote_save_workouts(&self, workouts: &[Workout]) -> Result<()> {
        // Replace wholesale: clear this user's documents, then insert the new list
        self.action(
            "deleteMany",
            collections::WORKOUTS,
            json!({}),
            json!({}),
            Scope::PerUser,
        )
        .await?;

        if workouts.is_empty() {
            return Ok(());
        }

        let user_id = self.local.device_user_id().await?;
        let now = Utc::now().to_rfc3339();
        let documents: Vec<Value> = workouts
            .iter()
            .map(|w| {
                let mut doc = match serde_json::to_value(w) {
                    Ok(Value::Object(map)) => map,
                    _ => Map::new(),
                };
                doc.insert("userId".into(), Value::String(user_id.clone()));
                doc.entry("createdAt")
                    .or_insert_with(|| Value::String(now.clone()));
                doc.insert("updatedAt".into(), Value::String(now.clone()));
                Value::Object(doc)
            })
            .collect();

        self.action(
            "insertMany",
            collections::WORKOUTS,
            json!({}),
            json!({ "documents": documents }),
            Scope::PerUser,
        )
        .await?;
        Ok(())
    }

    async fn remote_save_workout(&self, workout: &Workout) -> Result<()> {
        self.upsert(
            collections::WORKOUTS,
            json!({ "id": workout.id }),
            serde_json::to_value(workout)?,
        )
        .await
    }

    async fn remote_delete_workout(&self, workout_id: &str) -> Result<()> {
        self.action(
            "deleteOne",
            collections::WORKOUTS,
            json!({ "id": workout_id }),
            json!({}),
            Scope::PerUser,
        )
        .await?;
        Ok(())
    }

    async fn remote_get_user_info(&self) -> Result<UserInfo> {
        Ok(self
            .find_one(collections::USER_INFO, json!({}), json!({}), Scope::PerUser)
            .await?
            .unwrap_or_default())
    }

    async fn remote_save_user_info(&self, info: &UserInfo) -> Result<()> {
        self.upsert(
            collections::USER_INFO,
            json!({}),
            serde_json::to_value(info)?,
        )
        .await
    }

    async fn remote_get_weekly_goal(&self) -> Result<Option<WeeklyGoal>> {
        self.find_one(
            collections::WEEKLY_GOALS,
            json!({}),
            json!({ "sort": { "weekStart": -1 } }),
            Scope::PerUser,
        )
        .await
    }

    async fn remote_save_weekly_goal(&self, goal: u32, week_start: NaiveDate) -> Result<()> {
        self.upsert(
            collections::WEEKLY_GOALS,
            json!({ "weekStart": week_start }),
            serde_json::to_value(WeeklyGoal::new(goal, week_start))?,
        )
        .await
    }

    async fn remote_mark_gym_attendance(&self, date: NaiveDate, attended: bool) -> Result<()> {
        if attended {
            self.upsert(
                collections::GYM_ATTENDANCE,
                json!({ "date": date }),
                json!({ "date": date, "attended": true }),
            )
            .await
        } else {
            self.action(
                "deleteOne",
                collections::GYM_ATTENDANCE,
                json!({ "date": date }),
                json!({}),
                Scope::PerUser,
            )
            .await?;
            Ok(())
        }
    }

    async fn remote_attendance_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HashMap<NaiveDate, bool>> {
        let docs: Vec<Value> = self
            .find(
                collections::GYM_ATTENDANCE,
                json!({ "date": { "$gte": start, "$lte": end } }),
                json!({}),
                Scope::PerUser,
            )
            .await?;
        Ok(Self::attendance_from_docs(&docs))
    }

    async fn remote_all_gym_attendance(&self) -> Result<HashMap<NaiveDate, bool>> {
        let docs: Vec<Value> = self
            .find(
                collections::GYM_ATTENDANCE,
                json!({}),
                json!({}),
                Scope::PerUser,
            )
            .await?;
        Ok(Self::attendance_from_docs(&docs))
    }

    fn attendance_from_docs(docs: &[Value]) -> HashMap<NaiveDate, bool> {
        docs.iter()
            .filter_map(|doc| {
                doc.get("date")
                    .and_then(Value::as_str)
                    .and_then(|s| s.parse().ok())
            })
            .map(|date| (date, true))
            .collect()
    }

    async fn remote_get_messages(&self, user_a: &str, user_b: &str) -> Result<Vec<Message>> {
        self.find(
            collections::MESSAGES,
            json!({ "$or": [
                { "senderId": user_a, "receiverId": user_b },
                { "senderId": user_b, "receiverId": user_a },
            ] }),
            json!({ "sort": { "timestamp": 1 } }),
            Scope::PerUser,
        )
        .await
    }

    async fn remote_send_message(&self, message: &Message) -> Result<()> {
        let mut doc = match serde_json::to_value(message)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        doc.insert(
            "createdAt".into(),
            Value::String(Utc::now().to_rfc3339()),
        );
        self.action(
            "insertOne",
            collections::MESSAGES,
            json!({}),
            json!({ "document": Value::Object(doc) }),
            Scope::PerUser,
        )
        .await?;
        Ok(())
    }

    async fn remote_create_user(&self, user: &User) -> Result<()> {
        self.action(
            "insertOne",
            collections::USERS,
            json!({}),
            json!({ "document": serde_json::to_value(user)? }),
            Scope::Shared,
        )
        .await?;
        Ok(())
    }

    async fn remote_get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.find_one(
            collections::USERS,
            json!({ "email": email }),
            json!({}),
            Scope::Shared,
        )
        .await
    }
}

/// Log the remote failure and continue on the local path
macro_rules! or_local {
    ($remote:expr, $local:expr) => {
        match $remote.await {
            Ok(value) => Ok(value),
            Err(error) => {
                warn!(%error, "remote store unavailable, falling back to local storage");
                $local.await
            }
        }
    };
}

#[async_trait]
impl StorageProvider for RemoteStore {
    fn backend_info(&self) -> &'static str {
        "remote document store (Data API) with local fallback"
    }

    async fn get_daily_goals(&self) -> Result<DailyGoals> {
        or_local!(self.remote_get_daily_goals(), self.local.get_daily_goals())
    }

    async fn save_daily_goals(&self, goals: &DailyGoals) -> Result<()> {
        goals.validate()?;
        or_local!(
            self.upsert(
                collections::DAILY_GOALS,
                json!({}),
                serde_json::to_value(goals)?
            ),
            self.local.save_daily_goals(goals)
        )
    }

    async fn get_daily_progress(&self, date: NaiveDate) -> Result<DailyProgress> {
        or_local!(
            self.remote_get_daily_progress(date),
            self.local.get_daily_progress(date)
        )
    }

    async fn update_daily_progress(&self, date: NaiveDate, update: &ProgressUpdate) -> Result<()> {
        update.validate()?;
        or_local!(
            self.remote_update_daily_progress(date, update),
            self.local.update_daily_progress(date, update)
        )
    }

    async fn all_daily_progress(&self) -> Result<HashMap<NaiveDate, DailyProgress>> {
        or_local!(
            self.remote_all_daily_progress(),
            self.local.all_daily_progress()
        )
    }

    async fn progress_history(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyProgress>> {
        or_local!(
            self.remote_progress_history(start, end),
            self.local.progress_history(start, end)
        )
    }

    async fn get_workouts(&self) -> Result<Vec<Workout>> {
        or_local!(self.remote_get_workouts(), self.local.get_workouts())
    }

    async fn save_workouts(&self, workouts: &[Workout]) -> Result<()> {
        or_local!(
            self.remote_save_workouts(workouts),
            self.local.save_workouts(workouts)
        )
    }

    async fn save_workout(&self, workout: &Workout) -> Result<()> {
        or_local!(
            self.remote_save_workout(workout),
            self.local.save_workout(workout)
        )
    }

    async fn delete_workout(&self, workout_id: &str) -> Result<()> {
        or_local!(
            self.remote_delete_workout(workout_id),
            self.local.delete_workout(workout_id)
        )
    }

    async fn get_user_info(&self) -> Result<UserInfo> {
        or_local!(self.remote_get_user_info(), self.local.get_user_info())
    }

    async fn save_user_info(&self, info: &UserInfo) -> Result<()> {
        or_local!(
            self.remote_save_user_info(info),
            self.local.save_user_info(info)
        )
    }

    async fn get_weekly_goal(&self) -> Result<Option<WeeklyGoal>> {
        or_local!(
            self.remote_get_weekly_goal(),
            self.local.get_weekly_goal()
        )
    }

    async fn save_weekly_goal(&self, goal: u32, week_start: NaiveDate) -> Result<()> {
        or_local!(
            self.remote_save_weekly_goal(goal, week_start),
            self.local.save_weekly_goal(goal, week_start)
        )
    }

    async fn mark_gym_attendance(&self, date: NaiveDate, attended: bool) -> Result<()> {
        or_local!(
            self.remote_mark_gym_attendance(date, attended),
            self.local.mark_gym_attendance(date, attended)
        )
    }

    async fn gym_attendance_for_week(
        &self,
        week_start: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, bool>> {
        let week_end = week_start + Duration::days(6);
        let attendance = or_local!(
            self.remote_attendance_in_range(week_start, week_end),
            self.local.all_gym_attendance()
        )?;

        let mut week = BTreeMap::new();
        for offset in 0..7 {
            let day = week_start + Duration::days(offset);
            week.insert(day, attendance.get(&day).copied().unwrap_or(false));
        }
        Ok(week)
    }

    async fn all_gym_attendance(&self) -> Result<HashMap<NaiveDate, bool>> {
        or_local!(
            self.remote_all_gym_attendance(),
            self.local.all_gym_attendance()
        )
    }

    async fn get_messages(&self, user_a: &str, user_b: &str) -> Result<Vec<Message>> {
        or_local!(
            self.remote_get_messages(user_a, user_b),
            self.local.get_messages(user_a, user_b)
        )
    }

    async fn send_message(&self, message: &Message) -> Result<()> {
        or_local!(
            self.remote_send_message(message),
            self.local.send_message(message)
        )
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        or_local!(
            self.remote_create_user(user),
            self.local.create_user(user)
        )
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        or_local!(
            self.remote_get_user_by_email(email),
            self.local.get_user_by_email(email)
        )
    }

    // Session state stays on the device even when the remote store is up.

    async fn current_user(&self) -> Result<Option<PublicUser>> {
        self.local.current_user().await
    }

    async fn set_current_user(&self, user: &PublicUser) -> Result<()> {
        self.local.set_current_user(user).await
    }

    async fn clear_current_user(&self) -> Result<()> {
        self.local.clear_current_user().await
    }

    async fn last_email(&self) -> Result<Option<String>> {
        self.local.last_email().await
    }

    async fn set_last_email(&self, email: Option<&str>) -> Result<()> {
        self.local.set_last_email(email).await
    }
}
