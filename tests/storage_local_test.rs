// ABOUTME: Integration tests for the local SQLite key-value store
// ABOUTME: Covers defaults, merge semantics, workout upserts, and attendance
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::{NaiveDate, Utc};
use gamechanger_core::models::{
    DailyGoals, Message, ProgressUpdate, User, UserInfo, Workout,
};
use gamechanger_core::storage::{LocalStore, StorageProvider};
use tempfile::TempDir;

async fn test_store() -> (LocalStore, TempDir) {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}", dir.path().join("test.db").display());
    let store = LocalStore::new(&url).await.unwrap();
    (store, dir)
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[tokio::test]
async fn test_daily_goals_default_then_roundtrip() {
    let (store, _dir) = test_store().await;

    let goals = store.get_daily_goals().await.unwrap();
    assert_eq!(goals, DailyGoals::default());

    let custom = DailyGoals {
        water: 2.5,
        calories: 2200.0,
    };
    store.save_daily_goals(&custom).await.unwrap();
    assert_eq!(store.get_daily_goals().await.unwrap(), custom);
}

#[tokio::test]
async fn test_daily_progress_defaults_to_zero() {
    let (store, _dir) = test_store().await;
    let day = date("2025-06-10");

    let progress = store.get_daily_progress(day).await.unwrap();
    assert_eq!(progress.date, day);
    assert_eq!(progress.water, 0.0);
    assert_eq!(progress.calories, 0.0);
}

#[tokio::test]
async fn test_partial_update_preserves_other_field() {
    let (store, _dir) = test_store().await;
    let day = date("2025-06-10");

    store
        .update_daily_progress(day, &ProgressUpdate::calories(500.0))
        .await
        .unwrap();
    store
        .update_daily_progress(day, &ProgressUpdate::water(1.5))
        .await
        .unwrap();

    let progress = store.get_daily_progress(day).await.unwrap();
    assert_eq!(progress.calories, 500.0);
    assert_eq!(progress.water, 1.5);
}

#[tokio::test]
async fn test_negative_goals_are_rejected() {
    let (store, _dir) = test_store().await;

    let result = store
        .save_daily_goals(&DailyGoals {
            water: -1.0,
            calories: -500.0,
        })
        .await;
    assert!(result.is_err());

    // Nothing was written; reads still fall back to the defaults.
    assert_eq!(store.get_daily_goals().await.unwrap(), DailyGoals::default());
}

#[tokio::test]
async fn test_negative_update_is_rejected() {
    let (store, _dir) = test_store().await;
    let day = date("2025-06-10");

    let result = store
        .update_daily_progress(day, &ProgressUpdate::water(-1.0))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_progress_history_is_ascending_and_inclusive() {
    let (store, _dir) = test_store().await;
    for day in ["2025-06-12", "2025-06-10", "2025-06-11", "2025-06-01"] {
        store
            .update_daily_progress(date(day), &ProgressUpdate::water(1.0))
            .await
            .unwrap();
    }

    let history = store
        .progress_history(date("2025-06-10"), date("2025-06-12"))
        .await
        .unwrap();
    let dates: Vec<_> = history.iter().map(|p| p.date).collect();
    assert_eq!(
        dates,
        vec![date("2025-06-10"), date("2025-06-11"), date("2025-06-12")]
    );
}

#[tokio::test]
async fn test_workout_upsert_and_delete() {
    let (store, _dir) = test_store().await;

    let mut workout = Workout::new("Push day");
    store.save_workout(&workout).await.unwrap();
    assert_eq!(store.get_workouts().await.unwrap().len(), 1);

    workout.name = "Pull day".into();
    store.save_workout(&workout).await.unwrap();
    let workouts = store.get_workouts().await.unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].name, "Pull day");

    store.delete_workout(&workout.id).await.unwrap();
    assert!(store.get_workouts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_weekly_goal_overwrites_previous() {
    let (store, _dir) = test_store().await;
    let monday = date("2025-06-09");

    store.save_weekly_goal(3, monday).await.unwrap();
    store.save_weekly_goal(5, monday).await.unwrap();

    let goal = store.get_weekly_goal().await.unwrap().unwrap();
    assert_eq!(goal.goal, 5);
    assert_eq!(goal.week_start, monday);
}

#[tokio::test]
async fn test_week_attendance_fills_missing_days_false() {
    let (store, _dir) = test_store().await;
    let monday = date("2025-06-09");

    store
        .mark_gym_attendance(date("2025-06-10"), true)
        .await
        .unwrap();
    store
        .mark_gym_attendance(date("2025-06-12"), true)
        .await
        .unwrap();

    let week = store.gym_attendance_for_week(monday).await.unwrap();
    assert_eq!(week.len(), 7);
    assert_eq!(week[&date("2025-06-10")], true);
    assert_eq!(week[&date("2025-06-12")], true);
    assert_eq!(week[&date("2025-06-09")], false);
    assert_eq!(week[&date("2025-06-15")], false);
}

#[tokio::test]
async fn test_unmarking_attendance_removes_the_entry() {
    let (store, _dir) = test_store().await;
    let day = date("2025-06-10");

    store.mark_gym_attendance(day, true).await.unwrap();
    store.mark_gym_attendance(day, false).await.unwrap();

    let all = store.all_gym_attendance().await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_messages_filter_conversation_both_directions() {
    let (store, _dir) = test_store().await;

    store
        .send_message(&Message::text("ana", "bob", "hey"))
        .await
        .unwrap();
    store
        .send_message(&Message::text("bob", "ana", "hi"))
        .await
        .unwrap();
    store
        .send_message(&Message::text("ana", "carl", "yo"))
        .await
        .unwrap();

    let conversation = store.get_messages("ana", "bob").await.unwrap();
    assert_eq!(conversation.len(), 2);
    assert!(conversation.iter().all(|m| m.is_between("ana", "bob")));
}

#[tokio::test]
async fn test_user_info_roundtrip() {
    let (store, _dir) = test_store().await;

    let info = UserInfo {
        name: "Ana Silva".into(),
        weight: Some(62.0),
        height: Some(168.0),
        ..UserInfo::default()
    };
    store.save_user_info(&info).await.unwrap();

    let loaded = store.get_user_info().await.unwrap();
    assert_eq!(loaded.name, "Ana Silva");
    assert_eq!(loaded.weight, Some(62.0));
}

#[tokio::test]
async fn test_user_lookup_by_email() {
    let (store, _dir) = test_store().await;

    let user = User {
        id: "user_1".into(),
        email: "ana@example.com".into(),
        password_hash: "$2b$12$hash".into(),
        first_name: "Ana".into(),
        last_name: "Silva".into(),
        phone: String::new(),
        weight: None,
        height: None,
        age: None,
        gender: gamechanger_core::models::Gender::Female,
        created_at: Utc::now(),
    };
    store.create_user(&user).await.unwrap();

    let found = store.get_user_by_email("ana@example.com").await.unwrap();
    assert_eq!(found.unwrap().id, "user_1");
    assert!(store
        .get_user_by_email("missing@example.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_last_email_set_and_clear() {
    let (store, _dir) = test_store().await;

    store.set_last_email(Some("ana@example.com")).await.unwrap();
    assert_eq!(
        store.last_email().await.unwrap().as_deref(),
        Some("ana@example.com")
    );

    store.set_last_email(None).await.unwrap();
    assert!(store.last_email().await.unwrap().is_none());
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}", dir.path().join("test.db").display());

    {
        let store = LocalStore::new(&url).await.unwrap();
        store
            .save_daily_goals(&DailyGoals {
                water: 3.0,
                calories: 2500.0,
            })
            .await
            .unwrap();
    }

    let store = LocalStore::new(&url).await.unwrap();
    let goals = store.get_daily_goals().await.unwrap();
    assert_eq!(goals.water, 3.0);
}
