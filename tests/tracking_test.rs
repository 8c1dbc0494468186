// ABOUTME: Integration tests for streak derivation and weekly gym progress
// ABOUTME: Drives HabitTracker end to end over a local store
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::{Duration, NaiveDate};
use gamechanger_core::models::ProgressUpdate;
use gamechanger_core::storage::{Storage, StorageProvider};
use gamechanger_core::tracking::{week_start, HabitTracker};
use gamechanger_core::StorageConfig;
use tempfile::TempDir;

async fn test_tracker() -> (HabitTracker, Storage, TempDir) {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}", dir.path().join("test.db").display());
    let storage = Storage::new(&StorageConfig::local_only(url)).await.unwrap();
    (HabitTracker::new(storage.clone()), storage, dir)
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[tokio::test]
async fn test_streaks_over_stored_history() {
    let (tracker, storage, _dir) = test_tracker().await;
    let today = date("2025-06-10");

    // Three days meeting the default goals, with gym visits on two of them.
    for i in 0..3 {
        let day = today - Duration::days(i);
        storage
            .update_daily_progress(day, &ProgressUpdate::water(2.0))
            .await
            .unwrap();
        storage
            .update_daily_progress(day, &ProgressUpdate::calories(2000.0))
            .await
            .unwrap();
    }
    storage.mark_gym_attendance(today, true).await.unwrap();
    storage
        .mark_gym_attendance(today - Duration::days(1), true)
        .await
        .unwrap();

    let streaks = tracker.streaks_on(today).await.unwrap();
    assert_eq!(streaks.drinking, 3);
    assert_eq!(streaks.eating, 3);
    assert_eq!(streaks.gym, 2);
}

#[tokio::test]
async fn test_unfinished_today_does_not_zero_streak() {
    let (tracker, storage, _dir) = test_tracker().await;
    let today = date("2025-06-10");

    for i in 1..4 {
        let day = today - Duration::days(i);
        storage
            .update_daily_progress(day, &ProgressUpdate::water(2.0))
            .await
            .unwrap();
    }

    let streaks = tracker.streaks_on(today).await.unwrap();
    assert_eq!(streaks.drinking, 3);
}

#[tokio::test]
async fn test_streaks_respect_custom_goals() {
    let (tracker, storage, _dir) = test_tracker().await;
    let today = date("2025-06-10");

    storage
        .save_daily_goals(&gamechanger_core::DailyGoals {
            water: 4.0,
            calories: 3000.0,
        })
        .await
        .unwrap();
    // 2.0 L is 50% of the raised target, below the 80% adherence bar.
    storage
        .update_daily_progress(today, &ProgressUpdate::water(2.0))
        .await
        .unwrap();

    let streaks = tracker.streaks_on(today).await.unwrap();
    assert_eq!(streaks.drinking, 0);
}

#[tokio::test]
async fn test_weekly_progress_counts_visits_in_week() {
    let (tracker, storage, _dir) = test_tracker().await;
    let wednesday = date("2025-06-11");
    let monday = week_start(wednesday);

    storage.save_weekly_goal(3, monday).await.unwrap();
    storage.mark_gym_attendance(monday, true).await.unwrap();
    storage
        .mark_gym_attendance(wednesday, true)
        .await
        .unwrap();
    // A visit from the previous week must not count.
    storage
        .mark_gym_attendance(monday - Duration::days(2), true)
        .await
        .unwrap();

    let progress = tracker.weekly_progress(wednesday).await.unwrap();
    assert_eq!(progress.goal, Some(3));
    assert_eq!(progress.attended, 2);
    assert!(!progress.achieved());
}

#[tokio::test]
async fn test_stale_weekly_goal_reads_as_unset() {
    let (tracker, storage, _dir) = test_tracker().await;
    let this_wednesday = date("2025-06-11");
    let previous_monday = date("2025-06-02");

    storage.save_weekly_goal(4, previous_monday).await.unwrap();

    let progress = tracker.weekly_progress(this_wednesday).await.unwrap();
    assert_eq!(progress.goal, None);
}
