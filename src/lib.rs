// ABOUTME: Core library for the Game Changer fitness tracker
// ABOUTME: Streaks, goal calculators, auth, and dual-backend persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Game Changer Core
//!
//! The domain layer of a fitness tracking app: daily water and calorie
//! tracking, gym attendance with weekly goals, consecutive-day habit streaks,
//! and physiology-based goal calculators (Mifflin-St Jeor BMR).
//!
//! Persistence goes through one [`storage::StorageProvider`] trait with two
//! backends: a local SQLite key-value store, and a remote document store over
//! an HTTP Data API that transparently falls back to the local store when
//! unreachable. The backend is chosen once at startup from an explicit
//! [`config::StorageConfig`].
//!
//! ```no_run
//! use gamechanger_core::config::StorageConfig;
//! use gamechanger_core::storage::{Storage, StorageProvider};
//! use gamechanger_core::tracking::HabitTracker;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let storage = Storage::new(&StorageConfig::from_env()).await?;
//! let tracker = HabitTracker::new(storage.clone());
//! let streaks = tracker.streaks().await?;
//! println!("gym streak: {} days", streaks.gym);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod calculators;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod models;
pub mod reference;
pub mod storage;
pub mod tracking;

pub use auth::AuthService;
pub use config::{RemoteStoreConfig, StorageConfig};
pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{
    DailyGoals, DailyProgress, Gender, Message, NewUser, Program, ProgressUpdate, PublicUser,
    Streaks, User, UserInfo, WeeklyGoal, Workout,
};
pub use storage::{Storage, StorageProvider};
pub use tracking::{week_start, HabitTracker, WeeklyGymProgress};
