// ABOUTME: Domain models for the Game Changer core
// ABOUTME: Progress records, goals, workouts, users, and chat messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Data Models
//!
//! Every persisted entity is an explicit struct, with serde attributes
//! matching the camelCase document shapes the remote store holds. Dates are
//! always [`chrono::NaiveDate`] and serialize as ISO `YYYY-MM-DD`; there is
//! deliberately no second "today" representation.

mod message;
mod progress;
mod user;
mod workout;

pub use message::{Message, MessageKind};
pub use progress::{DailyGoals, DailyProgress, ProgressUpdate, Streaks, WeeklyGoal};
pub use user::{Gender, NewUser, Program, PublicUser, User, UserInfo};
pub(crate) use user::new_user_id;
pub use workout::{Exercise, ExerciseSet, Workout};
