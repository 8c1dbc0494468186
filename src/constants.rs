// ABOUTME: System-wide constants for storage keys, remote collections, and calculators
// ABOUTME: Single source of truth for key names and physiological coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Constants Module
//!
//! Storage key names, remote collection names, and the fixed coefficients used
//! by the goal and streak calculators.

/// Keys in the local key-value store
pub mod storage_keys {
    /// Daily water/calorie targets
    pub const DAILY_GOALS: &str = "daily_goals";
    /// User-defined workouts
    pub const WORKOUTS: &str = "workouts";
    /// Profile attributes
    pub const USER_INFO: &str = "user_info";
    /// Map of date to accumulated water/calorie intake
    pub const DAILY_PROGRESS: &str = "daily_progress";
    /// Chat messages
    pub const MESSAGES: &str = "messages";
    /// Weekly gym-visit target
    pub const WEEKLY_GOALS: &str = "weekly_goals";
    /// Map of date to gym attendance
    pub const GYM_ATTENDANCE: &str = "gym_attendance";
    /// Logged-in user session (stored without the password hash)
    pub const CURRENT_USER: &str = "current_user";
    /// Registered user accounts
    pub const USERS: &str = "users";
    /// Email remembered across sign-outs
    pub const LAST_EMAIL: &str = "last_email";
    /// Device-scoped identifier injected into remote filters
    pub const USER_ID: &str = "user_id";
}

/// Collection names in the remote document store
pub mod collections {
    pub const DAILY_GOALS: &str = "dailyGoals";
    pub const DAILY_PROGRESS: &str = "dailyProgress";
    pub const USER_INFO: &str = "userInfo";
    pub const WORKOUTS: &str = "workouts";
    pub const MESSAGES: &str = "messages";
    pub const WEEKLY_GOALS: &str = "weeklyGoals";
    pub const GYM_ATTENDANCE: &str = "gymAttendance";
    pub const USERS: &str = "users";
}

/// Streak calculation bounds
pub mod streaks {
    /// How far back the scan looks, in days
    pub const HORIZON_DAYS: i64 = 365;
    /// A day qualifies when intake reaches this share of the target
    pub const ADHERENCE_RATIO: f64 = 0.8;
}

/// Goal calculation coefficients
pub mod goals {
    /// Sedentary-to-moderately-active multiplier applied to BMR
    pub const ACTIVITY_FACTOR: f64 = 1.5;
    /// Daily deficit for weight loss (~0.5 kg per week)
    pub const WEIGHT_LOSS_DEFICIT_KCAL: f64 = 500.0;
    /// Daily surplus for muscle gain
    pub const WEIGHT_GAIN_SURPLUS_KCAL: f64 = 500.0;
    /// Calorie targets never drop below this floor
    pub const MIN_CALORIE_TARGET_KCAL: f64 = 1200.0;
    /// Fallback when weight or height is unknown
    pub const DEFAULT_CALORIE_TARGET_KCAL: f64 = 2000.0;
    /// Liters of water per kilogram of body weight
    pub const WATER_L_PER_KG: f64 = 0.035;
    /// Extra hydration while cutting
    pub const WEIGHT_LOSS_WATER_FACTOR: f64 = 1.1;
    /// Extra hydration while bulking
    pub const WEIGHT_GAIN_WATER_FACTOR: f64 = 1.15;
    /// Water targets never drop below this floor
    pub const MIN_WATER_TARGET_L: f64 = 1.5;
    /// Fallback when weight is unknown
    pub const DEFAULT_WATER_TARGET_L: f64 = 2.0;
    /// Assumed age when the profile has none
    pub const DEFAULT_AGE: u32 = 30;
}

/// Authentication rules
pub mod auth {
    /// Minimum password length accepted at sign-up
    pub const MIN_PASSWORD_LEN: usize = 6;
}
