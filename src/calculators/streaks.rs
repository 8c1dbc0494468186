// ABOUTME: Consecutive-day streak derivation for gym, eating, and drinking habits
// ABOUTME: Backward scan from today, bounded at 365 days, with a grace rule for today
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Habit streak calculation
//!
//! A streak is the count of consecutive qualifying days ending at (or
//! including) today. The calculation is a pure function of the stored history:
//! nothing is persisted, and the result is recomputed from scratch on every
//! call.
//!
//! Termination rules, per habit:
//! - a day with no progress record is non-qualifying, not an error;
//! - the first non-qualifying *past* day stops that habit's scan;
//! - today never stops a scan: if today qualifies it counts, otherwise the
//!   scan continues into the past unharmed, so an unfinished day does not
//!   zero out a streak built on previous days.
//!
//! Each habit scans independently; one habit missing a day has no effect on
//! the other two.

use crate::constants::streaks::{ADHERENCE_RATIO, HORIZON_DAYS};
use crate::models::{DailyGoals, DailyProgress, Streaks};
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

/// Per-habit scan state
struct HabitScan {
    count: u32,
    active: bool,
}

impl HabitScan {
    fn new() -> Self {
        Self {
            count: 0,
            active: true,
        }
    }

    fn observe(&mut self, is_today: bool, qualified: bool) {
        if !self.active {
            return;
        }
        if qualified {
            self.count += 1;
        } else if !is_today {
            self.active = false;
        }
    }
}

/// Compute the three habit streaks as of `today`
///
/// `history` maps dates to progress records; `attendance` is the sparse
/// gym-attendance map where absence means not attended. The scan is bounded
/// at 365 days back.
pub fn calculate(
    history: &HashMap<NaiveDate, DailyProgress>,
    attendance: &HashMap<NaiveDate, bool>,
    goals: &DailyGoals,
    today: NaiveDate,
) -> Streaks {
    let mut gym = HabitScan::new();
    let mut eating = HabitScan::new();
    let mut drinking = HabitScan::new();

    let calorie_threshold = goals.calories * ADHERENCE_RATIO;
    let water_threshold = goals.water * ADHERENCE_RATIO;

    for i in 0..HORIZON_DAYS {
        let day = today - Duration::days(i);
        let is_today = i == 0;
        let progress = history.get(&day);

        let attended = attendance.get(&day).copied().unwrap_or(false);
        let ate_enough = progress.is_some_and(|p| p.calories >= calorie_threshold);
        let drank_enough = progress.is_some_and(|p| p.water >= water_threshold);

        gym.observe(is_today, attended);
        eating.observe(is_today, ate_enough);
        drinking.observe(is_today, drank_enough);

        if !gym.active && !eating.active && !drinking.active {
            break;
        }
    }

    Streaks {
        gym: gym.count,
        eating: eating.count,
        drinking: drinking.count,
    }
}
