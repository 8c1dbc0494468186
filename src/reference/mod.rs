// ABOUTME: Built-in reference tables for foods and exercises
// ABOUTME: Static lookup data; user-created entities live in storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Reference Data
//!
//! Static tables backing the food scanner and the exercise picker. Lookups
//! and searches are case-insensitive; nothing here touches storage.

pub mod exercises;
pub mod food;

pub use exercises::{all_exercises, categories, exercises_in_category, search_exercises};
pub use food::{all_foods, estimate_calories, find_food, search_foods};
