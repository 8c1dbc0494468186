// ABOUTME: Pure calculation modules with no storage dependencies
// ABOUTME: Goal targets (BMR-based) and habit streak derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Calculators
//!
//! Stateless functions: everything here is a pure derivation over its inputs
//! and is recomputed from scratch on every call.

pub mod goal_calculator;
pub mod streaks;
