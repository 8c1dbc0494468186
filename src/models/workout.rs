// ABOUTME: Workout, exercise, and set models owned entirely by the user
// ABOUTME: Matches the camelCase document shape written by the workout builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One performed or planned set within an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSet {
    /// Repetitions
    pub reps: u32,
    /// Weight in kilograms
    pub weight: f64,
    /// Rest after the set, in seconds
    pub rest_time: u32,
}

/// An exercise with its default parameters and ordered sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Stable identifier within the workout
    pub id: String,
    /// Exercise name
    pub name: String,
    /// Default repetitions for a new set
    #[serde(default)]
    pub default_reps: u32,
    /// Default weight for a new set, in kilograms
    #[serde(default)]
    pub default_weight: f64,
    /// Default rest time for a new set, in seconds
    #[serde(default)]
    pub default_rest_time: u32,
    /// Optional illustration reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    /// Ordered sets
    #[serde(default)]
    pub series: Vec<ExerciseSet>,
}

/// A user-defined workout, created and edited from the workout builder
///
/// No versioning; saving overwrites the previous document with the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Stable identifier
    pub id: String,
    /// Workout name
    pub name: String,
    /// Ordered exercises
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    /// When the workout was first saved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Workout {
    /// Create an empty workout with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            exercises: Vec::new(),
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_round_trips_camel_case() {
        let mut workout = Workout::new("Push day");
        workout.exercises.push(Exercise {
            id: "ex-1".into(),
            name: "Bench press".into(),
            default_reps: 8,
            default_weight: 60.0,
            default_rest_time: 90,
            image_uri: None,
            series: vec![ExerciseSet {
                reps: 8,
                weight: 60.0,
                rest_time: 90,
            }],
        });

        let json = serde_json::to_value(&workout).unwrap();
        assert_eq!(json["exercises"][0]["defaultRestTime"], 90);
        assert_eq!(json["exercises"][0]["series"][0]["restTime"], 90);

        let back: Workout = serde_json::from_value(json).unwrap();
        assert_eq!(back, workout);
    }
}
