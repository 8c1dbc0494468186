// ABOUTME: Built-in exercise table with category, icon, and description
// ABOUTME: Search spans name, category, and description; categories are sorted
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeSet;

/// One entry in the built-in exercise table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseEntry {
    /// Display name
    pub name: &'static str,
    /// Muscle group or modality
    pub category: &'static str,
    /// Emoji shown next to the name
    pub icon: &'static str,
    /// One-line description
    pub description: &'static str,
}

static EXERCISES: &[ExerciseEntry] = &[
    ExerciseEntry {
        name: "Bench press",
        category: "Chest",
        icon: "🏋️",
        description: "Barbell press for chest development",
    },
    ExerciseEntry {
        name: "Squat",
        category: "Legs",
        icon: "🦵",
        description: "Compound lift for quads and glutes",
    },
    ExerciseEntry {
        name: "Deadlift",
        category: "Back",
        icon: "💪",
        description: "Full-body lift for the back and legs",
    },
    ExerciseEntry {
        name: "Overhead press",
        category: "Shoulders",
        icon: "💪",
        description: "Standing barbell press for the shoulders",
    },
    ExerciseEntry {
        name: "Pull-ups",
        category: "Back",
        icon: "🤸",
        description: "Bodyweight pull for the back and biceps",
    },
    ExerciseEntry {
        name: "Push-ups",
        category: "Chest",
        icon: "🏃",
        description: "Bodyweight press for the chest",
    },
    ExerciseEntry {
        name: "Lunges",
        category: "Legs",
        icon: "🚶",
        description: "Unilateral movement for legs and glutes",
    },
    ExerciseEntry {
        name: "Biceps curl",
        category: "Biceps",
        icon: "💪",
        description: "Isolation movement for the biceps",
    },
    ExerciseEntry {
        name: "Triceps extension",
        category: "Triceps",
        icon: "💪",
        description: "Isolation movement for the triceps",
    },
    ExerciseEntry {
        name: "Leg raises",
        category: "Abs",
        icon: "🤸",
        description: "Hanging or lying raise for the abdominals",
    },
    ExerciseEntry {
        name: "Plank",
        category: "Abs",
        icon: "🧘",
        description: "Isometric hold for core stability",
    },
    ExerciseEntry {
        name: "Dips",
        category: "Triceps",
        icon: "🤸",
        description: "Bodyweight press for triceps and shoulders",
    },
    ExerciseEntry {
        name: "Barbell row",
        category: "Back",
        icon: "🚣",
        description: "Horizontal pull for the back and biceps",
    },
    ExerciseEntry {
        name: "Leg press",
        category: "Legs",
        icon: "🦵",
        description: "Machine press for the legs",
    },
    ExerciseEntry {
        name: "Incline bench press",
        category: "Chest",
        icon: "🏋️",
        description: "Incline press for the upper chest",
    },
    ExerciseEntry {
        name: "Calf raises",
        category: "Calves",
        icon: "🦵",
        description: "Standing raise for the calves",
    },
    ExerciseEntry {
        name: "Crunches",
        category: "Abs",
        icon: "🤸",
        description: "Floor movement for the abdominals",
    },
    ExerciseEntry {
        name: "Burpees",
        category: "Cardio",
        icon: "🏃",
        description: "Full-body conditioning movement",
    },
    ExerciseEntry {
        name: "Mountain climbers",
        category: "Cardio",
        icon: "🏃",
        description: "Dynamic core and cardio movement",
    },
    ExerciseEntry {
        name: "Jumping jacks",
        category: "Cardio",
        icon: "🤸",
        description: "Simple full-body cardio movement",
    },
];

/// Every exercise in the table, in display order
pub fn all_exercises() -> &'static [ExerciseEntry] {
    EXERCISES
}

/// Case-insensitive search across name, category, and description
pub fn search_exercises(query: &str) -> Vec<&'static ExerciseEntry> {
    let query = query.to_lowercase();
    EXERCISES
        .iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&query)
                || e.category.to_lowercase().contains(&query)
                || e.description.to_lowercase().contains(&query)
        })
        .collect()
}

/// Exercises in an exact category
pub fn exercises_in_category(category: &str) -> Vec<&'static ExerciseEntry> {
    EXERCISES.iter().filter(|e| e.category == category).collect()
}

/// All distinct categories, sorted alphabetically
pub fn categories() -> Vec<&'static str> {
    EXERCISES
        .iter()
        .map(|e| e.category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
