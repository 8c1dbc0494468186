// ABOUTME: Built-in food table with approximate calories per 100 grams
// ABOUTME: Lookup, substring search, and portion-based calorie estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// One entry in the built-in food table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodEntry {
    /// Display name
    pub name: &'static str,
    /// Approximate calories per 100 g
    pub calories_per_100g: f64,
    /// Emoji shown next to the name
    pub icon: &'static str,
}

/// Approximate calorie table, per 100 g
static FOODS: &[FoodEntry] = &[
    FoodEntry { name: "Apple", calories_per_100g: 52.0, icon: "🍎" },
    FoodEntry { name: "Banana", calories_per_100g: 89.0, icon: "🍌" },
    FoodEntry { name: "Orange", calories_per_100g: 47.0, icon: "🍊" },
    FoodEntry { name: "Grilled chicken", calories_per_100g: 165.0, icon: "🍗" },
    FoodEntry { name: "Cooked rice", calories_per_100g: 130.0, icon: "🍚" },
    FoodEntry { name: "Cooked pasta", calories_per_100g: 131.0, icon: "🍝" },
    FoodEntry { name: "Bread", calories_per_100g: 265.0, icon: "🍞" },
    FoodEntry { name: "Egg", calories_per_100g: 155.0, icon: "🥚" },
    FoodEntry { name: "Salad", calories_per_100g: 15.0, icon: "🥗" },
    FoodEntry { name: "Pizza", calories_per_100g: 266.0, icon: "🍕" },
    FoodEntry { name: "Burger", calories_per_100g: 295.0, icon: "🍔" },
    FoodEntry { name: "Fries", calories_per_100g: 312.0, icon: "🍟" },
    FoodEntry { name: "Fish", calories_per_100g: 206.0, icon: "🐟" },
    FoodEntry { name: "Cheese", calories_per_100g: 113.0, icon: "🧀" },
    FoodEntry { name: "Yogurt", calories_per_100g: 59.0, icon: "🥛" },
    FoodEntry { name: "Vegetables", calories_per_100g: 25.0, icon: "🥕" },
    FoodEntry { name: "Fruit", calories_per_100g: 60.0, icon: "🍇" },
    FoodEntry { name: "Meat", calories_per_100g: 250.0, icon: "🥩" },
    FoodEntry { name: "Soup", calories_per_100g: 50.0, icon: "🍲" },
    FoodEntry { name: "Sandwich", calories_per_100g: 250.0, icon: "🥪" },
];

/// Every food in the table, in display order
pub fn all_foods() -> &'static [FoodEntry] {
    FOODS
}

/// Exact lookup by name, case-insensitive
pub fn find_food(name: &str) -> Option<&'static FoodEntry> {
    FOODS.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}

/// Substring search over names, case-insensitive
pub fn search_foods(query: &str) -> Vec<&'static FoodEntry> {
    let query = query.to_lowercase();
    FOODS
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&query))
        .collect()
}

/// Calories in a `portion_g` gram serving, rounded to the nearest kcal
///
/// Returns `None` for foods not in the table.
pub fn estimate_calories(name: &str, portion_g: f64) -> Option<f64> {
    find_food(name).map(|f| (f.calories_per_100g * portion_g / 100.0).round())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(find_food("apple").is_some());
        assert!(find_food("APPLE").is_some());
        assert!(find_food("dragonfruit").is_none());
    }

    #[test]
    fn test_portion_estimate_scales_from_100g() {
        // Apple is 52 kcal per 100 g.
        assert_eq!(estimate_calories("Apple", 100.0), Some(52.0));
        assert_eq!(estimate_calories("Apple", 150.0), Some(78.0));
        assert_eq!(estimate_calories("Unknown", 100.0), None);
    }

    #[test]
    fn test_search_matches_substrings() {
        let results = search_foods("cooked");
        assert_eq!(results.len(), 2);
        assert!(results.iter().any(|f| f.name == "Cooked rice"));
    }
}
