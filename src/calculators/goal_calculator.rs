// ABOUTME: Program-based calorie and water target calculations
// ABOUTME: Mifflin-St Jeor BMR with a fixed activity factor and program adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Goal target calculations
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! The target functions are total: missing biometrics fall back to fixed
//! defaults instead of erroring, because the profile screen allows saving a
//! profile before weight and height are known.

use crate::constants::goals::{
    ACTIVITY_FACTOR, DEFAULT_AGE, DEFAULT_CALORIE_TARGET_KCAL, DEFAULT_WATER_TARGET_L,
    MIN_CALORIE_TARGET_KCAL, MIN_WATER_TARGET_L, WATER_L_PER_KG, WEIGHT_GAIN_SURPLUS_KCAL,
    WEIGHT_GAIN_WATER_FACTOR, WEIGHT_LOSS_DEFICIT_KCAL, WEIGHT_LOSS_WATER_FACTOR,
};
use crate::errors::AppError;
use crate::models::{Gender, Program, UserInfo};

/// Biometric inputs for target calculation
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalInputs {
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Age in years; defaults to 30 when unknown
    pub age: Option<u32>,
    /// Gender for the BMR constant
    pub gender: Gender,
}

impl From<&UserInfo> for GoalInputs {
    fn from(info: &UserInfo) -> Self {
        Self {
            weight_kg: info.weight,
            height_cm: info.height,
            age: info.age,
            gender: info.gender,
        }
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// # Errors
///
/// Returns an error if input values are out of valid ranges.
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
) -> Result<f64, AppError> {
    if weight_kg <= 0.0 || weight_kg > 300.0 {
        return Err(AppError::out_of_range(
            "weight must be between 0 and 300 kg",
        ));
    }
    if height_cm <= 0.0 || height_cm > 300.0 {
        return Err(AppError::out_of_range(
            "height must be between 0 and 300 cm",
        ));
    }
    if !(10..=120).contains(&age) {
        return Err(AppError::out_of_range(
            "age must be between 10 and 120 years",
        ));
    }

    let gender_constant = match gender {
        Gender::Male => 5.0,
        Gender::Female => -161.0,
    };

    Ok(10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + gender_constant)
}

/// Daily calorie target for a program, in kcal
///
/// Maintenance is BMR times a fixed sedentary-to-moderately-active factor,
/// rounded to the nearest kcal. Weight loss subtracts a 500 kcal deficit but
/// never goes below the 1200 kcal floor; weight gain adds a 500 kcal surplus.
/// Unknown or invalid biometrics yield the 2000 kcal default.
pub fn calculate_calorie_target(program: Program, inputs: &GoalInputs) -> f64 {
    let (Some(weight), Some(height)) = (inputs.weight_kg, inputs.height_cm) else {
        return DEFAULT_CALORIE_TARGET_KCAL;
    };
    let age = inputs.age.unwrap_or(DEFAULT_AGE);

    let Ok(bmr) = calculate_bmr(weight, height, age, inputs.gender) else {
        return DEFAULT_CALORIE_TARGET_KCAL;
    };

    let maintenance = (bmr * ACTIVITY_FACTOR).round();

    match program {
        Program::WeightLoss => {
            (maintenance - WEIGHT_LOSS_DEFICIT_KCAL).max(MIN_CALORIE_TARGET_KCAL)
        }
        Program::WeightGain => maintenance + WEIGHT_GAIN_SURPLUS_KCAL,
        Program::Maintain => maintenance,
    }
}

/// Daily water target for a program, in liters
///
/// Base is 35 ml per kilogram of body weight, with small multipliers for the
/// cutting and bulking programs, rounded to the nearest 0.25 L with a 1.5 L
/// floor. Unknown weight yields the 2 L default.
pub fn calculate_water_target(program: Program, weight_kg: Option<f64>) -> f64 {
    let Some(weight) = weight_kg.filter(|w| *w > 0.0) else {
        return DEFAULT_WATER_TARGET_L;
    };

    let base = weight * WATER_L_PER_KG;
    let adjusted = match program {
        Program::WeightLoss => base * WEIGHT_LOSS_WATER_FACTOR,
        Program::WeightGain => base * WEIGHT_GAIN_WATER_FACTOR,
        Program::Maintain => base,
    };

    ((adjusted * 4.0).round() / 4.0).max(MIN_WATER_TARGET_L)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_male_reference_case() {
        // 10*70 + 6.25*175 - 5*30 + 5 = 1648.75
        let bmr = calculate_bmr(70.0, 175.0, 30, Gender::Male).unwrap();
        assert!((bmr - 1648.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmr_female_offset() {
        let male = calculate_bmr(60.0, 165.0, 25, Gender::Male).unwrap();
        let female = calculate_bmr(60.0, 165.0, 25, Gender::Female).unwrap();
        assert!((male - female - 166.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmr_rejects_out_of_range_inputs() {
        assert!(calculate_bmr(0.0, 175.0, 30, Gender::Male).is_err());
        assert!(calculate_bmr(70.0, 350.0, 30, Gender::Male).is_err());
        assert!(calculate_bmr(70.0, 175.0, 5, Gender::Male).is_err());
    }

    #[test]
    fn test_calorie_target_maintain() {
        let inputs = GoalInputs {
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
            age: Some(30),
            gender: Gender::Male,
        };
        // round(1648.75 * 1.5) = round(2473.125) = 2473
        assert_eq!(calculate_calorie_target(Program::Maintain, &inputs), 2473.0);
        assert_eq!(
            calculate_calorie_target(Program::WeightLoss, &inputs),
            1973.0
        );
        assert_eq!(
            calculate_calorie_target(Program::WeightGain, &inputs),
            2973.0
        );
    }

    #[test]
    fn test_calorie_target_weight_loss_floor() {
        // Small frame: BMR = 10*40 + 6.25*145 - 5*80 - 161 = 745.25,
        // maintenance = 1118, minus 500 would be 618 -> floored at 1200.
        let inputs = GoalInputs {
            weight_kg: Some(40.0),
            height_cm: Some(145.0),
            age: Some(80),
            gender: Gender::Female,
        };
        assert_eq!(
            calculate_calorie_target(Program::WeightLoss, &inputs),
            1200.0
        );
    }

    #[test]
    fn test_calorie_target_missing_inputs_defaults() {
        let inputs = GoalInputs::default();
        assert_eq!(calculate_calorie_target(Program::Maintain, &inputs), 2000.0);
    }

    #[test]
    fn test_water_target_maintain_rounds_to_quarter_liter() {
        // 80 * 0.035 = 2.8 -> nearest 0.25 is 2.75
        assert_eq!(calculate_water_target(Program::Maintain, Some(80.0)), 2.75);
    }

    #[test]
    fn test_water_target_floor() {
        // 30 * 0.035 = 1.05 -> would round to 1.0, floored at 1.5
        assert_eq!(calculate_water_target(Program::Maintain, Some(30.0)), 1.5);
    }

    #[test]
    fn test_water_target_program_multipliers() {
        // 80 * 0.035 * 1.1 = 3.08 -> 3.0; 80 * 0.035 * 1.15 = 3.22 -> 3.25
        assert_eq!(calculate_water_target(Program::WeightLoss, Some(80.0)), 3.0);
        assert_eq!(
            calculate_water_target(Program::WeightGain, Some(80.0)),
            3.25
        );
    }

    #[test]
    fn test_water_target_missing_weight_defaults() {
        assert_eq!(calculate_water_target(Program::Maintain, None), 2.0);
    }
}
