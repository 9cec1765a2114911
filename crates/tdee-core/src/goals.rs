//! Calorie goal tiers and macro-nutrient suggestions derived from TDEE

use crate::energy::{calculate_bmr, calculate_tdee};
use crate::types::{CalculationInput, CalculationResult, CalorieGoals, MacroSuggestions};

/// Protein target in grams per kg of body weight (about 1 g per lb)
pub const PROTEIN_GRAMS_PER_KG: f64 = 2.2;

/// Share of calories from fat
pub const FAT_CALORIE_SHARE: f64 = 0.25;

/// Share of calories from carbohydrates
pub const CARB_CALORIE_SHARE: f64 = 0.45;

const KCAL_PER_GRAM_FAT: f64 = 9.0;
const KCAL_PER_GRAM_CARB: f64 = 4.0;

/// Calorie targets around maintenance
///
/// No floor is applied; very low TDEE values produce negative targets.
pub fn calorie_goals(tdee: i64) -> CalorieGoals {
    CalorieGoals {
        extreme_weight_loss: tdee - 750,
        weight_loss: tdee - 500,
        mild_weight_loss: tdee - 250,
        maintenance: tdee,
        mild_weight_gain: tdee + 250,
        weight_gain: tdee + 500,
    }
}

/// Daily macro targets, each rounded independently
pub fn macro_suggestions(tdee: i64, weight_kg: f64) -> MacroSuggestions {
    let tdee = tdee as f64;

    MacroSuggestions {
        protein_grams: (weight_kg * PROTEIN_GRAMS_PER_KG).round() as i64,
        fat_grams: (tdee * FAT_CALORIE_SHARE / KCAL_PER_GRAM_FAT).round() as i64,
        carb_grams: (tdee * CARB_CALORIE_SHARE / KCAL_PER_GRAM_CARB).round() as i64,
    }
}

/// Run the full pipeline on validated input
pub fn calculate(input: &CalculationInput) -> CalculationResult {
    let bmr = calculate_bmr(input.weight_kg, input.height_cm, input.age_years, input.sex);
    let tdee = calculate_tdee(bmr, &input.activity_level);

    CalculationResult {
        bmr: bmr.round() as i64,
        tdee,
        calorie_goals: calorie_goals(tdee),
        macro_suggestions: macro_suggestions(tdee, input.weight_kg),
    }
}
