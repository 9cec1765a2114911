//! Energy expenditure estimators
//!
//! BMR uses the Mifflin-St Jeor equation:
//!
//! `BMR = 10 x weight_kg + 6.25 x height_cm - 5 x age + offset`
//!
//! where the offset is `+5` for male and `-161` for female.

use crate::types::{ActivityLevel, Sex};

const WEIGHT_COEFFICIENT: f64 = 10.0;
const HEIGHT_COEFFICIENT: f64 = 6.25;
const AGE_COEFFICIENT: f64 = 5.0;
const MALE_OFFSET: f64 = 5.0;
const FEMALE_OFFSET: f64 = -161.0;

/// Basal metabolic rate in kcal/day, unrounded
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> f64 {
    let offset = match sex {
        Sex::Male => MALE_OFFSET,
        Sex::Female => FEMALE_OFFSET,
    };

    WEIGHT_COEFFICIENT * weight_kg + HEIGHT_COEFFICIENT * height_cm - AGE_COEFFICIENT * age_years
        + offset
}

/// Total daily energy expenditure in kcal/day
///
/// Unknown activity level names fall back to the sedentary multiplier.
/// The product is rounded once, half away from zero.
pub fn calculate_tdee(bmr: f64, activity_level: &str) -> i64 {
    let level = ActivityLevel::from_name(activity_level).unwrap_or_else(|| {
        log::debug!(
            "Unknown activity level '{}', using sedentary multiplier",
            activity_level
        );
        ActivityLevel::Sedentary
    });

    (bmr * level.multiplier()).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_male() {
        let bmr = calculate_bmr(70.0, 175.0, 25.0, Sex::Male);
        assert!((bmr - 1673.75).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_female() {
        let bmr = calculate_bmr(60.0, 165.0, 30.0, Sex::Female);
        // 600 + 1031.25 - 150 - 161
        assert!((bmr - 1320.25).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_sex_offset_is_166() {
        for (w, h, a) in [(70.0, 175.0, 25.0), (1.0, 1.0, 150.0), (1000.0, 300.0, 1.0)] {
            let diff = calculate_bmr(w, h, a, Sex::Male) - calculate_bmr(w, h, a, Sex::Female);
            assert!((diff - 166.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_tdee_multipliers() {
        assert_eq!(calculate_tdee(1673.75, "moderately_active"), 2594);
        assert_eq!(calculate_tdee(1000.0, "sedentary"), 1200);
        assert_eq!(calculate_tdee(1000.0, "lightly_active"), 1375);
        assert_eq!(calculate_tdee(1000.0, "very_active"), 1725);
        assert_eq!(calculate_tdee(1000.0, "extra_active"), 1900);
    }

    #[test]
    fn test_tdee_unknown_level_falls_back_to_sedentary() {
        for bmr in [0.0, 1320.25, 1673.75, -500.0] {
            assert_eq!(calculate_tdee(bmr, "unknown_level"), calculate_tdee(bmr, "sedentary"));
            assert_eq!(calculate_tdee(bmr, ""), calculate_tdee(bmr, "sedentary"));
        }
    }

    #[test]
    fn test_tdee_rounds_half_away_from_zero() {
        // 4 * 1.375 = 5.5
        assert_eq!(calculate_tdee(4.0, "lightly_active"), 6);
        assert_eq!(calculate_tdee(-4.0, "lightly_active"), -6);
    }
}
