//! Request validation
//!
//! Checks the raw body against field bounds and turns it into a
//! [`CalculationInput`]. All failures are collected, in field order.

use crate::error::ValidationError;
use crate::types::{ActivityLevel, CalculationInput, RawCalculationInput, Sex};
use serde_json::Value;

/// Upper bound for `weight` (kg)
pub const MAX_WEIGHT_KG: f64 = 1000.0;

/// Upper bound for `height` (cm)
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// Upper bound for `age` (years)
pub const MAX_AGE_YEARS: f64 = 150.0;

/// Validate a raw request body
///
/// `activity_level` is never rejected here: unknown names pass through and
/// are resolved to sedentary by [`crate::energy::calculate_tdee`].
pub fn validate(raw: &RawCalculationInput) -> Result<CalculationInput, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let weight = bounded_number(raw.weight.as_ref(), MAX_WEIGHT_KG);
    if weight.is_none() {
        errors.push(ValidationError::Weight);
    }

    let height = bounded_number(raw.height.as_ref(), MAX_HEIGHT_CM);
    if height.is_none() {
        errors.push(ValidationError::Height);
    }

    let age = bounded_number(raw.age.as_ref(), MAX_AGE_YEARS);
    if age.is_none() {
        errors.push(ValidationError::Age);
    }

    let sex = match raw.gender.as_ref() {
        Some(Value::String(s)) => Sex::parse(s),
        _ => None,
    };
    if sex.is_none() {
        errors.push(ValidationError::Gender);
    }

    match (weight, height, age, sex) {
        (Some(weight_kg), Some(height_cm), Some(age_years), Some(sex)) => Ok(CalculationInput {
            weight_kg,
            height_cm,
            age_years,
            sex,
            activity_level: activity_level_name(raw.activity_level.as_ref()),
        }),
        _ => Err(errors),
    }
}

/// Read a numeric field and check `0 < value <= max`
fn bounded_number(value: Option<&Value>, max: f64) -> Option<f64> {
    let n = numeric(value?)?;
    (n > 0.0 && n <= max).then_some(n)
}

/// Accept JSON numbers and numeric strings
fn numeric(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Requested activity level, defaulting to sedentary when absent or not a string
fn activity_level_name(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => ActivityLevel::default().name().to_string(),
    }
}
