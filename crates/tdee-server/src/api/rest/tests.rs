//! Tests for REST API response types

#![cfg(test)]

use super::types::*;
use tdee_core::{calculate, CalculationInput, Sex};

#[test]
fn test_activity_level_table_order_and_values() {
    let json = serde_json::to_string(&ActivityLevelTable).unwrap();

    let positions: Vec<usize> = [
        "\"sedentary\"",
        "\"lightly_active\"",
        "\"moderately_active\"",
        "\"very_active\"",
        "\"extra_active\"",
    ]
    .iter()
    .map(|key| json.find(key).unwrap())
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["sedentary"]["multiplier"], 1.2);
    assert_eq!(
        value["extra_active"]["description"],
        "Very hard exercise + physical job"
    );
}

#[test]
fn test_calculate_response_shape() {
    let input = CalculationInput {
        weight_kg: 70.0,
        height_cm: 175.0,
        age_years: 25.0,
        sex: Sex::Male,
        activity_level: "moderately_active".to_string(),
    };
    let result = calculate(&input);

    let response = CalculateResponse {
        success: true,
        data: CalculationData { input, result },
    };
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["input"]["gender"], "male");
    assert_eq!(json["data"]["bmr"], 1674);
    assert_eq!(json["data"]["tdee"], 2594);
    assert_eq!(json["data"]["calorie_goals"]["maintenance"], 2594);
    assert_eq!(json["data"]["macro_suggestions"]["protein_grams"], 154);
}

#[test]
fn test_calorie_goals_key_order() {
    let input = CalculationInput {
        weight_kg: 80.0,
        height_cm: 180.0,
        age_years: 40.0,
        sex: Sex::Female,
        activity_level: "sedentary".to_string(),
    };
    let json = serde_json::to_string(&calculate(&input).calorie_goals).unwrap();

    let keys = [
        "extreme_weight_loss",
        "\"weight_loss",
        "mild_weight_loss",
        "maintenance",
        "mild_weight_gain",
        "\"weight_gain",
    ];
    let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_service_info_endpoint_keys() {
    let info = ServiceInfo {
        message: "TDEE Calculator API - 2025 Edition",
        version: "2.0.0",
        endpoints: EndpointDescriptions {
            calculate: "c",
            activity_levels: "a",
            health: "h",
        },
        features: vec![],
    };
    let json = serde_json::to_value(&info).unwrap();

    assert_eq!(json["endpoints"]["POST /calculate"], "c");
    assert_eq!(json["endpoints"]["GET /activity-levels"], "a");
    assert_eq!(json["endpoints"]["GET /health"], "h");
}

#[test]
fn test_health_response_fields() {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: "2025-01-01T00:00:00.000Z".to_string(),
        uptime: 1.5,
    };
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["status"], "healthy");
    assert_eq!(json["uptime"], 1.5);
}
