//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use axum::{extract::State, http::Uri, Json};
use chrono::{SecondsFormat, Utc};
use tdee_core::RawCalculationInput;
use tracing::{debug, info};

/// Service metadata endpoint
pub(super) async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "TDEE Calculator API - 2025 Edition",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: EndpointDescriptions {
            calculate: "Calculate TDEE with detailed breakdown",
            activity_levels: "Get activity level options",
            health: "Health check",
        },
        features: vec![
            "Accurate BMR calculation using Mifflin-St Jeor equation",
            "Detailed calorie goals for weight management",
            "Macro nutrition suggestions",
            "Input validation",
            "CORS enabled",
        ],
    })
}

/// Health check endpoint
pub(super) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}

/// Activity level table endpoint
pub(super) async fn activity_levels() -> Json<ActivityLevelsResponse> {
    Json(ActivityLevelsResponse {
        success: true,
        activity_levels: ActivityLevelTable,
    })
}

/// BMR/TDEE calculation endpoint
///
/// Any well-formed JSON body is accepted; fields are only read from an
/// object, so arrays and scalars fail validation on every field.
#[axum::debug_handler]
pub(super) async fn calculate(
    JsonExtractor(body): JsonExtractor<serde_json::Value>,
) -> Result<Json<CalculateResponse>, ServerError> {
    let payload = RawCalculationInput::from_body(body);
    let input = tdee_core::validate(&payload).map_err(|errors| {
        debug!("Rejected calculation request with {} errors", errors.len());
        ServerError::from(errors)
    })?;

    let result = tdee_core::calculate(&input);

    info!(
        "Calculated bmr={} tdee={} for activity_level={}",
        result.bmr, result.tdee, input.activity_level
    );

    Ok(Json(CalculateResponse {
        success: true,
        data: CalculationData { input, result },
    }))
}

/// Fallback for unknown paths and methods
pub(super) async fn not_found(uri: Uri) -> ServerError {
    debug!("No route for {}", uri.path());
    ServerError::NotFound(uri.path().to_string())
}
