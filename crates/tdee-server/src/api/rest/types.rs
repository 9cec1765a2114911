//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use crate::rate_limit::RateLimiter;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::time::Instant;
use tdee_core::{ActivityLevel, CalculationInput, CalculationResult};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub rate_limiter: RateLimiter,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(rate_limiter: RateLimiter) -> Self {
        Self {
            rate_limiter,
            started_at: Instant::now(),
        }
    }
}

/// Service metadata returned by `GET /`
#[derive(Debug, serde::Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: EndpointDescriptions,
    pub features: Vec<&'static str>,
}

#[derive(Debug, serde::Serialize)]
pub struct EndpointDescriptions {
    #[serde(rename = "POST /calculate")]
    pub calculate: &'static str,

    #[serde(rename = "GET /activity-levels")]
    pub activity_levels: &'static str,

    #[serde(rename = "GET /health")]
    pub health: &'static str,
}

/// Health check response
#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339 UTC timestamp
    pub timestamp: String,
    /// Seconds since the service started
    pub uptime: f64,
}

/// `GET /activity-levels` response
#[derive(Debug, serde::Serialize)]
pub struct ActivityLevelsResponse {
    pub success: bool,
    pub activity_levels: ActivityLevelTable,
}

/// Multiplier and description of one activity level
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ActivityLevelInfo {
    pub multiplier: f64,
    pub description: &'static str,
}

impl From<ActivityLevel> for ActivityLevelInfo {
    fn from(level: ActivityLevel) -> Self {
        Self {
            multiplier: level.multiplier(),
            description: level.description(),
        }
    }
}

/// All activity levels keyed by name, least to most active
#[derive(Debug, Default)]
pub struct ActivityLevelTable;

impl Serialize for ActivityLevelTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ActivityLevel::ALL.len()))?;
        for level in ActivityLevel::ALL {
            map.serialize_entry(level.name(), &ActivityLevelInfo::from(level))?;
        }
        map.end()
    }
}

/// Successful `POST /calculate` response
#[derive(Debug, serde::Serialize)]
pub struct CalculateResponse {
    pub success: bool,
    pub data: CalculationData,
}

/// Echoed input followed by the computed values
#[derive(Debug, serde::Serialize)]
pub struct CalculationData {
    pub input: CalculationInput,

    #[serde(flatten)]
    pub result: CalculationResult,
}
