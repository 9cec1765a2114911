//! REST API implementation
//!
//! - types: Request/response type definitions
//! - extractors: Custom request extractors
//! - handlers: API endpoint handlers
//! - router: Router creation and middleware stack
//! - tests: Unit tests for response types

mod extractors;
mod handlers;
mod router;
mod tests;
pub mod types;

// Re-export public API
pub use extractors::JsonExtractor;
pub use router::{create_router, create_router_with_state, with_middleware, AVAILABLE_ENDPOINTS};
pub use types::{
    ActivityLevelInfo, ActivityLevelTable, ActivityLevelsResponse, AppState, CalculateResponse,
    CalculationData, EndpointDescriptions, HealthResponse, ServiceInfo,
};
