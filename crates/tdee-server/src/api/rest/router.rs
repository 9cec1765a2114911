//! Router creation and configuration
//!
//! Creates the Axum router and its middleware stack.

use super::handlers::*;
use super::types::AppState;
use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::rate_limit::{rate_limit, RateLimiter};
use axum::{
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Paths listed in 404 responses
pub const AVAILABLE_ENDPOINTS: [&str; 4] = ["/", "/calculate", "/activity-levels", "/health"];

/// Create REST API router from configuration
pub fn create_router(config: &ServerConfig) -> Router {
    create_router_with_state(AppState::new(RateLimiter::new(&config.rate_limit)))
}

/// Create REST API router around an existing state
pub fn create_router_with_state(state: AppState) -> Router {
    let limiter = state.rate_limiter.clone();

    let routes = Router::new()
        .route("/", get(root).fallback(not_found))
        .route("/health", get(health).fallback(not_found))
        .route("/activity-levels", get(activity_levels).fallback(not_found))
        .route("/calculate", post(calculate).fallback(not_found))
        .fallback(not_found)
        .with_state(state);

    with_middleware(routes, limiter)
}

/// Wrap routes in the service middleware stack
///
/// Layers, outermost first: tracing, CORS, rate limiting, panic recovery.
/// Apply this after every route and fallback has been added.
pub fn with_middleware(routes: Router, limiter: RateLimiter) -> Router {
    routes
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn_with_state(limiter, rate_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Convert a handler panic into the generic 500 response
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ServerError::InternalError(format!("handler panicked: {}", detail)).into_response()
}
