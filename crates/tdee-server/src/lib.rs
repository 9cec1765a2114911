//! TDEE Calculator HTTP Server Library
//!
//! Provides REST API components for the binary and for tests.

pub mod api;
pub mod config;
pub mod error;
pub mod rate_limit;
pub mod telemetry;
