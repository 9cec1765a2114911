//! HTTP API surface

pub mod rest;
