//! Driving Adapters
//!
//! Entry points that drive the application:
//! - HTTP REST API handlers
//! - Response DTOs

pub mod api_rest;
