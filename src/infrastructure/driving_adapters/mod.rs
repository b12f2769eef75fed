//! Driving Adapters
//!
//! Entry points that drive the application:
//! - HTTP REST API handlers and middleware
//! - Response DTOs

pub mod api_rest;
