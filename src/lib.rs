//! Clinic Access Control API
//!
//! Bearer-token authentication and role-based authorization for the clinic
//! patient/doctor portal, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
