//! API Middleware
//!
//! Authentication, role gating, and request correlation for the REST API.

pub mod auth;
pub mod request_id;
pub mod role_gate;

pub use auth::{authenticate, AuthenticatedUser, JwtAuth};
pub use role_gate::{enforce_role, RoleGate};
