//! Identity Repository Adapters
//!
//! PostgreSQL implementations of the identity pool gateway.

pub mod postgres;

pub use postgres::{PostgresDoctorRepository, PostgresPatientRepository};
