//! Infrastructure Layer
//!
//! Contains all external concerns: driving adapters (HTTP handlers and
//! middleware) and driven adapters (repositories, configuration, token
//! verification).

pub mod driven_adapters;
pub mod driving_adapters;
