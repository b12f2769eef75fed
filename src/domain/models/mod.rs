//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod identity;

pub use identity::{Identity, IdentityPool, Role, RoleSet, UserId};
