//! Access Use Cases
//!
//! Business logic for resolving acting users against the identity pools.

mod resolve_identity;

pub use resolve_identity::ResolveIdentityUseCase;
