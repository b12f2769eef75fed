//! Identity Repository Gateway
//!
//! Abstract trait defining the read-only contract an identity pool must
//! satisfy. Each of the two pools (patients, doctors) is served by its own
//! implementation.

use async_trait::async_trait;

use crate::domain::models::identity::{Identity, UserId};
use crate::shared::errors::RepositoryError;

/// Repository trait for looking up identity records in one pool
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Find an identity by its ID, or `None` if this pool has no record for it
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Identity>, RepositoryError>;
}
