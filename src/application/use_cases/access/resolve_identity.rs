//! Resolve Identity Use Case
//!
//! Looks up the acting user's record across the two identity pools in a
//! fixed priority order: patients first, doctors second. The first hit wins;
//! an id present in neither pool is a not-found error.

use std::sync::Arc;

use crate::domain::gateways::IdentityRepository;
use crate::domain::models::identity::{Identity, UserId};
use crate::shared::errors::UseCaseError;

/// Use case for resolving an identity across both pools
pub struct ResolveIdentityUseCase {
    patient_repository: Arc<dyn IdentityRepository>,
    doctor_repository: Arc<dyn IdentityRepository>,
}

impl ResolveIdentityUseCase {
    /// Create a new ResolveIdentityUseCase
    #[must_use]
    pub fn new(
        patient_repository: Arc<dyn IdentityRepository>,
        doctor_repository: Arc<dyn IdentityRepository>,
    ) -> Self {
        Self {
            patient_repository,
            doctor_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if neither pool has a record for the id.
    /// Returns `UseCaseError::Repository` if either lookup fails; the secondary
    /// pool is not consulted after a primary failure.
    pub async fn execute(&self, id: &UserId) -> Result<Identity, UseCaseError> {
        tracing::debug!(user_id = %id, "Resolving identity");

        let found = match self.patient_repository.find_by_id(id).await? {
            Some(identity) => Some(identity),
            None => self.doctor_repository.find_by_id(id).await?,
        };

        let identity = found.ok_or_else(|| {
            tracing::warn!(user_id = %id, "Identity not found in any pool");
            UseCaseError::NotFound { id: id.to_string() }
        })?;

        tracing::debug!(user_id = %id, pool = %identity.pool(), "Identity resolved");
        Ok(identity)
    }
}
