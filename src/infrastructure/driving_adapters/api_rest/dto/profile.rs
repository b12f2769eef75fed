//! Profile DTOs
//!
//! Response objects for the profile endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::identity::Identity;

/// Identity response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponseDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub pool: String,
    pub created_at: DateTime<Utc>,
}

impl From<Identity> for IdentityResponseDto {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id().to_string(),
            name: identity.name().to_string(),
            email: identity.email().to_string(),
            role: identity.role().to_string(),
            pool: identity.pool().to_string(),
            created_at: identity.created_at(),
        }
    }
}
