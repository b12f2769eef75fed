//! PostgreSQL Identity Repositories
//!
//! Implements the `IdentityRepository` trait with SQLx for each of the two
//! identity pools. The pools are separate tables with the same row shape;
//! each repository tags the records it restores with its own pool.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::IdentityRepository;
use crate::domain::models::identity::{Identity, IdentityPool, Role, UserId};
use crate::shared::errors::RepositoryError;

/// Database row representation shared by the patients and doctors tables
#[derive(Debug, sqlx::FromRow)]
struct IdentityRow {
    id: Uuid,
    name: String,
    email: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl IdentityRow {
    fn into_identity(self, pool: IdentityPool) -> Result<Identity, RepositoryError> {
        let role: Role = self
            .role
            .parse()
            .map_err(|err| RepositoryError::Mapping(format!("Failed to parse role: {}", err)))?;

        Ok(Identity::restore(
            UserId::from_uuid(self.id),
            self.name,
            self.email,
            role,
            pool,
            self.created_at,
        ))
    }
}

/// PostgreSQL repository over the patients table (primary pool)
pub struct PostgresPatientRepository {
    pool: PgPool,
}

impl PostgresPatientRepository {
    /// Create a new PostgresPatientRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityRepository for PostgresPatientRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Identity>, RepositoryError> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
            SELECT id, name, email, role, created_at
            FROM patients
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| row.into_identity(IdentityPool::Patients))
            .transpose()
    }
}

/// PostgreSQL repository over the doctors table (secondary pool)
pub struct PostgresDoctorRepository {
    pool: PgPool,
}

impl PostgresDoctorRepository {
    /// Create a new PostgresDoctorRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityRepository for PostgresDoctorRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Identity>, RepositoryError> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
            SELECT id, name, email, role, created_at
            FROM doctors
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| row.into_identity(IdentityPool::Doctors))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_maps_known_role() {
        let row = IdentityRow {
            id: Uuid::new_v4(),
            name: "Dr. Ruth Mensah".to_string(),
            email: "ruth@example.com".to_string(),
            role: "doctor".to_string(),
            created_at: Utc::now(),
        };

        let identity = row.into_identity(IdentityPool::Doctors).unwrap();
        assert_eq!(identity.role(), Role::Doctor);
        assert_eq!(identity.pool(), IdentityPool::Doctors);
    }

    #[test]
    fn test_row_with_unknown_role_is_mapping_error() {
        let row = IdentityRow {
            id: Uuid::new_v4(),
            name: "Lena Fischer".to_string(),
            email: "lena@example.com".to_string(),
            role: "superuser".to_string(),
            created_at: Utc::now(),
        };

        let err = row.into_identity(IdentityPool::Patients).unwrap_err();
        assert!(matches!(err, RepositoryError::Mapping(_)));
    }
}
