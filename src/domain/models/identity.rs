//! Identity Domain Model
//!
//! Represents a subject of the clinic portal: who they are, which role they
//! hold, and which identity pool their record lives in.

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Newtype wrapper for User ID providing type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Create a new random UserId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a UserId from an existing UUID
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl TryFrom<&str> for UserId {
    type Error = uuid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(Uuid::parse_str(value)?))
    }
}

impl TryFrom<String> for UserId {
    type Error = uuid::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// Error returned when a stored role name cannot be parsed
#[derive(Debug, Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

/// Role held by a persisted identity record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Patient,
    Doctor,
    Admin,
}

impl Role {
    /// The lowercase name stored in the database and embedded in tokens
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Doctor => "doctor",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patient" => Ok(Self::Patient),
            "doctor" => Ok(Self::Doctor),
            "admin" => Ok(Self::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Identity pool a record belongs to
///
/// The two pools are disjoint collections sharing one id space; a given id
/// appears in at most one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityPool {
    Patients,
    Doctors,
}

impl std::fmt::Display for IdentityPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Patients => f.write_str("patients"),
            Self::Doctors => f.write_str("doctors"),
        }
    }
}

/// Immutable set of roles permitted through a gated route
///
/// One instance per protected route, fixed at route-registration time.
#[derive(Debug, Clone)]
pub struct RoleSet {
    allowed: Vec<Role>,
}

impl RoleSet {
    /// Build a role set from the given roles
    #[must_use]
    pub fn of(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed: roles.into_iter().collect(),
        }
    }

    /// Whether the given role is permitted by this set
    #[must_use]
    pub fn allows(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<T: IntoIterator<Item = Role>>(iter: T) -> Self {
        Self::of(iter)
    }
}

/// Identity domain entity: a persisted subject record
///
/// Records are created and destroyed by external account-management flows;
/// this service only restores them from storage.
#[derive(Debug, Clone)]
pub struct Identity {
    id: UserId,
    name: String,
    email: String,
    role: Role,
    pool: IdentityPool,
    created_at: DateTime<Utc>,
}

impl Identity {
    /// Restore an Identity from persisted data
    #[must_use]
    pub fn restore(
        id: UserId,
        name: String,
        email: String,
        role: Role,
        pool: IdentityPool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            role,
            pool,
            created_at,
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn pool(&self) -> IdentityPool {
        self.pool
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
