//! Role Gate Middleware
//!
//! Per-route authorization: resolves the acting user's record across the two
//! identity pools and permits continuation only when the record's role is in
//! the route's allowed set. The allowed set is bound once at router
//! construction; the middleware runs per request.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::application::use_cases::access::ResolveIdentityUseCase;
use crate::domain::models::identity::RoleSet;
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::AuthenticatedUser;
use crate::shared::errors::{ErrorBody, UseCaseError};

/// Route-level gate holding the allowed roles and the identity resolver
#[derive(Clone)]
pub struct RoleGate {
    allowed: RoleSet,
    resolver: Arc<ResolveIdentityUseCase>,
}

impl RoleGate {
    /// Bind a gate to the given role set; one gate per protected route
    #[must_use]
    pub fn restrict_to(allowed: RoleSet, resolver: Arc<ResolveIdentityUseCase>) -> Self {
        Self { allowed, resolver }
    }
}

/// Gate rejection, one variant per client-visible outcome
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("identity not found in any pool")]
    IdentityNotFound,

    #[error("role not permitted for this route")]
    Forbidden,

    #[error("identity lookup failed")]
    Lookup,
}

impl GateError {
    /// Stable client-facing message for this rejection
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::IdentityNotFound => "User not found",
            Self::Forbidden => "Forbidden: not authorized",
            Self::Lookup => "Server error in role restriction",
        }
    }

    /// Get the HTTP status code for this rejection
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::IdentityNotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Lookup => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UseCaseError> for GateError {
    fn from(err: UseCaseError) -> Self {
        match err {
            UseCaseError::NotFound { .. } => Self::IdentityNotFound,
            UseCaseError::Repository(_) => Self::Lookup,
        }
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorBody::failure(self.public_message())),
        )
            .into_response()
    }
}

/// Middleware that enforces the gate bound in state
///
/// The check uses the persisted record's role, never the token claim. The
/// resolved record is not attached to the request; downstream stages
/// re-resolve when they need record data.
pub async fn enforce_role(
    State(gate): State<RoleGate>,
    request: Request,
    next: Next,
) -> Result<Response, GateError> {
    // Without an authenticated principal there is no id to resolve, so the
    // flow degrades to a not-found outcome.
    let Some(user) = request.extensions().get::<AuthenticatedUser>().cloned() else {
        return Err(GateError::IdentityNotFound);
    };

    let identity = match gate.resolver.execute(&user.id).await {
        Ok(identity) => identity,
        Err(UseCaseError::Repository(err)) => {
            tracing::error!(user_id = %user.id, error = %err, "Identity lookup failed at role gate");
            return Err(GateError::Lookup);
        }
        Err(err) => return Err(GateError::from(err)),
    };

    if !gate.allowed.allows(identity.role()) {
        tracing::warn!(
            user_id = %user.id,
            role = %identity.role(),
            "Role not permitted for this route"
        );
        return Err(GateError::Forbidden);
    }

    Ok(next.run(request).await)
}
