//! Bearer Token Authentication Middleware
//!
//! Extracts the bearer token from the Authorization header, verifies it, and
//! attaches the decoded identity claims to the request. Every failure is
//! terminal for the request; the client must re-authenticate.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::domain::models::identity::UserId;
use crate::infrastructure::driven_adapters::token_verifier::{TokenError, TokenVerifier};
use crate::shared::errors::ErrorBody;

/// Authenticated principal stored in request extensions
///
/// Present exactly when `authenticate` has succeeded for the request. The
/// role is the token claim carried verbatim; authorization decisions use the
/// persisted record's role instead.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub role: String,
}

/// Authentication failure, one variant per client-visible rejection
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("no bearer credential supplied")]
    MissingCredential,

    #[error("bearer credential expired")]
    ExpiredCredential,

    #[error("bearer credential rejected")]
    InvalidCredential,
}

impl AuthError {
    /// Stable client-facing message for this rejection
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingCredential => "No token, authorization denied",
            Self::ExpiredCredential => "Token expired",
            Self::InvalidCredential => "Invalid or unauthorized token",
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => Self::ExpiredCredential,
            TokenError::Invalid => Self::InvalidCredential,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody::failure(self.public_message())),
        )
            .into_response()
    }
}

/// Middleware that authenticates the request's bearer token
///
/// On success the decoded `id` and `role` claims are stored in request
/// extensions as [`AuthenticatedUser`] and the pipeline continues.
pub async fn authenticate(
    State(verifier): State<Arc<TokenVerifier>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .ok_or(AuthError::MissingCredential)?;

    let claims = verifier.verify(token)?;

    // A well-signed token whose subject is not a UUID cannot name a record
    let id = UserId::try_from(claims.id.as_str()).map_err(|_| AuthError::InvalidCredential)?;

    request.extensions_mut().insert(AuthenticatedUser {
        id,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

/// Extractor giving handlers access to the authenticated principal
///
/// Requires the `authenticate` middleware to have run; rejects with the
/// missing-credential response otherwise.
pub struct JwtAuth(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for JwtAuth
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .map(JwtAuth)
                .ok_or(AuthError::MissingCredential)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages_are_stable() {
        assert_eq!(
            AuthError::MissingCredential.public_message(),
            "No token, authorization denied"
        );
        assert_eq!(AuthError::ExpiredCredential.public_message(), "Token expired");
        assert_eq!(
            AuthError::InvalidCredential.public_message(),
            "Invalid or unauthorized token"
        );
    }

    #[test]
    fn test_all_rejections_are_unauthorized() {
        for err in [
            AuthError::MissingCredential,
            AuthError::ExpiredCredential,
            AuthError::InvalidCredential,
        ] {
            assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_token_error_conversion() {
        assert_eq!(
            AuthError::from(TokenError::Expired),
            AuthError::ExpiredCredential
        );
        assert_eq!(
            AuthError::from(TokenError::Invalid),
            AuthError::InvalidCredential
        );
    }
}
