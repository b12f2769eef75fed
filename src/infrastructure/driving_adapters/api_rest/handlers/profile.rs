//! Profile Handlers
//!
//! The one read-only endpoint exercising the full authentication and
//! authorization chain.

use axum::{extract::State, routing::get, Json, Router};

use crate::infrastructure::driving_adapters::api_rest::dto::profile::IdentityResponseDto;
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for profile endpoints
///
/// The `authenticate` middleware and the route's role gate are layered on by
/// the caller at router-construction time.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_profile))
}

/// GET /profile - Resolve and return the acting user's record
///
/// The gate does not attach the resolved record to the request, so the
/// handler re-resolves through the same use case.
///
/// # Responses
///
/// * 200 OK - Resolved identity
/// * 401 Unauthorized - Missing, invalid, or expired bearer token
/// * 404 Not Found - No record in either identity pool
#[axum::debug_handler]
async fn get_profile(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
) -> Result<Json<IdentityResponseDto>, ApiError> {
    let identity = state.resolve_identity_use_case.execute(&user.id).await?;

    Ok(Json(IdentityResponseDto::from(identity)))
}
