//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use crate::application::use_cases::access::ResolveIdentityUseCase;
use crate::infrastructure::driven_adapters::config::AppConfig;
use crate::infrastructure::driven_adapters::token_verifier::TokenVerifier;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub token_verifier: Arc<TokenVerifier>,
    pub resolve_identity_use_case: Arc<ResolveIdentityUseCase>,
}
