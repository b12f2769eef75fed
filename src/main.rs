//! Clinic Access Control API - Main Entry Point

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clinic_access_control::application::use_cases::access::ResolveIdentityUseCase;
use clinic_access_control::domain::models::identity::{Role, RoleSet};
use clinic_access_control::infrastructure::driven_adapters::config::AppConfig;
use clinic_access_control::infrastructure::driven_adapters::database;
use clinic_access_control::infrastructure::driven_adapters::identity_repository::{
    PostgresDoctorRepository, PostgresPatientRepository,
};
use clinic_access_control::infrastructure::driven_adapters::token_verifier::TokenVerifier;
use clinic_access_control::infrastructure::driving_adapters::api_rest::handlers::profile;
use clinic_access_control::infrastructure::driving_adapters::api_rest::middleware::request_id::request_id_middleware;
use clinic_access_control::infrastructure::driving_adapters::api_rest::middleware::{
    authenticate, enforce_role, RoleGate,
};
use clinic_access_control::infrastructure::driving_adapters::api_rest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clinic_access_control=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repositories, one per identity pool
    let patient_repository = Arc::new(PostgresPatientRepository::new(pool.clone()));
    let doctor_repository = Arc::new(PostgresDoctorRepository::new(pool));

    // Token verifier holds the process-wide signing secret, immutable from here on
    let token_verifier = Arc::new(TokenVerifier::new(&config.jwt));

    // Create use cases
    let resolve_identity_use_case = Arc::new(ResolveIdentityUseCase::new(
        patient_repository,
        doctor_repository,
    ));

    // Rate limiting
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(config.rate_limit.requests_per_second)
            .burst_size(config.rate_limit.burst_size)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Invalid rate limit configuration"))?,
    );

    // Create application state
    let app_state = AppState {
        config: Arc::new(config.clone()),
        token_verifier: token_verifier.clone(),
        resolve_identity_use_case: resolve_identity_use_case.clone(),
    };

    // One gate per protected route, bound at router-construction time
    let profile_gate = RoleGate::restrict_to(
        RoleSet::of([Role::Patient, Role::Doctor, Role::Admin]),
        resolve_identity_use_case,
    );

    // Build router; authenticate wraps every route, gates sit per route
    let app = Router::new()
        .nest(
            "/profile",
            profile::router()
                .route_layer(middleware::from_fn_with_state(profile_gate, enforce_role)),
        )
        .layer(middleware::from_fn_with_state(token_verifier, authenticate))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(GovernorLayer {
            config: governor_config,
        })
        .with_state(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
