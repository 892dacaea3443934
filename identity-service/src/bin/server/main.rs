use std::sync::Arc;

use auth::ArgonParams;
use auth::ArgonPasswordHasher;
use auth::JwtTokenService;
use auth::TokenConfig;
use chrono::Duration;
use identity_service::config::Config;
use identity_service::domain::user::service::UserService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::repositories::InMemoryUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "identity_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "identity-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // The signing secret itself never reaches the logs.
    tracing::info!(
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        argon_memory_kib = config.password.memory_kib,
        argon_iterations = config.password.iterations,
        argon_parallelism = config.password.parallelism,
        "Configuration loaded"
    );

    let password_hasher = Arc::new(ArgonPasswordHasher::new(ArgonParams {
        memory_kib: config.password.memory_kib,
        iterations: config.password.iterations,
        parallelism: config.password.parallelism,
        ..ArgonParams::default()
    }));
    let token_service = Arc::new(JwtTokenService::new(TokenConfig {
        secret: config.jwt.secret.clone().into_bytes(),
        lifetime: Duration::hours(config.jwt.expiration_hours),
    }));
    let user_repository = Arc::new(InMemoryUserRepository::new());

    let user_service = Arc::new(UserService::new(
        user_repository,
        password_hasher,
        Arc::clone(&token_service),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, token_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
