use std::sync::Arc;

use auth::ArgonParams;
use auth::ArgonPasswordHasher;
use auth::JwtTokenService;
use auth::TokenConfig;
use chrono::Duration;
use identity_service::domain::user::service::UserService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::repositories::InMemoryUserRepository;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns the real server on an ephemeral port.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp.
    ///
    /// Uses cheap Argon2 cost parameters to keep the suite fast; the wire
    /// format and verification path are the same as under production
    /// settings.
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let password_hasher = Arc::new(ArgonPasswordHasher::new(ArgonParams {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
            ..ArgonParams::default()
        }));
        let token_service = Arc::new(token_service_with_lifetime(Duration::hours(24)));
        let repository = Arc::new(InMemoryUserRepository::new());

        let user_service = Arc::new(UserService::new(
            repository,
            password_hasher,
            Arc::clone(&token_service),
        ));

        let router = create_router(user_service, token_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }
}

/// Token service sharing the test signing secret, for minting tokens with an
/// arbitrary lifetime (e.g. already-expired ones).
pub fn token_service_with_lifetime(lifetime: Duration) -> JwtTokenService {
    JwtTokenService::new(TokenConfig {
        secret: TEST_JWT_SECRET.to_vec(),
        lifetime,
    })
}
