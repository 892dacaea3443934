//! Credential and token authentication core.
//!
//! Provides the two capabilities a registration/login service needs:
//! - Password hashing (Argon2id, self-describing credential strings)
//! - Session tokens (HS256 JWT with expiry)
//!
//! Both operations are synchronous and CPU-bound. The memory-hard key
//! derivation is intentionally expensive, so async callers should run
//! `hash`/`verify` on a blocking task and bound in-flight invocations.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{ArgonParams, ArgonPasswordHasher, PasswordHasher};
//!
//! let hasher = ArgonPasswordHasher::new(ArgonParams::default());
//! let credential = hasher.hash("my_password").unwrap();
//! assert!(credential.starts_with("$argon2id$v=19$"));
//! assert!(hasher.verify(&credential, "my_password").unwrap());
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{Identity, JwtTokenService, TokenConfig, TokenService};
//! use chrono::Duration;
//!
//! let service = JwtTokenService::new(TokenConfig {
//!     secret: b"secret_key_at_least_32_bytes_long!".to_vec(),
//!     lifetime: Duration::hours(24),
//! });
//!
//! let token = service
//!     .issue(Identity {
//!         email: "alice@example.com".to_string(),
//!         first_name: "Alice".to_string(),
//!         last_name: "Smith".to_string(),
//!     })
//!     .unwrap();
//!
//! let claims = service.validate(&token).unwrap();
//! assert_eq!(claims.email, "alice@example.com");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::Identity;
pub use jwt::JwtTokenService;
pub use jwt::TokenConfig;
pub use jwt::TokenError;
pub use jwt::TokenService;
pub use password::ArgonParams;
pub use password::ArgonPasswordHasher;
pub use password::PasswordError;
pub use password::PasswordHasher;
