use thiserror::Error;

/// Error type for password hashing and verification.
///
/// No variant ever carries plaintext or derived key material.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Secure random source unavailable: {0}")]
    RandomSource(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Malformed credential")]
    MalformedCredential,

    #[error("Unsupported credential version: {0}")]
    UnsupportedVersion(u32),
}
