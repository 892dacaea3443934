pub mod argon2;
pub mod errors;

pub use argon2::ArgonParams;
pub use argon2::ArgonPasswordHasher;
pub use errors::PasswordError;

/// Capability for turning plaintext passwords into stored credentials and
/// verifying plaintexts against them.
pub trait PasswordHasher: Send + Sync + 'static {
    /// Hash a plaintext password into a self-describing credential string.
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Verify a plaintext password against a stored credential.
    ///
    /// Returns `true` only on exact match. A wrong password is `Ok(false)`;
    /// an unparsable credential is an error.
    fn verify(&self, credential: &str, password: &str) -> Result<bool, PasswordError>;
}
