pub mod claims;
pub mod errors;
pub mod handler;

pub use claims::Claims;
pub use claims::Identity;
pub use errors::TokenError;
pub use handler::JwtTokenService;
pub use handler::TokenConfig;

/// Capability for issuing and validating signed identity tokens.
pub trait TokenService: Send + Sync + 'static {
    /// Issue a signed token for `identity`, valid from now for the
    /// configured lifetime.
    fn issue(&self, identity: Identity) -> Result<String, TokenError>;

    /// Validate a token string and recover its claims, or report why it is
    /// invalid.
    fn validate(&self, token: &str) -> Result<Claims, TokenError>;
}
