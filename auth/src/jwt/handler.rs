use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::Identity;
use super::errors::TokenError;
use super::TokenService;

/// Configuration for the JWT token service.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Shared signing secret. Should be at least 256 bits (32 bytes) for
    /// HS256 and sourced from the environment or a secret store, never code.
    pub secret: Vec<u8>,

    /// How long issued tokens stay valid.
    pub lifetime: Duration,
}

/// HS256 JWT implementation of [`TokenService`].
///
/// The signing key is read-only after construction; the service is safe for
/// unrestricted concurrent use.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl JwtTokenService {
    pub fn new(config: TokenConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&config.secret),
            decoding_key: DecodingKey::from_secret(&config.secret),
            lifetime: config.lifetime,
        }
    }

    /// Validate `token` against the clock value `now` (Unix timestamp).
    ///
    /// A token is already invalid at exactly its expiry instant.
    fn validate_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        // Expiry is checked below against the caller's clock, without leeway.
        validation.validate_exp = false;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidAlgorithm => TokenError::UnsupportedAlgorithm,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed,
                }
            })?;

        if now >= token_data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(token_data.claims)
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, identity: Identity) -> Result<String, TokenError> {
        let claims = Claims::issue(identity, Utc::now(), self.lifetime);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate_at(token, Utc::now().timestamp())
    }
}
