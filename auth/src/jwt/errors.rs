use thiserror::Error;

/// Error type for token issuance and validation.
///
/// Every validation failure means "unauthorized" to the caller; only
/// `Expired` is worth distinguishing for user-facing messaging.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed")]
    Malformed,

    #[error("Token declares an unsupported signing algorithm")]
    UnsupportedAlgorithm,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token has expired")]
    Expired,
}
