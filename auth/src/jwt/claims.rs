use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity and expiry facts asserted inside a token.
///
/// Created fresh on each login and reconstructed by validation; never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub email: String,
    pub first_name: String,
    pub last_name: String,

    /// Issued-at (Unix timestamp)
    pub iat: i64,

    /// Expiry (Unix timestamp); always `iat` plus the configured lifetime
    pub exp: i64,
}

/// Claims input for token issuance: who the token is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl Claims {
    /// Build claims for `identity` issued at `issued_at` and expiring after
    /// `lifetime`.
    pub fn issue(identity: Identity, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        let expiry = issued_at + lifetime;
        Self {
            email: identity.email,
            first_name: identity.first_name,
            last_name: identity.last_name,
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
        }
    }
}
