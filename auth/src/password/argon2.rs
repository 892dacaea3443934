use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use subtle::ConstantTimeEq;

use super::errors::PasswordError;
use super::PasswordHasher;

/// Cost parameters for Argon2id key derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgonParams {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
    /// Random salt length in bytes.
    pub salt_length: usize,
    /// Derived key length in bytes.
    pub key_length: usize,
}

impl Default for ArgonParams {
    fn default() -> Self {
        Self {
            memory_kib: 64 * 1024,
            iterations: 3,
            parallelism: 2,
            salt_length: 16,
            key_length: 32,
        }
    }
}

/// Argon2id password hasher producing self-describing credential strings.
///
/// Credentials are encoded as
/// `$argon2id$v=19$m=<memory>,t=<iterations>,p=<parallelism>$<salt>$<key>`
/// with unpadded base64 binary fields. Verification re-derives the key with
/// the parameters embedded in the credential, so cost settings can be raised
/// over time without invalidating previously stored hashes.
pub struct ArgonPasswordHasher {
    params: ArgonParams,
}

impl ArgonPasswordHasher {
    /// Create a hasher that produces new credentials under `params`.
    pub fn new(params: ArgonParams) -> Self {
        Self { params }
    }

    fn derive_key(
        password: &[u8],
        salt: &[u8],
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
        key_length: usize,
    ) -> Result<Vec<u8>, argon2::Error> {
        let params = Params::new(memory_kib, iterations, parallelism, Some(key_length))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let mut key = vec![0u8; key_length];
        argon2.hash_password_into(password, salt, &mut key)?;
        Ok(key)
    }
}

impl PasswordHasher for ArgonPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let mut salt = vec![0u8; self.params.salt_length];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| PasswordError::RandomSource(e.to_string()))?;

        let key = Self::derive_key(
            password.as_bytes(),
            &salt,
            self.params.memory_kib,
            self.params.iterations,
            self.params.parallelism,
            self.params.key_length,
        )
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        Ok(format!(
            "$argon2id$v={}$m={},t={},p={}${}${}",
            Version::V0x13 as u32,
            self.params.memory_kib,
            self.params.iterations,
            self.params.parallelism,
            STANDARD_NO_PAD.encode(&salt),
            STANDARD_NO_PAD.encode(&key),
        ))
    }

    fn verify(&self, credential: &str, password: &str) -> Result<bool, PasswordError> {
        let parts: Vec<&str> = credential.split('$').collect();
        if parts.len() != 6 || !parts[0].is_empty() || parts[1] != "argon2id" {
            return Err(PasswordError::MalformedCredential);
        }

        let version: u32 = parts[2]
            .strip_prefix("v=")
            .and_then(|v| v.parse().ok())
            .ok_or(PasswordError::MalformedCredential)?;
        if version != Version::V0x13 as u32 {
            return Err(PasswordError::UnsupportedVersion(version));
        }

        let (memory_kib, iterations, parallelism) =
            parse_cost_fields(parts[3]).ok_or(PasswordError::MalformedCredential)?;

        let salt = STANDARD_NO_PAD
            .decode(parts[4])
            .map_err(|_| PasswordError::MalformedCredential)?;
        let expected = STANDARD_NO_PAD
            .decode(parts[5])
            .map_err(|_| PasswordError::MalformedCredential)?;

        // Re-derive with the parameters embedded in the credential, never the
        // hasher's own configuration. Parameters the KDF rejects mean the
        // credential embeds unusable values.
        let derived = Self::derive_key(
            password.as_bytes(),
            &salt,
            memory_kib,
            iterations,
            parallelism,
            expected.len(),
        )
        .map_err(|_| PasswordError::MalformedCredential)?;

        Ok(derived.ct_eq(&expected).into())
    }
}

/// Parse the `m=<n>,t=<n>,p=<n>` cost field, rejecting any deviation from
/// that exact shape.
fn parse_cost_fields(field: &str) -> Option<(u32, u32, u32)> {
    let mut fields = field.split(',');
    let memory = fields.next()?.strip_prefix("m=")?.parse().ok()?;
    let iterations = fields.next()?.strip_prefix("t=")?.parse().ok()?;
    let parallelism = fields.next()?.strip_prefix("p=")?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((memory, iterations, parallelism))
}
