//! Credential hashing using Argon2id
//!
//! Account secrets are never stored. Each account keeps a salted Argon2id
//! hash in PHC string form, and logins are checked with a constant-time
//! verification against that hash.

use argon2::{
    password_hash::{
        rand_core::OsRng, Error as PasswordHashError, PasswordHash, PasswordHasher,
        PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use serde::{Deserialize, Serialize};

use super::secure_memory::SecretString;
use crate::error::{LedgerError, LedgerResult};

/// Cost parameters for hashing new credentials
///
/// Verification always uses the parameters embedded in the stored hash,
/// so changing these only affects accounts registered afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialParams {
    /// Memory cost in KiB (default: 19456 = 19 MiB)
    pub memory_cost: u32,
    /// Time cost (iterations, default: 2)
    pub time_cost: u32,
    /// Parallelism degree (default: 1)
    pub parallelism: u32,
}

impl Default for CredentialParams {
    fn default() -> Self {
        Self {
            memory_cost: Params::DEFAULT_M_COST,
            time_cost: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl CredentialParams {
    /// Create params with specific values
    pub fn with_values(memory_cost: u32, time_cost: u32, parallelism: u32) -> Self {
        Self {
            memory_cost,
            time_cost,
            parallelism,
        }
    }

    fn hasher(&self) -> LedgerResult<Argon2<'static>> {
        let params = Params::new(self.memory_cost, self.time_cost, self.parallelism, None)
            .map_err(|e| LedgerError::Config(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Hash a secret with a fresh random salt
pub fn hash_secret(secret: &SecretString, params: &CredentialParams) -> LedgerResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = params
        .hasher()?
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| LedgerError::Credential(format!("Hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Check a secret against a stored hash
///
/// Returns `Ok(false)` for a wrong secret and an error only when the stored
/// hash itself cannot be parsed or evaluated.
pub fn verify_secret(secret: &SecretString, stored: &str) -> LedgerResult<bool> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| LedgerError::Credential(format!("Stored credential is unreadable: {}", e)))?;

    match Argon2::default().verify_password(secret.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(e) => Err(LedgerError::Credential(format!("Verification failed: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_params() -> CredentialParams {
        CredentialParams::with_values(64, 1, 1)
    }

    #[test]
    fn test_hash_then_verify() {
        let secret = SecretString::new("hunter2");
        let hash = hash_secret(&secret, &fast_params()).unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("hunter2"));
        assert!(verify_secret(&secret, &hash).unwrap());
        assert!(!verify_secret(&SecretString::new("hunter3"), &hash).unwrap());
    }

    #[test]
    fn test_same_secret_different_salt() {
        let secret = SecretString::new("same");
        let first = hash_secret(&secret, &fast_params()).unwrap();
        let second = hash_secret(&secret, &fast_params()).unwrap();
        assert_ne!(first, second);
        assert!(verify_secret(&secret, &first).unwrap());
        assert!(verify_secret(&secret, &second).unwrap());
    }

    #[test]
    fn test_unreadable_hash_is_an_error() {
        let result = verify_secret(&SecretString::new("x"), "plain-text-password");
        assert!(matches!(result, Err(LedgerError::Credential(_))));
    }

    #[test]
    fn test_invalid_params() {
        let params = CredentialParams::with_values(1, 0, 0);
        let result = hash_secret(&SecretString::new("x"), &params);
        assert!(matches!(result, Err(LedgerError::Config(_))));
    }
}
