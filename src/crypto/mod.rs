//! Credential protection for Pocketbook
//!
//! Provides Argon2id hashing of account secrets and a zeroizing string
//! type for holding secrets in memory.

pub mod credential;
pub mod secure_memory;

pub use credential::{hash_secret, verify_secret, CredentialParams};
pub use secure_memory::SecretString;
