//! Secure memory handling for sensitive data
//!
//! Provides a string type that zeroes its memory on drop so account
//! secrets do not linger after a login attempt.

use std::fmt;
use std::ops::Deref;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A string that is wiped when dropped
///
/// Use this for account secrets read from the command line or a prompt.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretString {
    inner: String,
}

impl SecretString {
    /// Create a new SecretString
    pub fn new(s: impl Into<String>) -> Self {
        Self { inner: s.into() }
    }

    /// Get the string contents
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Check if the secret is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.inner.trim().is_empty()
    }
}

impl Deref for SecretString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let secret = SecretString::new("my_secret");
        let debug = format!("{:?}", secret);
        assert!(!debug.contains("my_secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_deref_and_blank() {
        let secret = SecretString::from("abc");
        assert_eq!(&*secret, "abc");
        assert_eq!(secret.len(), 3);
        assert!(!secret.is_blank());
        assert!(SecretString::from("   ").is_blank());
    }

    #[test]
    fn test_zeroize_clears_contents() {
        let mut secret = SecretString::new("wipe me");
        secret.zeroize();
        assert!(secret.as_str().is_empty());
    }
}
