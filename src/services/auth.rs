//! Authentication
//!
//! There is no separate sign-up step: the first login with an unseen
//! identifier registers it.

use tracing::{debug, info};

use super::LedgerService;
use crate::crypto::{hash_secret, verify_secret, SecretString};
use crate::error::{LedgerError, LedgerResult};
use crate::models::Account;
use crate::storage::Directory;

impl<D: Directory + ?Sized> LedgerService<'_, D> {
    /// Log in, registering the login on first use
    ///
    /// An existing login is returned only when `secret` verifies against the
    /// stored credential hash. The directory is written only when a new
    /// account is created.
    pub fn authenticate(&self, login: &str, secret: &SecretString) -> LedgerResult<Account> {
        let login = login.trim();
        if login.is_empty() {
            return Err(LedgerError::Validation("Login cannot be empty".into()));
        }
        if secret.is_blank() {
            return Err(LedgerError::Validation("Password cannot be empty".into()));
        }

        let _guard = self.lock()?;

        if let Some(account) = self.directory.get(login)? {
            if verify_secret(secret, account.credential())? {
                debug!(login, "login accepted");
                return Ok(account);
            }
            return Err(LedgerError::Authentication(format!(
                "Wrong password for '{}'",
                login
            )));
        }

        let credential = hash_secret(secret, &self.settings.credential)?;
        let account = Account::new(login, credential);
        self.commit(&[&account])?;
        info!(login, "registered new account");

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::storage::MemoryDirectory;

    #[test]
    fn test_first_login_registers() {
        let directory = MemoryDirectory::new();
        let settings = test_settings();
        let service = LedgerService::new(&directory, &settings);

        let account = service
            .authenticate("alice", &SecretString::from("s3cret"))
            .unwrap();

        assert_eq!(account.login(), "alice");
        assert_ne!(account.credential(), "s3cret");
        assert!(directory.exists("alice").unwrap());
        assert_eq!(directory.flush_count(), 1);
    }

    #[test]
    fn test_existing_login_checks_secret() {
        let directory = MemoryDirectory::new();
        let settings = test_settings();
        let service = LedgerService::new(&directory, &settings);

        service
            .authenticate("alice", &SecretString::from("s3cret"))
            .unwrap();

        let again = service
            .authenticate("alice", &SecretString::from("s3cret"))
            .unwrap();
        assert_eq!(again.login(), "alice");

        let err = service
            .authenticate("alice", &SecretString::from("S3CRET"))
            .unwrap_err();
        assert!(err.is_authentication());

        // Only the registration wrote to the directory
        assert_eq!(directory.flush_count(), 1);
    }

    #[test]
    fn test_blank_login_or_secret_rejected() {
        let directory = MemoryDirectory::new();
        let settings = test_settings();
        let service = LedgerService::new(&directory, &settings);

        assert!(service
            .authenticate("  ", &SecretString::from("x"))
            .unwrap_err()
            .is_validation());
        assert!(service
            .authenticate("bob", &SecretString::from(" "))
            .unwrap_err()
            .is_validation());
        assert!(!directory.exists("bob").unwrap());
    }

    #[test]
    fn test_failed_registration_can_be_retried() {
        let directory = FlakyDirectory::default();
        let settings = test_settings();
        let service = LedgerService::new(&directory, &settings);

        directory.arm();
        let err = service
            .authenticate("alice", &SecretString::from("first"))
            .unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)));
        assert!(!directory.exists("alice").unwrap());

        directory.disarm();
        let account = service
            .authenticate("alice", &SecretString::from("second"))
            .unwrap();
        assert_eq!(account.login(), "alice");
        assert!(service
            .authenticate("alice", &SecretString::from("second"))
            .is_ok());
    }
}
