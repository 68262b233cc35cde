//! Operator account directory
//!
//! Email-keyed account records with registration, credential check, and
//! password change. Passwords are stored as salted Argon2 hashes in PHC
//! string form; the stored hash never leaves this module.
//!
//! The length rule is exactly [`PASSWORD_LEN`] characters. Characters, not
//! digits: any 8-character string passes.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;
use rustc_hash::FxHashMap;

use super::errors::StoreError;

/// Required password length, in characters.
pub const PASSWORD_LEN: usize = 8;

/// Email → password-hash directory
#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: FxHashMap<String, String>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn contains(&self, email: &str) -> bool {
        self.accounts.contains_key(email)
    }

    /// Register an account, overwriting any existing record for the email.
    ///
    /// Rejected if the password length rule fails; a previously registered
    /// account (and its password) is untouched on rejection.
    pub fn register(&mut self, email: &str, password: &str) -> Result<(), StoreError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(StoreError::EmptyField { field: "Email" });
        }
        check_length(password)?;
        let hash = hash_password(password)?;
        self.accounts.insert(email.to_string(), hash);
        Ok(())
    }

    /// Check credentials. Unknown email and wrong password both report
    /// [`StoreError::InvalidCredentials`].
    pub fn authenticate(&self, email: &str, password: &str) -> Result<(), StoreError> {
        let stored = self
            .accounts
            .get(email.trim())
            .ok_or(StoreError::InvalidCredentials)?;
        if verify_password(password, stored) {
            Ok(())
        } else {
            Err(StoreError::InvalidCredentials)
        }
    }

    /// Overwrite the password of an existing account.
    pub fn change_password(&mut self, email: &str, new_password: &str) -> Result<(), StoreError> {
        check_length(new_password)?;
        let slot = self
            .accounts
            .get_mut(email)
            .ok_or_else(|| StoreError::UnknownAccount {
                email: email.to_string(),
            })?;
        *slot = hash_password(new_password)?;
        Ok(())
    }
}

fn check_length(password: &str) -> Result<(), StoreError> {
    let actual = password.chars().count();
    if actual != PASSWORD_LEN {
        return Err(StoreError::PasswordLength { actual });
    }
    Ok(())
}

fn hash_password(password: &str) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| StoreError::PasswordHash {
            message: e.to_string(),
        })
}

fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_wrong_length() {
        let mut dir = AccountDirectory::new();
        assert_eq!(
            dir.register("a@b.com", "123"),
            Err(StoreError::PasswordLength { actual: 3 })
        );
        assert_eq!(
            dir.register("a@b.com", "123456789"),
            Err(StoreError::PasswordLength { actual: 9 })
        );
        assert!(dir.is_empty());
    }

    #[test]
    fn test_register_counts_characters_not_digits() {
        let mut dir = AccountDirectory::new();
        // any 8-character string passes, digits or not
        dir.register("a@b.com", "pass word").unwrap_err();
        dir.register("a@b.com", "passw0rd").unwrap();
        assert!(dir.contains("a@b.com"));
    }

    #[test]
    fn test_authenticate_roundtrip() {
        let mut dir = AccountDirectory::new();
        dir.register("a@b.com", "12345678").unwrap();
        assert_eq!(dir.authenticate("a@b.com", "12345678"), Ok(()));
        assert_eq!(
            dir.authenticate("a@b.com", "87654321"),
            Err(StoreError::InvalidCredentials)
        );
        assert_eq!(
            dir.authenticate("nobody@b.com", "12345678"),
            Err(StoreError::InvalidCredentials)
        );
    }

    #[test]
    fn test_failed_reregistration_retains_password() {
        let mut dir = AccountDirectory::new();
        dir.register("a@b.com", "12345678").unwrap();
        dir.register("a@b.com", "123").unwrap_err();
        assert_eq!(dir.authenticate("a@b.com", "12345678"), Ok(()));
    }

    #[test]
    fn test_change_password() {
        let mut dir = AccountDirectory::new();
        dir.register("a@b.com", "12345678").unwrap();
        assert_eq!(
            dir.change_password("a@b.com", "short"),
            Err(StoreError::PasswordLength { actual: 5 })
        );
        dir.change_password("a@b.com", "abcdefgh").unwrap();
        assert_eq!(dir.authenticate("a@b.com", "abcdefgh"), Ok(()));
        assert_eq!(
            dir.authenticate("a@b.com", "12345678"),
            Err(StoreError::InvalidCredentials)
        );
        assert!(matches!(
            dir.change_password("x@y.com", "abcdefgh"),
            Err(StoreError::UnknownAccount { .. })
        ));
    }
}
