//! Stored credential for clinic users.
//!
//! Plain-text passwords only pass through [`Password::new`] and
//! [`Password::verify`]; what reaches the users table is an Argon2id PHC
//! string with its own random salt.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::{AppError, AppResult};

#[derive(Clone)]
pub struct Password {
    hash: String,
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

impl Password {
    /// Hash `plain_text` with a fresh salt.
    ///
    /// # Errors
    /// `Validation` for an empty password, `Internal` if hashing fails.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        if plain_text.is_empty() {
            return Err(AppError::validation("senha é obrigatória"));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Could not hash password: {}", e)))?
            .to_string();

        Ok(Self { hash })
    }

    /// Wrap a hash read back from the users table.
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn into_string(self) -> String {
        self.hash
    }

    /// A malformed stored hash never matches.
    pub fn verify(&self, plain_text: &str) -> bool {
        let parsed = match PasswordHash::new(&self.hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Stored password hash is not a PHC string: {}", e);
                return false;
            }
        };

        Argon2::default()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_accepts_only_original() {
        let password = Password::new("s3nha-forte").unwrap();

        assert!(password.verify("s3nha-forte"));
        assert!(!password.verify("s3nha-fraca"));
        assert!(!password.verify(""));
    }

    #[test]
    fn test_stored_hash_round_trips() {
        let stored = Password::new("s3nha").unwrap().into_string();
        assert!(stored.starts_with("$argon2id$"));
        assert!(Password::from_hash(stored).verify("s3nha"));
    }

    #[test]
    fn test_salt_differs_per_hash() {
        let first = Password::new("mesma").unwrap();
        let second = Password::new("mesma").unwrap();
        assert_ne!(first.as_str(), second.as_str());
    }

    #[test]
    fn test_empty_password_rejected() {
        assert!(matches!(Password::new(""), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let stored = Password::from_hash("not-a-phc-string".to_string());
        assert!(!stored.verify("not-a-phc-string"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::new("segredo").unwrap();
        assert_eq!(format!("{:?}", password), "Password([REDACTED])");
    }
}
