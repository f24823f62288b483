//! Argon2id-backed implementation of the password hashing port.
//!
//! Hashes are stored as PHC-format strings
//! (`$argon2id$v=19$m=19456,t=2,p=1$...`), so parameters and salt travel
//! with the hash and verification needs no extra configuration.

use argon2::Argon2;
use argon2::password_hash::{
    PasswordHash, PasswordHasher as PhcHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};

use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Memory-hard hasher using the `argon2` crate's default Argon2id
/// parameters with a fresh random salt per hash.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2PasswordHasher;

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, raw: &str) -> Result<String, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(raw.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| PasswordHashError::hash(err.to_string()))
    }

    fn verify(&self, raw: &str, stored: &str) -> Result<bool, PasswordHashError> {
        let parsed =
            PasswordHash::new(stored).map_err(|err| PasswordHashError::malformed_hash(err.to_string()))?;
        Ok(Argon2::default()
            .verify_password(raw.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_verify_and_salts_differ() {
        let hasher = Argon2PasswordHasher;
        let first = hasher.hash("pw1").expect("hash");
        let second = hasher.hash("pw1").expect("hash");

        assert_ne!(first, second);
        assert!(first.starts_with("$argon2id$"));
        assert!(hasher.verify("pw1", &first).expect("verify"));
        assert!(hasher.verify("pw1", &second).expect("verify"));
        assert!(!hasher.verify("pw2", &first).expect("verify"));
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        let hasher = Argon2PasswordHasher;
        let err = hasher
            .verify("pw1", "not-a-phc-string")
            .expect_err("malformed hash must fail");
        assert!(matches!(err, PasswordHashError::MalformedHash { .. }));
    }
}
