//! Port abstraction for one-way password hashing.

/// Errors raised by password hashing adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordHashError {
    /// Hashing the raw password failed.
    #[error("password hashing failed: {message}")]
    Hash { message: String },

    /// The stored hash could not be parsed for verification.
    #[error("stored password hash is malformed: {message}")]
    MalformedHash { message: String },
}

impl PasswordHashError {
    /// Create a hashing error with the given message.
    pub fn hash(message: impl Into<String>) -> Self {
        Self::Hash {
            message: message.into(),
        }
    }

    /// Create a malformed-hash error with the given message.
    pub fn malformed_hash(message: impl Into<String>) -> Self {
        Self::MalformedHash {
            message: message.into(),
        }
    }
}

/// Driven port for credential hashing.
///
/// Contract: `verify(raw, hash(raw))` is true for every raw password, and
/// `hash` salts per call, so two hashes of the same password differ while
/// both still verify. Argument order is fixed as `(raw, stored)`.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Irreversibly hash a raw password into an opaque stored form.
    fn hash(&self, raw: &str) -> Result<String, PasswordHashError>;

    /// Check a raw password against a stored hash. A mismatch is
    /// `Ok(false)`, not an error.
    fn verify(&self, raw: &str, stored: &str) -> Result<bool, PasswordHashError>;
}

/// Transparent hasher for tests: "hashes" by prefixing, never for
/// production use.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePasswordHasher;

impl PasswordHasher for FixturePasswordHasher {
    fn hash(&self, raw: &str) -> Result<String, PasswordHashError> {
        Ok(format!("fixture:{raw}"))
    }

    fn verify(&self, raw: &str, stored: &str) -> Result<bool, PasswordHashError> {
        match stored.strip_prefix("fixture:") {
            Some(rest) => Ok(rest == raw),
            None => Err(PasswordHashError::malformed_hash("missing fixture prefix")),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fixture_hasher_round_trips() {
        let hasher = FixturePasswordHasher;
        let stored = hasher.hash("pw1").expect("hash");
        assert!(hasher.verify("pw1", &stored).expect("verify"));
        assert!(!hasher.verify("pw2", &stored).expect("verify"));
    }

    #[rstest]
    fn fixture_hasher_rejects_foreign_hashes() {
        let hasher = FixturePasswordHasher;
        let err = hasher
            .verify("pw1", "$argon2id$...")
            .expect_err("foreign hash must be malformed");
        assert!(matches!(err, PasswordHashError::MalformedHash { .. }));
    }
}
