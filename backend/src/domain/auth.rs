//! Authentication primitives: login and signup payloads.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.
//! Raw passwords are wrapped in [`Zeroizing`] so they are wiped on drop.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::user::{UserValidationError, Username, validate_email};

/// Domain error returned when an authentication payload is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthValidationError {
    /// Username was missing, blank, or malformed.
    InvalidUsername(UserValidationError),
    /// Email was missing or malformed.
    InvalidEmail(UserValidationError),
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for AuthValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUsername(err) | Self::InvalidEmail(err) => err.fmt(f),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for AuthValidationError {}

fn validate_password(password: &str) -> Result<Zeroizing<String>, AuthValidationError> {
    if password.is_empty() {
        return Err(AuthValidationError::EmptyPassword);
    }
    // Passwords keep caller-provided whitespace to avoid surprising
    // credential comparisons.
    Ok(Zeroizing::new(password.to_owned()))
}

/// Validated login credentials used by authentication services.
///
/// # Examples
/// ```
/// use memoserv::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("alice", "pw1").unwrap();
/// assert_eq!(creds.username().as_ref(), "alice");
/// assert_eq!(creds.password(), "pw1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: Username,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, AuthValidationError> {
        let username = Username::new(username).map_err(AuthValidationError::InvalidUsername)?;
        let password = validate_password(password)?;
        Ok(Self { username, password })
    }

    /// Username suitable for user lookups.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated signup payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    username: Username,
    email: String,
    password: Zeroizing<String>,
}

impl SignupRequest {
    /// Construct a signup request from raw inputs.
    pub fn try_from_parts(
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, AuthValidationError> {
        let username = Username::new(username).map_err(AuthValidationError::InvalidUsername)?;
        let email = validate_email(email).map_err(AuthValidationError::InvalidEmail)?;
        let password = validate_password(password)?;
        Ok(Self {
            username,
            email,
            password,
        })
    }

    /// Requested account name.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Contact address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Raw password; hashed before it reaches any store.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw")]
    #[case("   ", "pw")]
    fn login_rejects_blank_usernames(#[case] username: &str, #[case] password: &str) {
        let err = LoginCredentials::try_from_parts(username, password)
            .expect_err("blank usernames must fail");
        assert!(matches!(err, AuthValidationError::InvalidUsername(_)));
    }

    #[rstest]
    fn login_rejects_empty_password() {
        let err =
            LoginCredentials::try_from_parts("alice", "").expect_err("empty password must fail");
        assert_eq!(err, AuthValidationError::EmptyPassword);
    }

    #[rstest]
    #[case("  alice  ", "correct horse battery staple")]
    fn login_trims_username_but_not_password(#[case] username: &str, #[case] password: &str) {
        let creds =
            LoginCredentials::try_from_parts(username, password).expect("valid credentials");
        assert_eq!(creds.username().as_ref(), username.trim());
        assert_eq!(creds.password(), password);
    }

    #[rstest]
    fn signup_rejects_bad_email() {
        let err = SignupRequest::try_from_parts("alice", "nope", "pw")
            .expect_err("malformed email must fail");
        assert!(matches!(err, AuthValidationError::InvalidEmail(_)));
    }

    #[rstest]
    fn signup_accepts_valid_parts() {
        let request =
            SignupRequest::try_from_parts("alice", "a@x.com", "pw1").expect("valid signup");
        assert_eq!(request.username().as_ref(), "alice");
        assert_eq!(request.email(), "a@x.com");
        assert_eq!(request.password(), "pw1");
    }
}
