//! Driving port for account use-cases: signup and login.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! create accounts and authenticate credentials without knowing (or
//! importing) the backing infrastructure. HTTP handler tests can substitute
//! a test double instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, SignupRequest, Username};

/// Domain use-case port for account management.
#[async_trait]
pub trait Accounts: Send + Sync {
    /// Create a new account. Fails with a conflict when the username is
    /// taken; all other persistence failures surface as an opaque generic
    /// failure.
    async fn signup(&self, request: SignupRequest) -> Result<(), Error>;

    /// Validate credentials and return the authenticated username.
    ///
    /// An unknown username and a wrong password produce identical errors so
    /// the response does not leak which part failed.
    async fn login(&self, credentials: &LoginCredentials) -> Result<Username, Error>;
}
