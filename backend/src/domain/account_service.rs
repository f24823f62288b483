//! Account domain service: signup and login use-cases.
//!
//! Implements the [`Accounts`] driving port over a user repository and a
//! password hasher. The duplicate-username pre-check is a fast path only;
//! the storage layer's unique constraint is the authoritative guard and its
//! violation is translated rather than propagated.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{
    Accounts, PasswordHashError, PasswordHasher, UserRepository, UserRepositoryError,
};
use crate::domain::{Error, LoginCredentials, NewUser, SignupRequest, Username};

const INVALID_CREDENTIALS: &str = "invalid credentials";
const DUPLICATE_USERNAME: &str = "username is already taken";
const SIGNUP_FAILED: &str = "signup failed; check the submitted details";

/// Account service implementing the [`Accounts`] driving port.
#[derive(Clone)]
pub struct AccountService<U, H> {
    users: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> AccountService<U, H> {
    /// Create a new service with the given repository and hasher.
    pub fn new(users: Arc<U>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

impl<U, H> AccountService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    fn map_repository_error(error: UserRepositoryError) -> Error {
        match error {
            // Surfaced at commit time when concurrent signups race past the
            // pre-check; never allowed to crash the request.
            UserRepositoryError::DuplicateUsername => Error::conflict(DUPLICATE_USERNAME),
            UserRepositoryError::Connection { message } => Error::service_unavailable(message),
            UserRepositoryError::Query { message } => Error::internal(message),
        }
    }

    fn map_hash_error(error: &PasswordHashError) -> Error {
        warn!(error = %error, "password hashing failed");
        Error::internal("credential processing failed")
    }
}

#[async_trait]
impl<U, H> Accounts for AccountService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    async fn signup(&self, request: SignupRequest) -> Result<(), Error> {
        let existing = self
            .users
            .find_by_username(request.username())
            .await
            .map_err(Self::map_repository_error)?;
        if existing.is_some() {
            return Err(Error::conflict(DUPLICATE_USERNAME));
        }

        let hashed_password = self
            .hasher
            .hash(request.password())
            .map_err(|err| Self::map_hash_error(&err))?;

        let new_user = NewUser {
            username: request.username().clone(),
            email: request.email().to_owned(),
            hashed_password,
        };

        match self.users.insert(&new_user).await {
            Ok(_) => Ok(()),
            Err(UserRepositoryError::DuplicateUsername) => Err(Error::conflict(DUPLICATE_USERNAME)),
            Err(err) => {
                // Commit-time failures become an opaque generic message; the
                // underlying cause goes to the log, not the client.
                warn!(error = %err, username = %new_user.username, "signup insert failed");
                Err(Error::internal(SIGNUP_FAILED))
            }
        }
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<Username, Error> {
        let user = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(Self::map_repository_error)?;

        // An unknown username and a wrong password must be outwardly
        // identical, so both collapse to the same error below.
        let Some(user) = user else {
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };

        let verified = self
            .hasher
            .verify(credentials.password(), user.hashed_password())
            .map_err(|err| Self::map_hash_error(&err))?;

        if verified {
            Ok(user.username().clone())
        } else {
            Err(Error::unauthorized(INVALID_CREDENTIALS))
        }
    }
}
