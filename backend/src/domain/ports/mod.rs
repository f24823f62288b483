//! Domain ports: traits that decouple use-cases from adapters.
//!
//! Driving ports ([`Accounts`], [`MemoCommand`], [`MemoQuery`]) are called
//! by inbound adapters; driven ports ([`UserRepository`],
//! [`MemoRepository`], [`PasswordHasher`]) are implemented by outbound
//! adapters. Each driven port carries its own error enum so adapters never
//! leak backend-specific error types into the domain.

mod accounts;
mod memo_repository;
mod memos;
mod password_hasher;
mod user_repository;

pub use accounts::Accounts;
pub use memo_repository::{MemoRepository, MemoRepositoryError};
pub use memos::{MemoCommand, MemoQuery};
pub use password_hasher::{FixturePasswordHasher, PasswordHashError, PasswordHasher};
pub use user_repository::{UserRepository, UserRepositoryError};

#[cfg(test)]
pub use memo_repository::MockMemoRepository;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
#[cfg(test)]
pub use user_repository::MockUserRepository;
