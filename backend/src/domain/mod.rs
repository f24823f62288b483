//! Domain primitives, services, and ports.
//!
//! Purpose: define strongly typed entities and the access-control use-cases
//! that gate every memo operation behind session identity and ownership.
//! Adapters (HTTP inbound, Diesel outbound) depend on this module, never
//! the other way round.

pub mod account_service;
pub mod auth;
pub mod error;
pub mod memo;
pub mod memo_service;
pub mod ports;
pub mod user;

pub use self::account_service::AccountService;
pub use self::auth::{AuthValidationError, LoginCredentials, SignupRequest};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::memo::{
    CONTENT_MAX, Memo, MemoDraft, MemoId, MemoPatch, MemoValidationError, NewMemo, TITLE_MAX,
};
pub use self::memo_service::MemoService;
pub use self::user::{NewUser, USERNAME_MAX, User, UserId, UserValidationError, Username};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use memoserv::domain::{ApiResult, Error};
///
/// fn check() -> ApiResult<()> {
///     Err(Error::unauthorized("login required"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
