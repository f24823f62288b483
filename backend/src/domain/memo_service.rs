//! Memo domain service: ownership-gated CRUD use-cases.
//!
//! Implements the [`MemoCommand`] and [`MemoQuery`] driving ports. Every
//! operation resolves the session-supplied username to a user record first,
//! then acts through owner-scoped repository calls so a foreign memo and a
//! missing memo are the same outcome.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    MemoCommand, MemoQuery, MemoRepository, MemoRepositoryError, UserRepository,
    UserRepositoryError,
};
use crate::domain::{Error, Memo, MemoDraft, MemoId, MemoPatch, NewMemo, User, Username};

const USER_NOT_FOUND: &str = "user not found";
const MEMO_NOT_FOUND: &str = "memo not found";

/// Memo service implementing the driving ports.
#[derive(Clone)]
pub struct MemoService<U, M> {
    users: Arc<U>,
    memos: Arc<M>,
}

impl<U, M> MemoService<U, M> {
    /// Create a new service with the given repositories.
    pub fn new(users: Arc<U>, memos: Arc<M>) -> Self {
        Self { users, memos }
    }
}

impl<U, M> MemoService<U, M>
where
    U: UserRepository,
    M: MemoRepository,
{
    fn map_user_error(error: UserRepositoryError) -> Error {
        match error {
            UserRepositoryError::Connection { message } => Error::service_unavailable(message),
            UserRepositoryError::DuplicateUsername | UserRepositoryError::Query { .. } => {
                Error::internal(error.to_string())
            }
        }
    }

    fn map_memo_error(error: MemoRepositoryError) -> Error {
        match error {
            MemoRepositoryError::Connection { message } => Error::service_unavailable(message),
            MemoRepositoryError::Query { message } => Error::internal(message),
        }
    }

    /// Resolve the session's username to a stored user.
    ///
    /// The session middleware already established *who* the caller claims
    /// to be; a missing record here means the account vanished after login,
    /// which is a 404, not a 401.
    async fn resolve_owner(&self, username: &Username) -> Result<User, Error> {
        self.users
            .find_by_username(username)
            .await
            .map_err(Self::map_user_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }
}

#[async_trait]
impl<U, M> MemoCommand for MemoService<U, M>
where
    U: UserRepository,
    M: MemoRepository,
{
    async fn create(&self, username: &Username, draft: MemoDraft) -> Result<Memo, Error> {
        let owner = self.resolve_owner(username).await?;
        let new_memo = NewMemo::from_draft(owner.id(), draft);
        self.memos
            .insert(&new_memo)
            .await
            .map_err(Self::map_memo_error)
    }

    async fn update(
        &self,
        username: &Username,
        id: MemoId,
        patch: MemoPatch,
    ) -> Result<Memo, Error> {
        let owner = self.resolve_owner(username).await?;

        // An empty patch must leave the record untouched, but still goes
        // through the owner-scoped lookup so the not-found semantics hold.
        let updated = if patch.is_empty() {
            self.memos
                .find_by_id_and_owner(id, owner.id())
                .await
                .map_err(Self::map_memo_error)?
        } else {
            self.memos
                .update(id, owner.id(), &patch)
                .await
                .map_err(Self::map_memo_error)?
        };

        updated.ok_or_else(|| Error::not_found(MEMO_NOT_FOUND))
    }

    async fn delete(&self, username: &Username, id: MemoId) -> Result<(), Error> {
        let owner = self.resolve_owner(username).await?;
        let deleted = self
            .memos
            .delete(id, owner.id())
            .await
            .map_err(Self::map_memo_error)?;

        if deleted {
            Ok(())
        } else {
            Err(Error::not_found(MEMO_NOT_FOUND))
        }
    }
}

#[async_trait]
impl<U, M> MemoQuery for MemoService<U, M>
where
    U: UserRepository,
    M: MemoRepository,
{
    async fn list(&self, username: &Username) -> Result<Vec<Memo>, Error> {
        let owner = self.resolve_owner(username).await?;
        self.memos
            .find_all_by_owner(owner.id())
            .await
            .map_err(Self::map_memo_error)
    }
}
