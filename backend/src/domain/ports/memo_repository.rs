//! Port abstraction for memo persistence adapters and their errors.
//!
//! Ownership is part of every lookup predicate rather than a separate
//! check, so a memo owned by another user is indistinguishable from a
//! nonexistent one. Adapters signal that case with `Ok(None)` / `Ok(false)`,
//! never with a distinct error.

use async_trait::async_trait;

use crate::domain::{Memo, MemoId, MemoPatch, NewMemo, UserId};

/// Persistence errors raised by memo repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoRepositoryError {
    /// Repository connection could not be established.
    #[error("memo repository connection failed: {message}")]
    Connection { message: String },

    /// Query or mutation failed during execution.
    #[error("memo repository query failed: {message}")]
    Query { message: String },
}

impl MemoRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Driven port for memo storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemoRepository: Send + Sync {
    /// Insert a new memo, returning the stored record with its assigned
    /// identifier.
    async fn insert(&self, memo: &NewMemo) -> Result<Memo, MemoRepositoryError>;

    /// Fetch every memo owned by the given user, ordered by identifier.
    async fn find_all_by_owner(&self, owner: UserId) -> Result<Vec<Memo>, MemoRepositoryError>;

    /// Owner-scoped lookup: `Ok(None)` covers both "does not exist" and
    /// "belongs to someone else".
    async fn find_by_id_and_owner(
        &self,
        id: MemoId,
        owner: UserId,
    ) -> Result<Option<Memo>, MemoRepositoryError>;

    /// Apply a partial update through the owner-scoped predicate. Fields
    /// unset in the patch keep their stored values. `Ok(None)` when the
    /// predicate matches nothing.
    async fn update(
        &self,
        id: MemoId,
        owner: UserId,
        patch: &MemoPatch,
    ) -> Result<Option<Memo>, MemoRepositoryError>;

    /// Delete through the owner-scoped predicate. `Ok(false)` when the
    /// predicate matches nothing.
    async fn delete(&self, id: MemoId, owner: UserId) -> Result<bool, MemoRepositoryError>;
}
