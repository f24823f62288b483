//! Driving ports for memo use-cases, split into command and query sides.
//!
//! Every operation takes the authenticated caller's username as resolved
//! from the session; the implementation resolves it to a user record and
//! fails with `NotFound` when the session names a vanished account — a
//! harder failure than a missing session, and deliberately distinct from
//! the 401 the adapter raises for that case.

use async_trait::async_trait;

use crate::domain::{Error, Memo, MemoDraft, MemoId, MemoPatch, Username};

/// Domain use-case port for memo mutations.
#[async_trait]
pub trait MemoCommand: Send + Sync {
    /// Create a memo owned by the caller; both fields are required.
    async fn create(&self, username: &Username, draft: MemoDraft) -> Result<Memo, Error>;

    /// Partially update a memo the caller owns. A memo owned by someone
    /// else fails exactly like a nonexistent one.
    async fn update(
        &self,
        username: &Username,
        id: MemoId,
        patch: MemoPatch,
    ) -> Result<Memo, Error>;

    /// Delete a memo the caller owns, with the same not-found semantics as
    /// [`MemoCommand::update`].
    async fn delete(&self, username: &Username, id: MemoId) -> Result<(), Error>;
}

/// Domain use-case port for memo reads.
#[async_trait]
pub trait MemoQuery: Send + Sync {
    /// List the caller's memos, ordered by identifier.
    async fn list(&self, username: &Username) -> Result<Vec<Memo>, Error>;
}
