//! In-memory repository adapters.
//!
//! Back the server when no database is configured (local development) and
//! give tests a real, mutable store without PostgreSQL. Behaviour mirrors
//! the Diesel adapters: sequential ids, unique usernames, owner-scoped memo
//! access.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{
    MemoRepository, MemoRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{Memo, MemoId, MemoPatch, NewMemo, NewUser, User, UserId, Username};

#[derive(Default)]
struct UserStore {
    next_id: i32,
    users: BTreeMap<i32, User>,
}

/// Mutex-guarded user store keyed by id.
#[derive(Default)]
pub struct MemoryUserRepository {
    store: Mutex<UserStore>,
}

fn lock_poisoned<E>(_: E) -> String {
    "repository lock poisoned".to_owned()
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, UserRepositoryError> {
        let mut store = self
            .store
            .lock()
            .map_err(|err| UserRepositoryError::connection(lock_poisoned(err)))?;

        if store
            .users
            .values()
            .any(|existing| existing.username() == &user.username)
        {
            return Err(UserRepositoryError::DuplicateUsername);
        }

        store.next_id += 1;
        let id = store.next_id;
        let stored = User::new(
            UserId::new(id),
            user.username.clone(),
            user.email.clone(),
            user.hashed_password.clone(),
        );
        store.users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserRepositoryError> {
        let store = self
            .store
            .lock()
            .map_err(|err| UserRepositoryError::connection(lock_poisoned(err)))?;

        Ok(store
            .users
            .values()
            .find(|user| user.username() == username)
            .cloned())
    }
}

#[derive(Default)]
struct MemoStore {
    next_id: i32,
    memos: BTreeMap<i32, Memo>,
}

/// Mutex-guarded memo store keyed by id; iteration order gives the
/// oldest-first listing.
#[derive(Default)]
pub struct MemoryMemoRepository {
    store: Mutex<MemoStore>,
}

impl MemoryMemoRepository {
    fn locked(&self) -> Result<std::sync::MutexGuard<'_, MemoStore>, MemoRepositoryError> {
        self.store
            .lock()
            .map_err(|err| MemoRepositoryError::connection(lock_poisoned(err)))
    }
}

#[async_trait]
impl MemoRepository for MemoryMemoRepository {
    async fn insert(&self, memo: &NewMemo) -> Result<Memo, MemoRepositoryError> {
        let mut store = self.locked()?;
        store.next_id += 1;
        let id = store.next_id;
        let stored = Memo {
            id: MemoId::new(id),
            user_id: memo.user_id,
            title: memo.title.clone(),
            content: memo.content.clone(),
        };
        store.memos.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_all_by_owner(&self, owner: UserId) -> Result<Vec<Memo>, MemoRepositoryError> {
        let store = self.locked()?;
        Ok(store
            .memos
            .values()
            .filter(|memo| memo.user_id == owner)
            .cloned()
            .collect())
    }

    async fn find_by_id_and_owner(
        &self,
        id: MemoId,
        owner: UserId,
    ) -> Result<Option<Memo>, MemoRepositoryError> {
        let store = self.locked()?;
        Ok(store
            .memos
            .get(&id.as_i32())
            .filter(|memo| memo.user_id == owner)
            .cloned())
    }

    async fn update(
        &self,
        id: MemoId,
        owner: UserId,
        patch: &MemoPatch,
    ) -> Result<Option<Memo>, MemoRepositoryError> {
        let mut store = self.locked()?;
        let Some(memo) = store
            .memos
            .get_mut(&id.as_i32())
            .filter(|memo| memo.user_id == owner)
        else {
            return Ok(None);
        };
        patch.apply_to(memo);
        Ok(Some(memo.clone()))
    }

    async fn delete(&self, id: MemoId, owner: UserId) -> Result<bool, MemoRepositoryError> {
        let mut store = self.locked()?;
        let owned = store
            .memos
            .get(&id.as_i32())
            .is_some_and(|memo| memo.user_id == owner);
        if owned {
            store.memos.remove(&id.as_i32());
        }
        Ok(owned)
    }
}
