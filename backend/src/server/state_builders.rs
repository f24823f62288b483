//! Builders wiring repositories and services into HTTP handler state.

use std::sync::Arc;

use crate::domain::{AccountService, MemoService};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::memory::{MemoryMemoRepository, MemoryUserRepository};
use crate::outbound::persistence::{DieselMemoRepository, DieselUserRepository};
use crate::outbound::security::Argon2PasswordHasher;

use super::ServerConfig;

/// Build handler state from the configuration: Diesel-backed repositories
/// when a pool is present, in-memory ones otherwise. Password hashing is
/// Argon2id in both modes.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            let users = Arc::new(DieselUserRepository::new(pool.clone()));
            let memos = Arc::new(DieselMemoRepository::new(pool.clone()));
            compose(users, memos)
        }
        None => {
            let users = Arc::new(MemoryUserRepository::default());
            let memos = Arc::new(MemoryMemoRepository::default());
            compose(users, memos)
        }
    }
}

fn compose<U, M>(users: Arc<U>, memos: Arc<M>) -> HttpState
where
    U: crate::domain::ports::UserRepository + 'static,
    M: crate::domain::ports::MemoRepository + 'static,
{
    let hasher = Arc::new(Argon2PasswordHasher);
    let accounts = Arc::new(AccountService::new(Arc::clone(&users), hasher));
    let memo_service = Arc::new(MemoService::new(users, memos));
    HttpState::new(accounts, Arc::clone(&memo_service) as _, memo_service as _)
}
