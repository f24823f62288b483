//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{Accounts, MemoCommand, MemoQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn Accounts>,
    pub memos: Arc<dyn MemoCommand>,
    pub memos_query: Arc<dyn MemoQuery>,
}

impl HttpState {
    /// Construct state from port implementations.
    pub fn new(
        accounts: Arc<dyn Accounts>,
        memos: Arc<dyn MemoCommand>,
        memos_query: Arc<dyn MemoQuery>,
    ) -> Self {
        Self {
            accounts,
            memos,
            memos_query,
        }
    }
}
