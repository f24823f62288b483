//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod memos;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;

use actix_web::{Scope, web};

/// All versioned API routes under `/api/v1`.
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .service(users::signup)
        .service(users::login)
        .service(users::logout)
        .service(users::about)
        .service(memos::list_memos)
        .service(memos::create_memo)
        .service(memos::update_memo)
        .service(memos::delete_memo)
}
