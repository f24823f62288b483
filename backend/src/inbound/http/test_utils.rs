//! Shared helpers for in-crate HTTP tests.
//!
//! Builds real apps backed by the in-memory adapters so handler tests
//! exercise the full extractor/middleware path without a database.

use std::sync::Arc;

use actix_session::SessionMiddleware;
use actix_session::config::CookieContentSecurity;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use crate::domain::ports::FixturePasswordHasher;
use crate::domain::{AccountService, MemoService};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::memory::{MemoryMemoRepository, MemoryUserRepository};

/// Cookie-backed session middleware with a throwaway key, suitable for
/// `actix_web::test` apps only.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".into())
        .cookie_secure(false)
        .cookie_same_site(SameSite::Lax)
        .cookie_content_security(CookieContentSecurity::Private)
        .build()
}

/// Handler state wired to fresh in-memory repositories and the fixture
/// password hasher.
pub fn memory_http_state() -> HttpState {
    let users = Arc::new(MemoryUserRepository::default());
    let memos = Arc::new(MemoryMemoRepository::default());
    let hasher = Arc::new(FixturePasswordHasher);
    let accounts = Arc::new(AccountService::new(Arc::clone(&users), hasher));
    let memo_service = Arc::new(MemoService::new(users, memos));
    HttpState::new(accounts, Arc::clone(&memo_service) as _, memo_service as _)
}

/// Full API app over in-memory state: session middleware plus every
/// `/api/v1` route.
pub fn account_test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(memory_http_state()))
        .wrap(test_session_middleware())
        .service(crate::inbound::http::api_scope())
}

/// JSON payload for `POST /api/v1/signup`.
pub fn signup_body(username: &str, email: &str, password: &str) -> Value {
    json!({ "username": username, "email": email, "password": password })
}

/// Log in through the real endpoint and return the session cookie.
///
/// Panics if the login fails; callers are expected to have signed the user
/// up first.
pub async fn login_as<S>(app: &S, username: &str, password: &str) -> Cookie<'static>
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let response = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": username, "password": password }))
            .to_request(),
    )
    .await;
    assert!(response.status().is_success(), "login failed for {username}");
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie on login")
        .into_owned()
}
