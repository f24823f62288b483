//! Memo API handlers.
//!
//! Every route requires an authenticated session; the memo set a caller can
//! see or change is always scoped to the session user. A memo owned by
//! someone else is reported as not found rather than forbidden.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{Error, MemoDraft, MemoId, MemoPatch, MemoValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Creation body for `POST /api/v1/memos`; both fields are required.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemoBody {
    pub title: String,
    pub content: String,
}

impl TryFrom<CreateMemoBody> for MemoDraft {
    type Error = MemoValidationError;

    fn try_from(value: CreateMemoBody) -> Result<Self, Self::Error> {
        Self::new(value.title, value.content)
    }
}

/// Update body for `PATCH /api/v1/memos/{memo_id}`; omitted fields keep
/// their stored values.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemoBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl TryFrom<UpdateMemoBody> for MemoPatch {
    type Error = MemoValidationError;

    fn try_from(value: UpdateMemoBody) -> Result<Self, Self::Error> {
        Self::new(value.title, value.content)
    }
}

fn map_memo_validation_error(err: MemoValidationError) -> Error {
    let field = match &err {
        MemoValidationError::EmptyTitle | MemoValidationError::TitleTooLong { .. } => "title",
        MemoValidationError::ContentTooLong { .. } => "content",
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field }))
}

/// List the caller's memos, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/memos",
    responses(
        (status = 200, description = "The caller's memos", body = [crate::domain::Memo]),
        (status = 401, description = "Login required", body = Error)
    ),
    tags = ["memos"],
    operation_id = "list_memos"
)]
#[get("/memos")]
pub async fn list_memos(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let username = session.require_username()?;
    let memos = state.memos_query.list(&username).await?;
    Ok(HttpResponse::Ok().json(memos))
}

/// Create a memo owned by the caller.
#[utoipa::path(
    post,
    path = "/api/v1/memos",
    request_body = CreateMemoBody,
    responses(
        (status = 201, description = "The created memo", body = crate::domain::Memo),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Login required", body = Error)
    ),
    tags = ["memos"],
    operation_id = "create_memo"
)]
#[post("/memos")]
pub async fn create_memo(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateMemoBody>,
) -> ApiResult<HttpResponse> {
    let username = session.require_username()?;
    let draft = MemoDraft::try_from(payload.into_inner()).map_err(map_memo_validation_error)?;
    let memo = state.memos.create(&username, draft).await?;
    Ok(HttpResponse::Created().json(memo))
}

/// Partially update one of the caller's memos.
#[utoipa::path(
    patch,
    path = "/api/v1/memos/{memo_id}",
    request_body = UpdateMemoBody,
    params(("memo_id" = i32, Path, description = "Memo identifier")),
    responses(
        (status = 200, description = "The updated memo", body = crate::domain::Memo),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 404, description = "No such memo for this user", body = Error)
    ),
    tags = ["memos"],
    operation_id = "update_memo"
)]
#[patch("/memos/{memo_id}")]
pub async fn update_memo(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
    payload: web::Json<UpdateMemoBody>,
) -> ApiResult<HttpResponse> {
    let username = session.require_username()?;
    let memo_id = MemoId::new(path.into_inner());
    let patch = MemoPatch::try_from(payload.into_inner()).map_err(map_memo_validation_error)?;
    let memo = state.memos.update(&username, memo_id, patch).await?;
    Ok(HttpResponse::Ok().json(memo))
}

/// Delete one of the caller's memos.
#[utoipa::path(
    delete,
    path = "/api/v1/memos/{memo_id}",
    params(("memo_id" = i32, Path, description = "Memo identifier")),
    responses(
        (status = 200, description = "Deletion acknowledgment"),
        (status = 401, description = "Login required", body = Error),
        (status = 404, description = "No such memo for this user", body = Error)
    ),
    tags = ["memos"],
    operation_id = "delete_memo"
)]
#[delete("/memos/{memo_id}")]
pub async fn delete_memo(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let username = session.require_username()?;
    let memo_id = MemoId::new(path.into_inner());
    state.memos.delete(&username, memo_id).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "memo deleted" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{account_test_app, login_as, signup_body};
    use actix_web::cookie::Cookie;
    use actix_web::test as actix_test;
    use serde_json::Value;

    async fn signed_in_session<S>(app: &S, username: &str) -> Cookie<'static>
    where
        S: actix_web::dev::Service<
                actix_http::Request,
                Response = actix_web::dev::ServiceResponse,
                Error = actix_web::Error,
            >,
    {
        let signup = actix_test::call_service(
            app,
            actix_test::TestRequest::post()
                .uri("/api/v1/signup")
                .set_json(signup_body(username, "user@example.com", "pw1"))
                .to_request(),
        )
        .await;
        assert!(signup.status().is_success());
        login_as(app, username, "pw1").await
    }

    #[actix_web::test]
    async fn memo_routes_require_a_session() {
        let app = actix_test::init_service(account_test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/v1/memos").to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn create_then_list_round_trips_through_the_store() {
        let app = actix_test::init_service(account_test_app()).await;
        let cookie = signed_in_session(&app, "alice").await;

        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/memos")
                .cookie(cookie.clone())
                .set_json(json!({ "title": "groceries", "content": "eggs" }))
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), actix_web::http::StatusCode::CREATED);
        let memo: Value =
            serde_json::from_slice(&actix_test::read_body(created).await).expect("memo body");
        assert_eq!(memo.get("title").and_then(Value::as_str), Some("groceries"));

        let listed = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/memos")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert!(listed.status().is_success());
        let memos: Value =
            serde_json::from_slice(&actix_test::read_body(listed).await).expect("list body");
        assert_eq!(memos.as_array().map(Vec::len), Some(1));
    }

    #[actix_web::test]
    async fn update_with_one_field_preserves_the_other() {
        let app = actix_test::init_service(account_test_app()).await;
        let cookie = signed_in_session(&app, "alice").await;

        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/memos")
                .cookie(cookie.clone())
                .set_json(json!({ "title": "groceries", "content": "eggs" }))
                .to_request(),
        )
        .await;
        let memo: Value =
            serde_json::from_slice(&actix_test::read_body(created).await).expect("memo body");
        let id = memo.get("id").and_then(Value::as_i64).expect("memo id");

        let updated = actix_test::call_service(
            &app,
            actix_test::TestRequest::patch()
                .uri(&format!("/api/v1/memos/{id}"))
                .cookie(cookie)
                .set_json(json!({ "content": "eggs and milk" }))
                .to_request(),
        )
        .await;
        assert!(updated.status().is_success());
        let memo: Value =
            serde_json::from_slice(&actix_test::read_body(updated).await).expect("memo body");
        assert_eq!(memo.get("title").and_then(Value::as_str), Some("groceries"));
        assert_eq!(
            memo.get("content").and_then(Value::as_str),
            Some("eggs and milk")
        );
    }

    #[actix_web::test]
    async fn another_users_memo_reads_as_not_found() {
        let app = actix_test::init_service(account_test_app()).await;
        let alice = signed_in_session(&app, "alice").await;

        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/memos")
                .cookie(alice)
                .set_json(json!({ "title": "private", "content": "secret" }))
                .to_request(),
        )
        .await;
        let memo: Value =
            serde_json::from_slice(&actix_test::read_body(created).await).expect("memo body");
        let id = memo.get("id").and_then(Value::as_i64).expect("memo id");

        let signup = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/signup")
                .set_json(signup_body("mallory", "m@example.com", "pw1"))
                .to_request(),
        )
        .await;
        assert!(signup.status().is_success());
        let mallory = login_as(&app, "mallory", "pw1").await;

        let stolen = actix_test::call_service(
            &app,
            actix_test::TestRequest::patch()
                .uri(&format!("/api/v1/memos/{id}"))
                .cookie(mallory.clone())
                .set_json(json!({ "title": "mine now" }))
                .to_request(),
        )
        .await;
        assert_eq!(stolen.status(), actix_web::http::StatusCode::NOT_FOUND);

        let deleted = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/v1/memos/{id}"))
                .cookie(mallory)
                .to_request(),
        )
        .await;
        assert_eq!(deleted.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn oversized_title_is_rejected() {
        let app = actix_test::init_service(account_test_app()).await;
        let cookie = signed_in_session(&app, "alice").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/memos")
                .cookie(cookie)
                .set_json(json!({ "title": "x".repeat(101), "content": "body" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("error body");
        assert_eq!(
            body.pointer("/details/field").and_then(Value::as_str),
            Some("title")
        );
    }
}
