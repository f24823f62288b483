//! Account API handlers: signup, login, logout.
//!
//! ```text
//! POST /api/v1/signup {"username":"alice","email":"a@x.com","password":"pw1"}
//! POST /api/v1/login  {"username":"alice","password":"pw1"}
//! POST /api/v1/logout
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{AuthValidationError, Error, LoginCredentials, SignupRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Signup request body for `POST /api/v1/signup`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupBody {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl TryFrom<SignupBody> for SignupRequest {
    type Error = AuthValidationError;

    fn try_from(value: SignupBody) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.email, &value.password)
    }
}

/// Login request body for `POST /api/v1/login`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

impl TryFrom<LoginBody> for LoginCredentials {
    type Error = AuthValidationError;

    fn try_from(value: LoginBody) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

/// Acknowledgment payload returned by account endpoints.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AckBody {
    pub message: String,
}

fn ack(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": message }))
}

fn map_auth_validation_error(err: AuthValidationError) -> Error {
    let field = match &err {
        AuthValidationError::InvalidUsername(_) => "username",
        AuthValidationError::InvalidEmail(_) => "email",
        AuthValidationError::EmptyPassword => "password",
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field }))
}

/// Register a new account.
///
/// No sensitive data is echoed back; the response is an acknowledgment
/// message only.
#[utoipa::path(
    post,
    path = "/api/v1/signup",
    request_body = SignupBody,
    responses(
        (status = 200, description = "Signup success", body = AckBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Username already taken", body = Error),
        (status = 500, description = "Signup failed", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "signup",
    security([])
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupBody>,
) -> ApiResult<HttpResponse> {
    let request =
        SignupRequest::try_from(payload.into_inner()).map_err(map_auth_validation_error)?;
    state.accounts.signup(request).await?;
    Ok(ack("signup successful"))
}

/// Authenticate and establish a session.
///
/// An unknown username and a wrong password produce identical 401 responses.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginBody,
    responses(
        (status = 200, description = "Login success", body = AckBody,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginBody>,
) -> ApiResult<HttpResponse> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_auth_validation_error)?;
    let username = state.accounts.login(&credentials).await?;
    session.persist_user(&username)?;
    Ok(ack("login successful"))
}

/// Clear the session. Idempotent: succeeds whether or not anyone was
/// logged in.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 200, description = "Logout success", body = AckBody)
    ),
    tags = ["accounts"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    ack("logout successful")
}

/// Static service description.
#[utoipa::path(
    get,
    path = "/api/v1/about",
    responses(
        (status = 200, description = "About message", body = AckBody)
    ),
    tags = ["accounts"],
    operation_id = "about",
    security([])
)]
#[get("/about")]
pub async fn about() -> HttpResponse {
    ack("memoserv: a personal memo-taking service")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{account_test_app, signup_body};
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case(json!({ "username": "  ", "email": "a@x.com", "password": "pw" }), "username")]
    #[case(json!({ "username": "alice", "email": "nope", "password": "pw" }), "email")]
    #[case(json!({ "username": "alice", "email": "a@x.com", "password": "" }), "password")]
    #[actix_web::test]
    async fn signup_rejects_invalid_payloads_with_field_details(
        #[case] payload: Value,
        #[case] field: &str,
    ) {
        let app = actix_test::init_service(account_test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/signup")
            .set_json(&payload)
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("error payload");
        assert_eq!(
            value.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
        let details = value
            .get("details")
            .and_then(Value::as_object)
            .expect("details present");
        assert_eq!(details.get("field").and_then(Value::as_str), Some(field));
    }

    #[actix_web::test]
    async fn duplicate_signup_is_a_conflict() {
        let app = actix_test::init_service(account_test_app()).await;

        let first = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/signup")
                .set_json(signup_body("alice", "a@x.com", "pw1"))
                .to_request(),
        )
        .await;
        assert!(first.status().is_success());

        let second = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/signup")
                .set_json(signup_body("alice", "other@x.com", "pw2"))
                .to_request(),
        )
        .await;
        assert_eq!(second.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[rstest]
    #[case::unknown_user("bob", "pw1")]
    #[case::wrong_password("alice", "wrong")]
    #[actix_web::test]
    async fn login_failures_share_one_response_shape(
        #[case] username: &str,
        #[case] password: &str,
    ) {
        let app = actix_test::init_service(account_test_app()).await;
        let signup_response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/signup")
                .set_json(signup_body("alice", "a@x.com", "pw1"))
                .to_request(),
        )
        .await;
        assert!(signup_response.status().is_success());

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/login")
                .set_json(json!({ "username": username, "password": password }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
        // No session cookie on a failed login.
        assert!(
            !response
                .response()
                .cookies()
                .any(|cookie| cookie.name() == "session")
        );
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("error payload");
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("invalid credentials")
        );
        assert_eq!(
            value.get("code").and_then(Value::as_str),
            Some("unauthorized")
        );
    }

    #[actix_web::test]
    async fn login_sets_session_cookie() {
        let app = actix_test::init_service(account_test_app()).await;
        let signup_response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/signup")
                .set_json(signup_body("alice", "a@x.com", "pw1"))
                .to_request(),
        )
        .await;
        assert!(signup_response.status().is_success());

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/login")
                .set_json(json!({ "username": "alice", "password": "pw1" }))
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        assert!(
            response
                .response()
                .cookies()
                .any(|cookie| cookie.name() == "session")
        );
    }

    #[actix_web::test]
    async fn logout_without_session_still_succeeds() {
        let app = actix_test::init_service(account_test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/logout")
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
    }
}
