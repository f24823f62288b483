//! OpenAPI documentation configuration.
//!
//! Registers every REST endpoint and the schemas they exchange, plus the
//! session cookie security scheme. Swagger UI serves the generated document
//! in debug builds only.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode, Memo, MemoId, UserId};
use crate::inbound::http::memos::{CreateMemoBody, UpdateMemoBody};
use crate::inbound::http::users::{AckBody, LoginBody, SignupBody};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the memo service REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Memo service API",
        description = "Session-authenticated personal memo storage."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::signup,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::about,
        crate::inbound::http::memos::list_memos,
        crate::inbound::http::memos::create_memo,
        crate::inbound::http::memos::update_memo,
        crate::inbound::http::memos::delete_memo,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Memo,
        MemoId,
        UserId,
        SignupBody,
        LoginBody,
        AckBody,
        CreateMemoBody,
        UpdateMemoBody
    )),
    tags(
        (name = "accounts", description = "Signup, login, and logout"),
        (name = "memos", description = "Per-user memo CRUD"),
        (name = "health", description = "Orchestration probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn document_registers_all_routes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for expected in [
            "/api/v1/signup",
            "/api/v1/login",
            "/api/v1/logout",
            "/api/v1/about",
            "/api/v1/memos",
            "/api/v1/memos/{memo_id}",
            "/health/ready",
            "/health/live",
        ] {
            assert!(paths.contains_key(expected), "missing path {expected}");
        }
    }

    #[test]
    fn memo_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key("Memo"));
        assert!(schemas.contains_key("Error"));
    }
}
