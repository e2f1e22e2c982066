//! Account and token endpoints.
//!
//! ```text
//! POST /api/auth/register/ {"username":"amy","email":"a@x.com","password":"secret123"}
//! POST /api/auth/login/    {"username":"amy","password":"secret123"}
//! POST /api/auth/logout/   Authorization: Token <key>
//! ```
//!
//! Bodies are read leniently: malformed JSON counts as an empty object and
//! is reported through the missing-field message.

use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Error, LoginCredentials, SignupRequest, parse_token_header};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::Detail;
use crate::inbound::http::extract::{LenientJson, authorization_header};
use crate::inbound::http::state::HttpState;

/// Acknowledgement for a logout.
pub const LOGGED_OUT: &str = "Logged out.";

/// Sign-up body for `POST /api/auth/register/`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SignupBody {
    #[schema(example = "amy")]
    pub username: String,
    #[schema(example = "a@x.com")]
    pub email: String,
    #[schema(example = "secret123")]
    pub password: String,
}

/// Login body for `POST /api/auth/login/`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginBody {
    #[schema(example = "amy")]
    pub username: String,
    #[schema(example = "secret123")]
    pub password: String,
}

/// Issued bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Send back as `Authorization: Token <token>`.
    pub token: String,
}

/// Create an account and return its first token.
#[utoipa::path(
    post,
    path = "/api/auth/register/",
    request_body = SignupBody,
    responses(
        (status = 201, description = "Account created", body = TokenResponse),
        (status = 400, description = "Missing fields or duplicate username/email", body = Detail),
        (status = 405, description = "Method not allowed", body = Detail)
    ),
    tags = ["auth"],
    operation_id = "signUp",
    security([])
)]
pub async fn sign_up(
    state: web::Data<HttpState>,
    payload: LenientJson<SignupBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let request = SignupRequest::try_from_parts(&body.username, &body.email, &body.password)
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    let token = state.auth.sign_up(&request).await?;
    Ok(HttpResponse::Created().json(TokenResponse {
        token: token.as_str().to_owned(),
    }))
}

/// Exchange credentials for a token, replacing any earlier one.
#[utoipa::path(
    post,
    path = "/api/auth/login/",
    request_body = LoginBody,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Missing fields", body = Detail),
        (status = 401, description = "Invalid credentials", body = Detail),
        (status = 405, description = "Method not allowed", body = Detail)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
pub async fn login(
    state: web::Data<HttpState>,
    payload: LenientJson<LoginBody>,
) -> ApiResult<web::Json<TokenResponse>> {
    let body = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(&body.username, &body.password)
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    let token = state.auth.login(&credentials).await?;
    Ok(web::Json(TokenResponse {
        token: token.as_str().to_owned(),
    }))
}

/// Revoke the presented token.
///
/// The header must carry a token, but an unknown or already revoked token
/// still logs out successfully.
#[utoipa::path(
    post,
    path = "/api/auth/logout/",
    responses(
        (status = 200, description = "Logged out", body = Detail),
        (status = 401, description = "No token presented", body = Detail),
        (status = 405, description = "Method not allowed", body = Detail)
    ),
    tags = ["auth"],
    operation_id = "logout",
    security(("TokenAuth" = []))
)]
pub async fn logout(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<Detail>> {
    let header = authorization_header(&req);
    let token = parse_token_header(header.as_deref())
        .map_err(|err| Error::unauthorized(err.to_string()))?;
    state.auth.revoke(&token).await?;
    debug!("token revoked");
    Ok(web::Json(Detail::new(LOGGED_OUT)))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::http::header::AUTHORIZATION;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::inbound::http::test_utils::memory_state;

    macro_rules! auth_app {
        ($state:expr) => {
            actix_test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .route("/register/", web::post().to(sign_up))
                    .route("/login/", web::post().to(login))
                    .route("/logout/", web::post().to(logout)),
            )
            .await
        };
    }

    #[rstest]
    #[case(json!({"username": "amy", "email": "", "password": "pw"}))]
    #[case(json!({"username": "amy"}))]
    #[case(json!("not an object"))]
    #[actix_web::test]
    async fn sign_up_reports_missing_fields(#[case] body: Value) {
        let (state, _store) = memory_state();
        let app = auth_app!(state);
        let request = actix_test::TestRequest::post()
            .uri("/register/")
            .set_json(body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let detail: Detail = actix_test::read_body_json(response).await;
        assert_eq!(detail.detail, "Username, email and password are required.");
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_login_body_is_treated_as_empty() {
        let (state, _store) = memory_state();
        let app = auth_app!(state);
        let request = actix_test::TestRequest::post()
            .uri("/login/")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"username\": \"amy\",")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let detail: Detail = actix_test::read_body_json(response).await;
        assert_eq!(detail.detail, "Username and password are required.");
    }

    #[rstest]
    #[actix_web::test]
    async fn duplicate_username_is_rejected() {
        let (state, _store) = memory_state();
        let app = auth_app!(state);
        for (email, status) in [
            ("a@x.com", StatusCode::CREATED),
            ("b@x.com", StatusCode::BAD_REQUEST),
        ] {
            let request = actix_test::TestRequest::post()
                .uri("/register/")
                .set_json(json!({"username": "amy", "email": email, "password": "secret123"}))
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), status);
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn login_with_wrong_password_is_unauthorized() {
        let (state, _store) = memory_state();
        let app = auth_app!(state);
        let signup = actix_test::TestRequest::post()
            .uri("/register/")
            .set_json(json!({"username": "amy", "email": "a@x.com", "password": "secret123"}))
            .to_request();
        actix_test::call_service(&app, signup).await;

        let request = actix_test::TestRequest::post()
            .uri("/login/")
            .set_json(json!({"username": "amy", "password": "wrong"}))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let detail: Detail = actix_test::read_body_json(response).await;
        assert_eq!(detail.detail, "Invalid credentials.");
    }

    #[rstest]
    #[case(Some("Token already-gone"), StatusCode::OK)]
    #[case(None, StatusCode::UNAUTHORIZED)]
    #[actix_web::test]
    async fn logout_is_idempotent_for_presented_tokens(
        #[case] header: Option<&str>,
        #[case] expected: StatusCode,
    ) {
        let (state, _store) = memory_state();
        let app = auth_app!(state);
        let mut request = actix_test::TestRequest::post().uri("/logout/");
        if let Some(value) = header {
            request = request.insert_header((AUTHORIZATION, value));
        }
        let response = actix_test::call_service(&app, request.to_request()).await;
        assert_eq!(response.status(), expected);
    }
}
