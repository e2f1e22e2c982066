//! End-to-end account and registration scenarios over the route table.

mod support;

use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::test::{self, TestRequest};
use bijou_backend::inbound::http::auth::TokenResponse;
use bijou_backend::inbound::http::error::Detail;
use bijou_backend::outbound::memory::MemoryStore;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn store() -> MemoryStore {
    let store = MemoryStore::new();
    store.insert_event(support::event(5, 7, Some(1)));
    store
}

fn bearer(token: &str) -> (actix_web::http::header::HeaderName, String) {
    (AUTHORIZATION, format!("Token {token}"))
}

#[rstest]
#[actix_web::test]
async fn sign_up_then_register_once(store: MemoryStore) {
    let app = api_app!(store);

    let signup = TestRequest::post()
        .uri("/api/auth/register/")
        .set_json(json!({"username": "amy", "email": "a@x.com", "password": "secret123"}))
        .to_request();
    let response = test::call_service(&app, signup).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let TokenResponse { token } = test::read_body_json(response).await;
    assert!(token.len() >= 40, "token too short: {token}");

    let register = || {
        TestRequest::post()
            .uri("/api/events/5/register/")
            .insert_header(bearer(&token))
            .to_request()
    };
    let first = test::call_service(&app, register()).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let detail: Detail = test::read_body_json(first).await;
    assert_eq!(detail.detail, "Registered successfully.");

    let second = test::call_service(&app, register()).await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let detail: Detail = test::read_body_json(second).await;
    assert_eq!(detail.detail, "Already registered.");
}

#[rstest]
#[actix_web::test]
async fn full_event_rejects_second_member(store: MemoryStore) {
    let app = api_app!(store);
    let mut tokens = Vec::new();
    for name in ["amy", "ben"] {
        let signup = TestRequest::post()
            .uri("/api/auth/register/")
            .set_json(json!({"username": name, "email": format!("{name}@x.com"), "password": "pw"}))
            .to_request();
        let TokenResponse { token } = test::call_and_read_body_json(&app, signup).await;
        tokens.push(token);
    }

    let statuses = {
        let mut out = Vec::new();
        for token in &tokens {
            let request = TestRequest::post()
                .uri("/api/events/5/register/")
                .insert_header(bearer(token))
                .to_request();
            let response = test::call_service(&app, request).await;
            let status = response.status();
            let detail: Detail = test::read_body_json(response).await;
            out.push((status, detail.detail));
        }
        out
    };
    assert_eq!(
        statuses,
        vec![
            (StatusCode::CREATED, "Registered successfully.".to_owned()),
            (StatusCode::BAD_REQUEST, "Event is full.".to_owned()),
        ]
    );
}

#[rstest]
#[case(None, "Authentication credentials were not provided.")]
#[case(Some("Bearer abc"), "Authentication credentials were not provided.")]
#[case(Some("Token unknown"), "Invalid token.")]
#[actix_web::test]
async fn registration_requires_a_valid_token(
    store: MemoryStore,
    #[case] header: Option<&str>,
    #[case] message: &str,
) {
    let app = api_app!(store);
    let mut request = TestRequest::post().uri("/api/events/5/register/");
    if let Some(value) = header {
        request = request.insert_header((AUTHORIZATION, value));
    }
    let response = test::call_service(&app, request.to_request()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let detail: Detail = test::read_body_json(response).await;
    assert_eq!(detail.detail, message);
}

#[rstest]
#[actix_web::test]
async fn registering_for_unknown_event_is_404(store: MemoryStore) {
    let app = api_app!(store);
    let signup = TestRequest::post()
        .uri("/api/auth/register/")
        .set_json(json!({"username": "amy", "email": "a@x.com", "password": "pw"}))
        .to_request();
    let TokenResponse { token } = test::call_and_read_body_json(&app, signup).await;

    let request = TestRequest::post()
        .uri("/api/events/404/register/")
        .insert_header(bearer(&token))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let detail: Detail = test::read_body_json(response).await;
    assert_eq!(detail.detail, "Event not found.");
}

#[rstest]
#[actix_web::test]
async fn login_replaces_the_previous_token(store: MemoryStore) {
    let app = api_app!(store);
    let signup = TestRequest::post()
        .uri("/api/auth/register/")
        .set_json(json!({"username": "amy", "email": "a@x.com", "password": "secret123"}))
        .to_request();
    let TokenResponse { token: first } = test::call_and_read_body_json(&app, signup).await;

    let login = TestRequest::post()
        .uri("/api/auth/login/")
        .set_json(json!({"username": "amy", "password": "secret123"}))
        .to_request();
    let TokenResponse { token: second } = test::call_and_read_body_json(&app, login).await;
    assert_ne!(first, second);

    let stale = TestRequest::get()
        .uri("/api/volunteer-groups/mine/")
        .insert_header(bearer(&first))
        .to_request();
    assert_eq!(
        test::call_service(&app, stale).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let fresh = TestRequest::get()
        .uri("/api/volunteer-groups/mine/")
        .insert_header(bearer(&second))
        .to_request();
    assert_eq!(test::call_service(&app, fresh).await.status(), StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn logout_revokes_and_stays_idempotent(store: MemoryStore) {
    let app = api_app!(store);
    let signup = TestRequest::post()
        .uri("/api/auth/register/")
        .set_json(json!({"username": "amy", "email": "a@x.com", "password": "pw"}))
        .to_request();
    let TokenResponse { token } = test::call_and_read_body_json(&app, signup).await;

    for _ in 0..2 {
        let logout = TestRequest::post()
            .uri("/api/auth/logout/")
            .insert_header(bearer(&token))
            .to_request();
        let response = test::call_service(&app, logout).await;
        assert_eq!(response.status(), StatusCode::OK);
        let detail: Detail = test::read_body_json(response).await;
        assert_eq!(detail.detail, "Logged out.");
    }

    let after = TestRequest::post()
        .uri("/api/events/5/register/")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(
        test::call_service(&app, after).await.status(),
        StatusCode::UNAUTHORIZED
    );
}
