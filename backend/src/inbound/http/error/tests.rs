//! Tests for HTTP error mapping.

use super::*;
use crate::domain::Error;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::rstest;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

async fn body_of(error: &Error) -> Detail {
    let response = ResponseError::error_response(error);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("detail JSON deserialisation succeeds")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::conflict("Already registered."), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("no auth"), StatusCode::UNAUTHORIZED)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::method_not_allowed("no"), StatusCode::METHOD_NOT_ALLOWED)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn client_errors_expose_their_message() {
    let detail = body_of(&Error::conflict("Event is full.")).await;
    assert_eq!(detail, Detail::new("Event is full."));
}

#[rstest]
#[case(Error::internal("db exploded: secret"), INTERNAL_ERROR_DETAIL)]
#[case(Error::service_unavailable("pool timeout at 10.0.0.3"), UNAVAILABLE_DETAIL)]
#[actix_web::test]
async fn server_errors_are_redacted(#[case] error: Error, #[case] expected: &str) {
    let detail = body_of(&error).await;
    assert_eq!(detail.detail, expected);
}

#[rstest]
#[actix_web::test]
async fn trace_id_is_echoed_in_header() {
    let error = Error::not_found("Event not found.").with_trace_id(TRACE_ID);
    let response = ResponseError::error_response(&error);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace-id header is set by error_response")
        .to_str()
        .expect("trace-id is valid UTF-8");
    assert_eq!(header, TRACE_ID);
}

#[rstest]
#[actix_web::test]
async fn errors_without_trace_id_omit_header() {
    let error = Error::not_found("Event not found.");
    let response = ResponseError::error_response(&error);
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
}
