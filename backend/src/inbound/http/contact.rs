//! Contact form endpoint.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{Error, NewContactMessage};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::Detail;
use crate::inbound::http::extract::LenientJson;
use crate::inbound::http::state::HttpState;

/// Acknowledgement for an accepted message.
pub const MESSAGE_RECEIVED: &str = "Message received. Thank you!";

/// Contact form body.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactBody {
    #[schema(example = "Amy")]
    pub name: String,
    #[schema(example = "a@x.com")]
    pub email: String,
    #[schema(example = "Hello!")]
    pub message: String,
}

/// Store a contact message and notify editors.
#[utoipa::path(
    post,
    path = "/api/contact/",
    request_body = ContactBody,
    responses(
        (status = 201, description = "Message stored", body = Detail),
        (status = 400, description = "Missing fields", body = Detail),
        (status = 405, description = "Method not allowed", body = Detail)
    ),
    tags = ["contact"],
    operation_id = "submitContact",
    security([])
)]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    payload: LenientJson<ContactBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let message = NewContactMessage::try_from_parts(&body.name, &body.email, &body.message)
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    state.contact.submit(&message).await?;
    Ok(HttpResponse::Created().json(Detail::new(MESSAGE_RECEIVED)))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::inbound::http::test_utils::memory_state;

    #[rstest]
    #[actix_web::test]
    async fn stores_trimmed_message() {
        let (state, store) = memory_state();
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .route("/contact/", web::post().to(submit_contact)),
        )
        .await;
        let request = actix_test::TestRequest::post()
            .uri("/contact/")
            .set_json(json!({"name": " Amy ", "email": "a@x.com", "message": "Hi!"}))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let detail: Detail = actix_test::read_body_json(response).await;
        assert_eq!(detail.detail, MESSAGE_RECEIVED);

        let stored = store.contact_messages();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored.first().map(|m| m.name.as_str()), Some("Amy"));
    }

    #[rstest]
    #[case(json!({"name": "Amy", "email": "a@x.com"}))]
    #[case(json!({"name": "  ", "email": "a@x.com", "message": "Hi"}))]
    #[case(json!([1, 2, 3]))]
    #[actix_web::test]
    async fn rejects_incomplete_message(#[case] body: serde_json::Value) {
        let (state, store) = memory_state();
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .route("/contact/", web::post().to(submit_contact)),
        )
        .await;
        let request = actix_test::TestRequest::post()
            .uri("/contact/")
            .set_json(body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let detail: Detail = actix_test::read_body_json(response).await;
        assert_eq!(detail.detail, "Name, email and message are required.");
        assert!(store.contact_messages().is_empty());
    }
}
