//! Translation bundle endpoints.
//!
//! ```text
//! GET /api/i18n/en/?ns=common,home
//! GET /api/i18n/ja/home.json
//! ```
//!
//! Bundles carry a weak `ETag`; a matching `If-None-Match` short-circuits
//! to `304 Not Modified` with an empty body.

use std::collections::BTreeMap;

use actix_web::http::header::{self, HeaderValue};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::domain::{TranslationBundle, parse_namespaces};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::PUBLIC_FIVE_MINUTES;
use crate::inbound::http::error::Detail;
use crate::inbound::http::state::HttpState;

/// Query accepted by the merged bundle endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NamespacesQuery {
    /// Comma-separated namespaces, later ones winning. Defaults to `common`.
    pub ns: Option<String>,
}

fn if_none_match(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
}

fn bundle_response(
    req: &HttpRequest,
    bundle: TranslationBundle,
    validator: Option<String>,
) -> HttpResponse {
    let etag = validator.and_then(|tag| HeaderValue::from_str(&tag).ok());
    let unchanged = etag
        .as_ref()
        .is_some_and(|tag| if_none_match(req) == tag.to_str().ok());
    if let (true, Some(tag)) = (unchanged, etag.as_ref()) {
        debug!(etag = ?tag, "translation bundle not modified");
        return HttpResponse::NotModified()
            .insert_header((header::ETAG, tag.clone()))
            .insert_header((header::CACHE_CONTROL, PUBLIC_FIVE_MINUTES))
            .finish();
    }

    let mut response = HttpResponse::Ok();
    response.insert_header((header::CACHE_CONTROL, PUBLIC_FIVE_MINUTES));
    if let Some(tag) = etag {
        response.insert_header((header::ETAG, tag));
    }
    response.json(bundle.into_entries())
}

/// Merged translations for several namespaces plus the site text labels.
#[utoipa::path(
    get,
    path = "/api/i18n/{lang}/",
    params(("lang" = String, Path, description = "Language code"), NamespacesQuery),
    responses(
        (status = 200, description = "Flat key to text mapping", body = BTreeMap<String, String>,
            headers(("ETag" = String, description = "Weak validator"))),
        (status = 304, description = "Bundle unchanged"),
        (status = 405, description = "Method not allowed", body = Detail)
    ),
    tags = ["i18n"],
    operation_id = "getMergedTranslations"
)]
pub async fn merged_bundle(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<NamespacesQuery>,
) -> ApiResult<HttpResponse> {
    let lang = path.into_inner();
    let namespaces = parse_namespaces(query.ns.as_deref());
    let bundle = state.translations.merged(&lang, &namespaces).await?;
    let validator = bundle.merged_validator(&lang);
    Ok(bundle_response(&req, bundle, validator))
}

/// Translations of a single namespace without the site text labels.
#[utoipa::path(
    get,
    path = "/api/i18n/{lang}/{namespace}.json",
    params(
        ("lang" = String, Path, description = "Language code"),
        ("namespace" = String, Path, description = "Namespace name")
    ),
    responses(
        (status = 200, description = "Flat key to text mapping", body = BTreeMap<String, String>,
            headers(("ETag" = String, description = "Weak validator"))),
        (status = 304, description = "Bundle unchanged"),
        (status = 405, description = "Method not allowed", body = Detail)
    ),
    tags = ["i18n"],
    operation_id = "getNamespaceTranslations"
)]
pub async fn namespace_bundle(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (lang, namespace) = path.into_inner();
    let bundle = state.translations.namespace(&lang, &namespace).await?;
    let validator = bundle.namespace_validator(&lang, &namespace);
    Ok(bundle_response(&req, bundle, validator))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    use super::*;
    use crate::domain::TranslationEntry;
    use crate::outbound::memory::MemoryStore;

    fn seed(store: &MemoryStore, namespace: &str, key: &str, text: &str, secs: i64) {
        store.upsert_translation(TranslationEntry {
            namespace: namespace.to_owned(),
            key: key.to_owned(),
            language: "en".to_owned(),
            text: text.to_owned(),
            updated_at: Utc.timestamp_opt(secs, 0).single().expect("timestamp"),
        });
    }

    macro_rules! i18n_app {
        ($state:expr) => {
            actix_test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .route("/i18n/{lang}/", web::get().to(merged_bundle))
                    .route("/i18n/{lang}/{namespace}.json", web::get().to(namespace_bundle)),
            )
            .await
        };
    }

    #[rstest]
    #[actix_web::test]
    async fn merged_bundle_carries_validator_and_cache_policy() {
        let (state, store) = crate::inbound::http::test_utils::memory_state();
        seed(&store, "common", "title", "Common", 100);
        seed(&store, "home", "title", "Home", 200);
        let app = i18n_app!(state);

        let request = actix_test::TestRequest::get()
            .uri("/i18n/en/?ns=common,home")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ETAG).and_then(|v| v.to_str().ok()),
            Some("W/\"i18n-en-200\"")
        );
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some(PUBLIC_FIVE_MINUTES)
        );
        let body: BTreeMap<String, String> = actix_test::read_body_json(response).await;
        assert_eq!(body.get("title").map(String::as_str), Some("Home"));
    }

    #[rstest]
    #[case("W/\"i18n-en-home-200\"", StatusCode::NOT_MODIFIED)]
    #[case("W/\"i18n-en-home-100\"", StatusCode::OK)]
    #[actix_web::test]
    async fn namespace_bundle_honours_if_none_match(
        #[case] presented: &str,
        #[case] expected: StatusCode,
    ) {
        let (state, store) = crate::inbound::http::test_utils::memory_state();
        seed(&store, "home", "title", "Home", 200);
        let app = i18n_app!(state);

        let request = actix_test::TestRequest::get()
            .uri("/i18n/en/home.json")
            .insert_header((header::IF_NONE_MATCH, presented))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), expected);
        let body = actix_test::read_body(response).await;
        assert_eq!(body.is_empty(), expected == StatusCode::NOT_MODIFIED);
    }

    #[rstest]
    #[actix_web::test]
    async fn empty_namespace_has_no_validator() {
        let (state, _store) = crate::inbound::http::test_utils::memory_state();
        let app = i18n_app!(state);

        let request = actix_test::TestRequest::get()
            .uri("/i18n/en/missing.json")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::ETAG).is_none());
        let body: BTreeMap<String, String> = actix_test::read_body_json(response).await;
        assert!(body.is_empty());
    }
}
