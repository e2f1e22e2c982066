//! Event catalogue and registration endpoints.
//!
//! ```text
//! GET  /api/events/?lang=en&past=true&page=2&page_size=9
//! GET  /api/events/5/
//! POST /api/events/5/register/   Authorization: Token <key>
//! ```

use actix_web::{HttpResponse, web};
use pagination::{Page, PageRequest};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{EventId, Language};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::Detail;
use crate::inbound::http::extract::Authenticated;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{EventPageSchema, EventView, LangQuery};

/// Acknowledgement for a successful registration.
pub const REGISTERED: &str = "Registered successfully.";

/// Query accepted by the event listing.
///
/// Every field is kept as raw text so malformed values degrade to defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventsQuery {
    /// `en` or `ja`; anything else yields the bilingual shape.
    pub lang: Option<String>,
    /// `true` (any case) includes events that already started.
    pub past: Option<String>,
    /// 1-based page number, default 1.
    pub page: Option<String>,
    /// Items per page, default 9, at most 100.
    pub page_size: Option<String>,
}

impl EventsQuery {
    fn language(&self) -> Option<Language> {
        Language::from_query(self.lang.as_deref())
    }

    fn include_past(&self) -> bool {
        self.past
            .as_deref()
            .is_some_and(|raw| raw.eq_ignore_ascii_case("true"))
    }

    fn page_request(&self) -> PageRequest {
        PageRequest::from_query(self.page.as_deref(), self.page_size.as_deref())
    }
}

/// List events, newest start first.
#[utoipa::path(
    get,
    path = "/api/events/",
    params(EventsQuery),
    responses(
        (status = 200, description = "Page of events", body = EventPageSchema),
        (status = 405, description = "Method not allowed", body = Detail),
        (status = 503, description = "Store unavailable", body = Detail)
    ),
    tags = ["events"],
    operation_id = "listEvents"
)]
pub async fn list_events(
    state: web::Data<HttpState>,
    query: web::Query<EventsQuery>,
) -> ApiResult<web::Json<Page<EventView>>> {
    let page = state
        .events
        .list(query.include_past(), query.page_request())
        .await?;
    Ok(web::Json(EventView::page(
        page,
        query.language(),
        &state.media,
    )))
}

/// Fetch one event.
#[utoipa::path(
    get,
    path = "/api/events/{id}/",
    params(("id" = i64, Path, description = "Event identifier"), LangQuery),
    responses(
        (status = 200, description = "Event", body = EventView),
        (status = 404, description = "Unknown event", body = Detail),
        (status = 405, description = "Method not allowed", body = Detail)
    ),
    tags = ["events"],
    operation_id = "getEvent"
)]
pub async fn get_event(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    query: web::Query<LangQuery>,
) -> ApiResult<web::Json<EventView>> {
    let listing = state.events.get(EventId::new(path.into_inner())).await?;
    Ok(web::Json(EventView::new(
        listing,
        query.language(),
        &state.media,
    )))
}

/// Register the caller for an event.
#[utoipa::path(
    post,
    path = "/api/events/{id}/register/",
    params(("id" = i64, Path, description = "Event identifier")),
    responses(
        (status = 201, description = "Registered", body = Detail),
        (status = 400, description = "Event full or already registered", body = Detail),
        (status = 401, description = "Missing or invalid token", body = Detail),
        (status = 404, description = "Unknown event", body = Detail),
        (status = 405, description = "Method not allowed", body = Detail)
    ),
    tags = ["events"],
    operation_id = "registerForEvent",
    security(("TokenAuth" = []))
)]
pub async fn register_for_event(
    state: web::Data<HttpState>,
    auth: Authenticated,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .registrations
        .register(auth.user, EventId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(Detail::new(REGISTERED)))
}
