//! Page content endpoints.
//!
//! ```text
//! GET /api/mission/?lang=ja
//! GET /api/cleaning-service/
//! GET /api/events-page/?lang=en
//! ```
//!
//! Each page falls back to built-in copy until an editor stores one, so
//! these endpoints never answer 404.

use actix_web::web;

use crate::inbound::http::ApiResult;
use crate::inbound::http::error::Detail;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{CleaningView, EventsPageView, LangQuery, MissionView};

/// Mission statement.
#[utoipa::path(
    get,
    path = "/api/mission/",
    params(LangQuery),
    responses(
        (status = 200, description = "Mission page", body = MissionView),
        (status = 405, description = "Method not allowed", body = Detail),
        (status = 503, description = "Store unavailable", body = Detail)
    ),
    tags = ["content"],
    operation_id = "getMission"
)]
pub async fn mission(
    state: web::Data<HttpState>,
    query: web::Query<LangQuery>,
) -> ApiResult<web::Json<MissionView>> {
    let page = state.content.mission().await?;
    Ok(web::Json(MissionView::new(
        page,
        query.language(),
        &state.media,
    )))
}

/// Cleaning service page with features and up to three gallery images.
#[utoipa::path(
    get,
    path = "/api/cleaning-service/",
    params(LangQuery),
    responses(
        (status = 200, description = "Cleaning service page", body = CleaningView),
        (status = 405, description = "Method not allowed", body = Detail),
        (status = 503, description = "Store unavailable", body = Detail)
    ),
    tags = ["content"],
    operation_id = "getCleaningService"
)]
pub async fn cleaning_service(
    state: web::Data<HttpState>,
    query: web::Query<LangQuery>,
) -> ApiResult<web::Json<CleaningView>> {
    let page = state.content.cleaning_service().await?;
    Ok(web::Json(CleaningView::new(
        page,
        query.language(),
        &state.media,
    )))
}

/// Events listing hero and placeholder cards.
#[utoipa::path(
    get,
    path = "/api/events-page/",
    params(LangQuery),
    responses(
        (status = 200, description = "Events page settings", body = EventsPageView),
        (status = 405, description = "Method not allowed", body = Detail),
        (status = 503, description = "Store unavailable", body = Detail)
    ),
    tags = ["content"],
    operation_id = "getEventsPage"
)]
pub async fn events_page(
    state: web::Data<HttpState>,
    query: web::Query<LangQuery>,
) -> ApiResult<web::Json<EventsPageView>> {
    let page = state.content.events_page().await?;
    Ok(web::Json(EventsPageView::new(
        page,
        query.language(),
        &state.media,
    )))
}
