//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] gathers every handler in the inbound layer together with the
//! request and response shapes they exchange. Schemas referenced from a
//! path are collected automatically; the `components` list only names the
//! ones clients most often look up directly.
//!
//! The generated document backs Swagger UI (debug builds) and is exported
//! via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::auth::{LoginBody, SignupBody, TokenResponse};
use crate::inbound::http::contact::ContactBody;
use crate::inbound::http::error::Detail;
use crate::inbound::http::views::{
    CleaningView, EventPageSchema, EventView, EventsPageView, MembershipView, MissionView,
    VolunteerGroupView,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Name of the token security scheme referenced by protected paths.
pub const TOKEN_AUTH_SCHEME: &str = "TokenAuth";

/// Enrich the generated document with the token header security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            TOKEN_AUTH_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "Authorization",
                "`Token <key>` as issued by POST /api/auth/login/ or /api/auth/register/.",
            ))),
        );
    }
}

/// OpenAPI document for the JSON API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "House of Bijou backend API",
        description = "Bilingual page content, events with capacity-limited registration, \
                       token authentication, translations and volunteer groups."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::content::mission,
        crate::inbound::http::content::cleaning_service,
        crate::inbound::http::content::events_page,
        crate::inbound::http::events::list_events,
        crate::inbound::http::events::get_event,
        crate::inbound::http::events::register_for_event,
        crate::inbound::http::auth::sign_up,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::contact::submit_contact,
        crate::inbound::http::i18n::merged_bundle,
        crate::inbound::http::i18n::namespace_bundle,
        crate::inbound::http::volunteers::list_groups,
        crate::inbound::http::volunteers::my_groups,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Detail,
        SignupBody,
        LoginBody,
        TokenResponse,
        ContactBody,
        MissionView,
        CleaningView,
        EventsPageView,
        EventView,
        EventPageSchema,
        VolunteerGroupView,
        MembershipView
    )),
    tags(
        (name = "content", description = "Editor-managed page content"),
        (name = "events", description = "Event calendar and registration"),
        (name = "auth", description = "Accounts and bearer tokens"),
        (name = "contact", description = "Contact form"),
        (name = "i18n", description = "UI translation bundles"),
        (name = "volunteers", description = "Volunteer groups"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
