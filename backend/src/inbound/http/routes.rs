//! Route table for the HTTP adapter.
//!
//! Every resource answers unsupported methods with
//! `405 {"detail": "Method not allowed."}` instead of actix's bare 404.

use actix_web::{Route, web};

use crate::domain::{EVENT_NOT_FOUND, Error};
use crate::inbound::http::error::method_not_allowed;
use crate::inbound::http::{auth, contact, content, events, health, i18n, volunteers};

fn resource(path: &str, route: Route) -> actix_web::Resource {
    web::resource(path)
        .route(route)
        .default_service(web::to(method_not_allowed))
}

// Event ids that do not parse as integers name no event.
fn event_path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_err, _req| Error::not_found(EVENT_NOT_FOUND).into())
}

/// Register the `/api` scope.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(resource("/mission/", web::get().to(content::mission)))
            .service(resource(
                "/cleaning-service/",
                web::get().to(content::cleaning_service),
            ))
            .service(resource("/events-page/", web::get().to(content::events_page)))
            .service(resource("/events/", web::get().to(events::list_events)))
            .service(
                resource("/events/{id}/", web::get().to(events::get_event))
                    .app_data(event_path_config()),
            )
            .service(
                resource(
                    "/events/{id}/register/",
                    web::post().to(events::register_for_event),
                )
                .app_data(event_path_config()),
            )
            .service(resource("/auth/register/", web::post().to(auth::sign_up)))
            .service(resource("/auth/login/", web::post().to(auth::login)))
            .service(resource("/auth/logout/", web::post().to(auth::logout)))
            .service(resource("/contact/", web::post().to(contact::submit_contact)))
            .service(resource(
                "/i18n/{lang}/",
                web::get().to(i18n::merged_bundle),
            ))
            .service(resource(
                "/i18n/{lang}/{namespace}.json",
                web::get().to(i18n::namespace_bundle),
            ))
            .service(resource(
                "/volunteer-groups/",
                web::get().to(volunteers::list_groups),
            ))
            .service(resource(
                "/volunteer-groups/mine/",
                web::get().to(volunteers::my_groups),
            )),
    );
}

/// Register the liveness and readiness probes.
pub fn configure_health(cfg: &mut web::ServiceConfig) {
    cfg.service(resource("/health/ready", web::get().to(health::ready)))
        .service(resource("/health/live", web::get().to(health::live)));
}
