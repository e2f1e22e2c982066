//! Shared helpers for the HTTP integration suites.
//!
//! Every scenario drives the real route table over the in-memory store, so
//! no database is needed.

use std::sync::Arc;

use actix_web::web;
use bijou_backend::domain::{Bilingual, Event, EventId};
use bijou_backend::inbound::http::state::{HttpState, HttpStatePorts, MediaUrls};
use bijou_backend::outbound::memory::MemoryStore;
use bijou_backend::outbound::notify::LogContactNotifier;
use bijou_backend::outbound::security::Argon2PasswordHasher;
use chrono::{DateTime, Duration, Utc};

/// HTTP state backed by `store`.
pub fn state_for(store: &MemoryStore) -> web::Data<HttpState> {
    let shared = Arc::new(store.clone());
    let ports = HttpStatePorts {
        events: shared.clone(),
        ledger: shared.clone(),
        users: shared.clone(),
        tokens: shared.clone(),
        hasher: Arc::new(Argon2PasswordHasher::new()),
        translations: shared.clone(),
        content: shared.clone(),
        contacts: shared.clone(),
        notifier: Arc::new(LogContactNotifier),
        volunteers: shared,
        clock: store.clock(),
    };
    web::Data::new(HttpState::new(ports, MediaUrls::default()))
}

/// Initialise the full `/api` route table over `store`.
#[macro_export]
macro_rules! api_app {
    ($store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($crate::support::state_for(&$store))
                .wrap(bijou_backend::Trace)
                .configure(bijou_backend::inbound::http::routes::configure_api),
        )
        .await
    };
}

/// An event starting `offset_days` from now.
pub fn event(id: i64, offset_days: i64, capacity: Option<u32>) -> Event {
    let now: DateTime<Utc> = Utc::now();
    Event {
        id: EventId::new(id),
        title: Bilingual::new(format!("Event {id}"), format!("イベント {id}")),
        description: Bilingual::new("Gathering", "集まり"),
        start_datetime: now + Duration::days(offset_days),
        location: "Community hall".to_owned(),
        capacity,
        images: Vec::new(),
        created_at: now,
        updated_at: now,
    }
}
