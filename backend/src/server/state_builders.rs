//! Builders for the HTTP state from configured adapters.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::warn;

use bijou_backend::inbound::http::state::{HttpState, HttpStatePorts};
use bijou_backend::outbound::memory::MemoryStore;
use bijou_backend::outbound::notify::LogContactNotifier;
use bijou_backend::outbound::persistence::{
    DbPool, DieselAuthTokenRepository, DieselContactRepository, DieselContentRepository,
    DieselEventRepository, DieselRegistrationLedger, DieselTranslationRepository,
    DieselUserRepository, DieselVolunteerRepository,
};
use bijou_backend::outbound::security::Argon2PasswordHasher;

use super::ServerConfig;

fn diesel_ports(pool: &DbPool) -> HttpStatePorts {
    HttpStatePorts {
        events: Arc::new(DieselEventRepository::new(pool.clone())),
        ledger: Arc::new(DieselRegistrationLedger::new(pool.clone())),
        users: Arc::new(DieselUserRepository::new(pool.clone())),
        tokens: Arc::new(DieselAuthTokenRepository::new(pool.clone())),
        hasher: Arc::new(Argon2PasswordHasher::new()),
        translations: Arc::new(DieselTranslationRepository::new(pool.clone())),
        content: Arc::new(DieselContentRepository::new(pool.clone())),
        contacts: Arc::new(DieselContactRepository::new(pool.clone())),
        notifier: Arc::new(LogContactNotifier),
        volunteers: Arc::new(DieselVolunteerRepository::new(pool.clone())),
        clock: Arc::new(DefaultClock),
    }
}

fn memory_ports(store: &MemoryStore) -> HttpStatePorts {
    let shared = Arc::new(store.clone());
    HttpStatePorts {
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
    }
}

/// Build the shared HTTP state.
///
/// Uses the Diesel adapters when a pool is configured, otherwise a fresh
/// in-memory store whose contents are lost on restart.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let ports = match &config.db_pool {
        Some(pool) => diesel_ports(pool),
        None => {
            warn!("no database configured; serving from the in-memory store");
            memory_ports(&MemoryStore::new())
        }
    };
    web::Data::new(HttpState::new(ports, config.media.clone()))
}
