//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::inbound::http::state::{HttpState, HttpStatePorts, MediaUrls};
use crate::outbound::memory::MemoryStore;
use crate::outbound::notify::LogContactNotifier;
use crate::outbound::security::Argon2PasswordHasher;

/// Port bundle backed entirely by `store`.
pub fn memory_ports(store: &MemoryStore) -> HttpStatePorts {
    let shared = Arc::new(store.clone());
    HttpStatePorts {
        events: shared.clone(),
        ledger: shared.clone(),
        users: shared.clone(),
        tokens: shared.clone(),
        hasher: Arc::new(Argon2PasswordHasher::default()),
        translations: shared.clone(),
        content: shared.clone(),
        contacts: shared.clone(),
        notifier: Arc::new(LogContactNotifier),
        volunteers: shared,
        clock: store.clock(),
    }
}

/// HTTP state over a fresh in-memory store, returned alongside it so tests
/// can seed data.
pub fn memory_state() -> (HttpState, MemoryStore) {
    let store = MemoryStore::new();
    (
        HttpState::new(memory_ports(&store), MediaUrls::default()),
        store,
    )
}
