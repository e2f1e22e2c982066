//! Event catalogue and registration ledger over the shared state.

use std::cmp::Reverse;

use async_trait::async_trait;

use super::{MemoryStore, State};
use crate::domain::ports::{
    EventRepository, EventRepositoryError, RegistrationLedger, RegistrationLedgerError,
};
use crate::domain::{EventFilter, EventId, EventListing, Registration, UserId, is_full};

fn registration_count(state: &State, event: EventId) -> u64 {
    let count = state
        .registrations
        .iter()
        .filter(|r| r.event_id == event)
        .count();
    u64::try_from(count).unwrap_or(u64::MAX)
}

fn to_window(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl EventRepository for MemoryStore {
    async fn count(&self, filter: EventFilter) -> Result<u64, EventRepositoryError> {
        let state = self.state();
        let count = state.events.values().filter(|e| filter.matches(e)).count();
        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }

    async fn list(
        &self,
        filter: EventFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<EventListing>, EventRepositoryError> {
        let state = self.state();
        let mut events: Vec<_> = state
            .events
            .values()
            .filter(|e| filter.matches(e))
            .collect();
        events.sort_by_key(|e| Reverse((e.start_datetime, e.id)));
        Ok(events
            .into_iter()
            .skip(to_window(offset))
            .take(to_window(limit))
            .map(|event| EventListing {
                registration_count: registration_count(&state, event.id),
                event: event.clone(),
            })
            .collect())
    }

    async fn find(&self, id: EventId) -> Result<Option<EventListing>, EventRepositoryError> {
        let state = self.state();
        Ok(state.events.get(&id).map(|event| EventListing {
            registration_count: registration_count(&state, id),
            event: event.clone(),
        }))
    }
}

#[async_trait]
impl RegistrationLedger for MemoryStore {
    async fn register(
        &self,
        user: UserId,
        event: EventId,
    ) -> Result<Registration, RegistrationLedgerError> {
        let created_at = self.now();
        let mut state = self.state();
        let capacity = state
            .events
            .get(&event)
            .ok_or_else(RegistrationLedgerError::event_not_found)?
            .capacity;
        if state
            .registrations
            .iter()
            .any(|r| r.user_id == user && r.event_id == event)
        {
            return Err(RegistrationLedgerError::already_registered());
        }
        if is_full(capacity, registration_count(&state, event)) {
            return Err(RegistrationLedgerError::capacity_exceeded());
        }
        let registration = Registration {
            user_id: user,
            event_id: event,
            created_at,
        };
        state.registrations.push(registration.clone());
        Ok(registration)
    }
}

impl MemoryStore {
    /// Registrations currently held for `event`.
    #[must_use]
    pub fn registrations_for(&self, event: EventId) -> u64 {
        registration_count(&self.state(), event)
    }
}
