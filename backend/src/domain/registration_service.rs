//! Event registration use-case.
//!
//! The ledger port owns atomicity; this service only translates its
//! outcomes into the client-facing messages.

use std::sync::Arc;

use tracing::info;

use crate::domain::event_catalog_service::EVENT_NOT_FOUND;
use crate::domain::ports::{RegistrationLedger, RegistrationLedgerError};
use crate::domain::{Error, EventId, Registration, UserId};

/// Message returned when the event has no free slot.
pub const EVENT_FULL: &str = "Event is full.";
/// Message returned when the member already holds a registration.
pub const ALREADY_REGISTERED: &str = "Already registered.";

/// Registers members for events.
#[derive(Clone)]
pub struct RegistrationService {
    ledger: Arc<dyn RegistrationLedger>,
}

impl RegistrationService {
    /// Create a service backed by `ledger`.
    pub fn new(ledger: Arc<dyn RegistrationLedger>) -> Self {
        Self { ledger }
    }

    fn map_ledger_error(error: RegistrationLedgerError) -> Error {
        match error {
            RegistrationLedgerError::EventNotFound => Error::not_found(EVENT_NOT_FOUND),
            RegistrationLedgerError::CapacityExceeded => Error::conflict(EVENT_FULL),
            RegistrationLedgerError::AlreadyRegistered => Error::conflict(ALREADY_REGISTERED),
            RegistrationLedgerError::Connection { message } => {
                Error::service_unavailable(format!("registration ledger unavailable: {message}"))
            }
            RegistrationLedgerError::Query { message } => {
                Error::internal(format!("registration ledger error: {message}"))
            }
        }
    }

    /// Register `user` for `event`.
    pub async fn register(&self, user: UserId, event: EventId) -> Result<Registration, Error> {
        let registration = self
            .ledger
            .register(user, event)
            .await
            .map_err(Self::map_ledger_error)?;
        info!(user_id = %user, event_id = %event, "registration accepted");
        Ok(registration)
    }
}
