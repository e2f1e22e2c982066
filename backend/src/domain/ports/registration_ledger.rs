//! Port recording event registrations.
//!
//! Implementations must make the capacity check, the duplicate check and
//! the insert atomic with respect to concurrent callers; the uniqueness of
//! `(user, event)` must also be enforced by the store itself.

use async_trait::async_trait;

use crate::domain::{EventId, Registration, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by registration ledger adapters.
    pub enum RegistrationLedgerError {
        /// The event does not exist.
        EventNotFound => "event not found",
        /// The event already holds `capacity` registrations.
        CapacityExceeded => "event is full",
        /// The member is already registered for the event.
        AlreadyRegistered => "already registered",
        /// Repository connection could not be established.
        Connection { message: String } => "registration ledger connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "registration ledger query failed: {message}",
    }
}

/// Ledger of member registrations for events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationLedger: Send + Sync {
    /// Atomically register `user` for `event`.
    async fn register(
        &self,
        user: UserId,
        event: EventId,
    ) -> Result<Registration, RegistrationLedgerError>;
}
