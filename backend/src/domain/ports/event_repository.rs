//! Port for reading the event catalogue.

use async_trait::async_trait;

use crate::domain::{EventFilter, EventId, EventListing};

use super::define_port_error;

define_port_error! {
    /// Errors raised by event repository adapters.
    pub enum EventRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "event repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "event repository query failed: {message}",
    }
}

/// Read access to events together with their live registration counts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Count events passing `filter`.
    async fn count(&self, filter: EventFilter) -> Result<u64, EventRepositoryError>;

    /// Load a window of events passing `filter`, newest start first.
    ///
    /// Ties on the start time are broken by descending identity so page
    /// boundaries stay stable.
    async fn list(
        &self,
        filter: EventFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<EventListing>, EventRepositoryError>;

    /// Find one event by identity.
    async fn find(&self, id: EventId) -> Result<Option<EventListing>, EventRepositoryError>;
}
