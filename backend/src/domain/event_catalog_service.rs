//! Read-side use-cases for the event calendar.
//!
//! Listing counts the filtered events first so the requested page can be
//! clamped into range before any rows are fetched.

use std::sync::Arc;

use mockable::Clock;
use pagination::{Page, PageRequest};
use tracing::debug;

use crate::domain::ports::{EventRepository, EventRepositoryError};
use crate::domain::{Error, EventFilter, EventId, EventListing};

/// Message returned when an event id does not resolve.
pub const EVENT_NOT_FOUND: &str = "Event not found.";

/// Event catalogue service.
#[derive(Clone)]
pub struct EventCatalogService {
    events: Arc<dyn EventRepository>,
    clock: Arc<dyn Clock>,
}

impl EventCatalogService {
    /// Create a catalogue over `events`, using `clock` to decide what is past.
    pub fn new(events: Arc<dyn EventRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { events, clock }
    }

    fn map_repository_error(error: EventRepositoryError) -> Error {
        match error {
            EventRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("event repository unavailable: {message}"))
            }
            EventRepositoryError::Query { message } => {
                Error::internal(format!("event repository error: {message}"))
            }
        }
    }

    /// List a page of events, newest start first.
    ///
    /// Past events are hidden unless `include_past` is set. A page beyond
    /// the end resolves to the last page.
    pub async fn list(
        &self,
        include_past: bool,
        request: PageRequest,
    ) -> Result<Page<EventListing>, Error> {
        let filter = if include_past {
            EventFilter::all()
        } else {
            EventFilter::upcoming(self.clock.utc())
        };
        let total = self
            .events
            .count(filter)
            .await
            .map_err(Self::map_repository_error)?;
        let window = request.resolve(total);
        debug!(
            total,
            page = window.page(),
            page_size = window.page_size(),
            include_past,
            "listing events"
        );
        let results = if total == 0 {
            Vec::new()
        } else {
            self.events
                .list(filter, window.offset(), window.limit())
                .await
                .map_err(Self::map_repository_error)?
        };
        Ok(Page::new(window, results))
    }

    /// Fetch a single event by identity.
    pub async fn get(&self, id: EventId) -> Result<EventListing, Error> {
        self.events
            .find(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Error::not_found(EVENT_NOT_FOUND))
    }
}
