//! Page content lookups with built-in fallbacks.

use std::sync::Arc;

use crate::domain::ports::{ContentRepository, ContentRepositoryError};
use crate::domain::{CleaningServicePage, Error, EventsPageSettings, MissionPage};

/// Serves the singleton page documents.
#[derive(Clone)]
pub struct ContentService {
    repository: Arc<dyn ContentRepository>,
}

impl ContentService {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self { repository }
    }

    fn map_repository_error(error: ContentRepositoryError) -> Error {
        match error {
            ContentRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("content repository unavailable: {message}"))
            }
            ContentRepositoryError::Query { message } => {
                Error::internal(format!("content repository error: {message}"))
            }
        }
    }

    /// Stored mission page, or the built-in text.
    pub async fn mission(&self) -> Result<MissionPage, Error> {
        Ok(self
            .repository
            .mission()
            .await
            .map_err(Self::map_repository_error)?
            .unwrap_or_else(MissionPage::builtin))
    }

    /// Stored cleaning page with at most three gallery images, or the
    /// built-in text.
    pub async fn cleaning_service(&self) -> Result<CleaningServicePage, Error> {
        Ok(self
            .repository
            .cleaning_service()
            .await
            .map_err(Self::map_repository_error)?
            .map_or_else(
                CleaningServicePage::builtin,
                CleaningServicePage::with_published_gallery,
            ))
    }

    /// Stored events page settings, or the built-in text.
    pub async fn events_page(&self) -> Result<EventsPageSettings, Error> {
        Ok(self
            .repository
            .events_page()
            .await
            .map_err(Self::map_repository_error)?
            .unwrap_or_else(EventsPageSettings::builtin))
    }
}
