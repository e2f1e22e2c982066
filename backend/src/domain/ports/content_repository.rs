//! Port reading singleton page documents.

use async_trait::async_trait;

use crate::domain::{CleaningServicePage, EventsPageSettings, MissionPage};

use super::define_port_error;

define_port_error! {
    /// Errors raised by content repository adapters.
    pub enum ContentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "content repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "content repository query failed: {message}",
    }
}

/// Read access to page documents.
///
/// Each method returns the first stored record by identity, with its
/// children already in display order, or `None` when nothing is stored.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Current mission page.
    async fn mission(&self) -> Result<Option<MissionPage>, ContentRepositoryError>;

    /// Current cleaning service page with every gallery image.
    async fn cleaning_service(&self)
    -> Result<Option<CleaningServicePage>, ContentRepositoryError>;

    /// Current events page settings with active placeholders only.
    async fn events_page(&self) -> Result<Option<EventsPageSettings>, ContentRepositoryError>;
}
