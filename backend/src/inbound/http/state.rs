//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    AuthTokenRepository, ContactNotifier, ContactRepository, ContentRepository, EventRepository,
    PasswordHasher, RegistrationLedger, TranslationRepository, UserRepository,
    VolunteerRepository,
};
use crate::domain::{
    AuthService, ContactService, ContentService, EventCatalogService, RegistrationService,
    TranslationService, VolunteerService,
};

/// Default prefix for stored media paths.
pub const DEFAULT_MEDIA_BASE_URL: &str = "/media/";

/// Builds public URLs for stored image paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrls {
    base: String,
}

impl Default for MediaUrls {
    fn default() -> Self {
        Self::new(DEFAULT_MEDIA_BASE_URL)
    }
}

impl MediaUrls {
    /// Use `base` as the prefix of every media URL.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Public URL of a stored path. Absolute URLs pass through unchanged.
    ///
    /// ```
    /// use bijou_backend::inbound::http::state::MediaUrls;
    ///
    /// let media = MediaUrls::new("https://cdn.example.com/media/");
    /// assert_eq!(media.url("events/a.jpg"), "https://cdn.example.com/media/events/a.jpg");
    /// assert_eq!(media.url("https://x.test/b.jpg"), "https://x.test/b.jpg");
    /// ```
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        format!(
            "{}/{}",
            self.base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// [`Self::url`] over an optional path.
    #[must_use]
    pub fn url_opt(&self, path: Option<&str>) -> Option<String> {
        path.map(|path| self.url(path))
    }
}

/// Parameter object bundling every driven port the services need.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub events: Arc<dyn EventRepository>,
    pub ledger: Arc<dyn RegistrationLedger>,
    pub users: Arc<dyn UserRepository>,
    pub tokens: Arc<dyn AuthTokenRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub translations: Arc<dyn TranslationRepository>,
    pub content: Arc<dyn ContentRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub notifier: Arc<dyn ContactNotifier>,
    pub volunteers: Arc<dyn VolunteerRepository>,
    pub clock: Arc<dyn Clock>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub events: EventCatalogService,
    pub registrations: RegistrationService,
    pub auth: AuthService,
    pub translations: TranslationService,
    pub content: ContentService,
    pub contact: ContactService,
    pub volunteers: VolunteerService,
    pub media: MediaUrls,
}

impl HttpState {
    /// Construct the domain services over `ports`.
    pub fn new(ports: HttpStatePorts, media: MediaUrls) -> Self {
        let HttpStatePorts {
            events,
            ledger,
            users,
            tokens,
            hasher,
            translations,
            content,
            contacts,
            notifier,
            volunteers,
            clock,
        } = ports;
        Self {
            events: EventCatalogService::new(events, clock),
            registrations: RegistrationService::new(ledger),
            auth: AuthService::new(users, tokens, hasher),
            translations: TranslationService::new(translations),
            content: ContentService::new(content),
            contact: ContactService::new(contacts, notifier),
            volunteers: VolunteerService::new(volunteers),
            media,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("/media/", "events/a.jpg", "/media/events/a.jpg")]
    #[case("/media", "/events/a.jpg", "/media/events/a.jpg")]
    #[case("https://cdn.test/m/", "a.jpg", "https://cdn.test/m/a.jpg")]
    #[case("/media/", "http://elsewhere.test/a.jpg", "http://elsewhere.test/a.jpg")]
    fn media_urls_join_with_one_slash(
        #[case] base: &str,
        #[case] path: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(MediaUrls::new(base).url(path), expected);
    }
}
