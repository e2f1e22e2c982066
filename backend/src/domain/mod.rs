//! Domain primitives, services and driven ports.
//!
//! Purpose: hold the rules of the site backend independent of HTTP and
//! storage. Inbound adapters call the services; outbound adapters
//! implement the traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode — transport agnostic failure payload.
//! - Language / Bilingual — language selection and paired `en`/`ja` text.
//! - Event, EventListing, Registration — the calendar and its capacity model.
//! - TokenKey, LoginCredentials, SignupRequest — token authentication input.
//! - TranslationBundle, SiteText — merged UI strings with weak validators.
//! - MissionPage, CleaningServicePage, EventsPageSettings — page documents.
//! - Services: EventCatalogService, RegistrationService, AuthService,
//!   TranslationService, ContentService, ContactService, VolunteerService.

pub mod auth;
pub mod contact;
pub mod content;
pub mod error;
pub mod event;
pub mod language;
pub mod ports;
pub mod trace_id;
pub mod translation;
pub mod user;
pub mod volunteer;

mod auth_service;
mod contact_service;
mod content_service;
mod event_catalog_service;
mod registration_service;
mod translation_service;
mod volunteer_service;

pub use self::auth::{
    CredentialsValidationError, LoginCredentials, MissingCredentials, SignupRequest,
    TOKEN_KEY_LENGTH, TOKEN_PREFIX, TokenKey, parse_token_header,
};
pub use self::auth_service::{AuthService, INVALID_CREDENTIALS, INVALID_TOKEN};
pub use self::contact::{ContactMessage, ContactValidationError, NewContactMessage};
pub use self::contact_service::ContactService;
pub use self::content::{
    CLEANING_GALLERY_LIMIT, CleaningFeature, CleaningServicePage, EventPlaceholder,
    EventsPageSettings, FeatureColor, GalleryImage, MissionPage,
};
pub use self::content_service::ContentService;
pub use self::error::{Error, ErrorCode};
pub use self::event::{
    Event, EventFilter, EventId, EventImage, EventListing, Registration, available_slots,
    is_full,
};
pub use self::event_catalog_service::{EVENT_NOT_FOUND, EventCatalogService};
pub use self::language::{Bilingual, Language, UnsupportedLanguage};
pub use self::registration_service::{ALREADY_REGISTERED, EVENT_FULL, RegistrationService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::translation::{
    DEFAULT_NAMESPACE, SiteText, TranslationBundle, TranslationEntry, parse_namespaces,
};
pub use self::translation_service::TranslationService;
pub use self::user::{NewUser, StoredCredentials, User, UserId};
pub use self::volunteer::{
    UnknownVolunteerRole, VolunteerGroup, VolunteerMembership, VolunteerRole,
};
pub use self::volunteer_service::VolunteerService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use bijou_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("Event not found."))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
