//! Driven ports for the hexagonal boundary.
//!
//! Every store the domain talks to is described here as an async trait.
//! PostgreSQL adapters live in `outbound::persistence`; in-process
//! adapters for tests and database-less runs live in `outbound::memory`.

mod macros;
pub(crate) use macros::define_port_error;

mod auth_token_repository;
mod contact_repository;
mod content_repository;
mod event_repository;
mod password_hasher;
mod registration_ledger;
mod translation_repository;
mod user_repository;
mod volunteer_repository;

pub use auth_token_repository::{AuthTokenRepository, AuthTokenRepositoryError};
pub use contact_repository::{
    ContactNotifier, ContactNotifierError, ContactRepository, ContactRepositoryError,
};
pub use content_repository::{ContentRepository, ContentRepositoryError};
pub use event_repository::{EventRepository, EventRepositoryError};
pub use password_hasher::{PasswordHashError, PasswordHasher};
pub use registration_ledger::{RegistrationLedger, RegistrationLedgerError};
pub use translation_repository::{TranslationRepository, TranslationRepositoryError};
pub use user_repository::{UserRepository, UserRepositoryError};
pub use volunteer_repository::{VolunteerRepository, VolunteerRepositoryError};

#[cfg(test)]
pub use auth_token_repository::MockAuthTokenRepository;
#[cfg(test)]
pub use contact_repository::{MockContactNotifier, MockContactRepository};
#[cfg(test)]
pub use content_repository::MockContentRepository;
#[cfg(test)]
pub use event_repository::MockEventRepository;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
#[cfg(test)]
pub use registration_ledger::MockRegistrationLedger;
#[cfg(test)]
pub use translation_repository::MockTranslationRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use volunteer_repository::MockVolunteerRepository;
