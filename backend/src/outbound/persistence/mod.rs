//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! This module provides concrete implementations of domain repository ports
//! backed by PostgreSQL via the Diesel ORM with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: Repository implementations only translate between
//!   Diesel models and domain types. Capacity and duplicate checks for
//!   registrations live in the ledger transaction because they must be
//!   atomic with the insert.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are internal implementation details, never
//!   exposed to the domain layer.
//! - **Strongly typed errors**: All database errors are mapped to the port
//!   error of the adapter that raised them.
//!
//! # Example
//!
//! ```ignore
//! use bijou_backend::outbound::persistence::{DbPool, DieselEventRepository, PoolConfig};
//!
//! let config = PoolConfig::new("postgres://localhost/bijou");
//! let pool = DbPool::new(config).await?;
//! let events = DieselEventRepository::new(pool);
//! ```

mod diesel_auth_token_repository;
mod diesel_basic_error_mapping;
mod diesel_contact_repository;
mod diesel_content_repository;
mod diesel_event_repository;
mod diesel_registration_ledger;
mod diesel_translation_repository;
mod diesel_user_repository;
mod diesel_volunteer_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_auth_token_repository::DieselAuthTokenRepository;
pub use diesel_contact_repository::DieselContactRepository;
pub use diesel_content_repository::DieselContentRepository;
pub use diesel_event_repository::DieselEventRepository;
pub use diesel_registration_ledger::DieselRegistrationLedger;
pub use diesel_translation_repository::DieselTranslationRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use diesel_volunteer_repository::DieselVolunteerRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
