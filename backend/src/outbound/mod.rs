//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **memory**: in-process store used without a database and in tests
//! - **security**: Argon2id password hashing
//! - **notify**: contact message notification
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations.

pub mod memory;
pub mod notify;
pub mod persistence;
pub mod security;
