//! Port for password hashing.
//!
//! Hashing is deliberately slow, so adapters must keep the work off the
//! async worker threads.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised while hashing or verifying a password.
    pub enum PasswordHashError {
        /// The hasher could not produce a hash.
        Hashing { message: String } => "password hashing failed: {message}",
        /// The background hashing task did not complete.
        Task { message: String } => "password hashing task failed: {message}",
    }
}

/// One-way password hashing with verification.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produce an encoded hash for `password`.
    async fn hash(&self, password: &str) -> Result<String, PasswordHashError>;

    /// Check `password` against an encoded hash. Malformed hashes never
    /// verify; an error means the check itself could not run.
    async fn verify(&self, password: &str, encoded_hash: &str) -> Result<bool, PasswordHashError>;
}
