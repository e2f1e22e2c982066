//! Port storing opaque bearer tokens.

use async_trait::async_trait;

use crate::domain::{TokenKey, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by token repository adapters.
    pub enum AuthTokenRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "token repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "token repository query failed: {message}",
    }
}

/// Token storage keyed by the token text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthTokenRepository: Send + Sync {
    /// Delete every token owned by `user` and store `key`, atomically.
    ///
    /// Concurrent calls for the same user must leave exactly one token.
    async fn replace_for_user(
        &self,
        user: UserId,
        key: &TokenKey,
    ) -> Result<(), AuthTokenRepositoryError>;

    /// Resolve the owner of `key`.
    async fn find_user(&self, key: &TokenKey) -> Result<Option<UserId>, AuthTokenRepositoryError>;

    /// Delete `key`; deleting an unknown key succeeds.
    async fn delete(&self, key: &TokenKey) -> Result<(), AuthTokenRepositoryError>;
}
