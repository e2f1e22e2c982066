//! Port for the credential store holding member accounts.

use async_trait::async_trait;

use crate::domain::{NewUser, StoredCredentials, User};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// The username is taken.
        DuplicateUsername => "username already exists",
        /// The email address is taken.
        DuplicateEmail => "email already exists",
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Member account storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new account.
    ///
    /// Username clashes are reported before email clashes.
    async fn create(&self, user: &NewUser) -> Result<User, UserRepositoryError>;

    /// Look up the credential record for `username` (exact match).
    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<StoredCredentials>, UserRepositoryError>;
}
