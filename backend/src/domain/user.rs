//! Member accounts referenced by tokens, registrations and memberships.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Database identity of a member account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored member account without its credential material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Account identity.
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// Unique contact address.
    pub email: String,
}

/// Account data handed to the credential store on sign-up.
///
/// The password has already been hashed by a
/// [`PasswordHasher`](crate::domain::ports::PasswordHasher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Unique login name.
    pub username: String,
    /// Unique contact address.
    pub email: String,
    /// Encoded password hash (PHC string format).
    pub password_hash: String,
}

/// Credential record returned for password verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredentials {
    /// Account owning the hash.
    pub user: User,
    /// Encoded password hash (PHC string format).
    pub password_hash: String,
}
