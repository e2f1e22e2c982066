//! Argon2id implementation of the password hasher port.
//!
//! Hashes are stored as PHC strings, so parameters and salt travel with
//! the hash and can be tightened later without invalidating old rows.
//! Both operations run on tokio's blocking pool.

use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use async_trait::async_trait;
use rand::rngs::OsRng;
use tokio::task::{self, JoinError};
use zeroize::Zeroizing;

use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Password hasher using Argon2id with the crate's default cost.
#[derive(Clone, Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    /// Create a hasher with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn map_join_error(error: JoinError) -> PasswordHashError {
    PasswordHashError::task(error.to_string())
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        let argon2 = self.argon2.clone();
        let secret = Zeroizing::new(password.to_owned());
        task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(secret.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| PasswordHashError::hashing(err.to_string()))
        })
        .await
        .map_err(map_join_error)?
    }

    async fn verify(&self, password: &str, encoded_hash: &str) -> Result<bool, PasswordHashError> {
        let argon2 = self.argon2.clone();
        let secret = Zeroizing::new(password.to_owned());
        let stored = encoded_hash.to_owned();
        task::spawn_blocking(move || {
            PasswordHash::new(&stored).is_ok_and(|parsed| {
                argon2
                    .verify_password(secret.as_bytes(), &parsed)
                    .is_ok()
            })
        })
        .await
        .map_err(map_join_error)
    }
}
