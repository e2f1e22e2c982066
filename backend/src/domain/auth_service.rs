//! Token authentication: sign-up, login, validation and logout.
//!
//! Each member holds at most one live token. Issuing a token replaces
//! whatever the member held before, so logging in on a second device
//! signs the first one out.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::ports::{
    AuthTokenRepository, AuthTokenRepositoryError, PasswordHashError, PasswordHasher,
    UserRepository, UserRepositoryError,
};
use crate::domain::{Error, LoginCredentials, NewUser, SignupRequest, TokenKey, UserId};

/// Message returned for a wrong username or password.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
/// Message returned for an unknown bearer token.
pub const INVALID_TOKEN: &str = "Invalid token.";

/// Authentication service over the credential and token stores.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn AuthTokenRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AuthService {
    /// Create a service from its collaborators.
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<dyn AuthTokenRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            users,
            tokens,
            hasher,
        }
    }

    fn map_user_error(error: UserRepositoryError) -> Error {
        match error {
            UserRepositoryError::DuplicateUsername => Error::conflict("Username already exists."),
            UserRepositoryError::DuplicateEmail => Error::conflict("Email already exists."),
            UserRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserRepositoryError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
        }
    }

    fn map_token_error(error: AuthTokenRepositoryError) -> Error {
        match error {
            AuthTokenRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("token repository unavailable: {message}"))
            }
            AuthTokenRepositoryError::Query { message } => {
                Error::internal(format!("token repository error: {message}"))
            }
        }
    }

    fn map_hash_error(error: PasswordHashError) -> Error {
        Error::internal(error.to_string())
    }

    /// Create an account and sign it in.
    pub async fn sign_up(&self, request: &SignupRequest) -> Result<TokenKey, Error> {
        let password_hash = self
            .hasher
            .hash(request.password())
            .await
            .map_err(Self::map_hash_error)?;
        let user = self
            .users
            .create(&NewUser {
                username: request.username().to_owned(),
                email: request.email().to_owned(),
                password_hash,
            })
            .await
            .map_err(Self::map_user_error)?;
        info!(user_id = %user.id, "account created");
        self.issue(user.id).await
    }

    /// Verify credentials and issue a fresh token.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<TokenKey, Error> {
        let found = self
            .users
            .find_credentials(credentials.username())
            .await
            .map_err(Self::map_user_error)?;
        let Some(stored) = found else {
            debug!("login rejected: unknown username");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };
        let verified = self
            .hasher
            .verify(credentials.password(), &stored.password_hash)
            .await
            .map_err(Self::map_hash_error)?;
        if !verified {
            debug!(user_id = %stored.user.id, "login rejected: password mismatch");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }
        self.issue(stored.user.id).await
    }

    /// Replace every token held by `user` with a new one.
    pub async fn issue(&self, user: UserId) -> Result<TokenKey, Error> {
        let key = TokenKey::generate();
        self.tokens
            .replace_for_user(user, &key)
            .await
            .map_err(Self::map_token_error)?;
        info!(user_id = %user, "token issued");
        Ok(key)
    }

    /// Resolve the member owning `key`.
    pub async fn authenticate(&self, key: &TokenKey) -> Result<UserId, Error> {
        self.tokens
            .find_user(key)
            .await
            .map_err(Self::map_token_error)?
            .ok_or_else(|| Error::unauthorized(INVALID_TOKEN))
    }

    /// Delete `key`. Unknown keys are ignored.
    pub async fn revoke(&self, key: &TokenKey) -> Result<(), Error> {
        self.tokens.delete(key).await.map_err(Self::map_token_error)
    }
}
