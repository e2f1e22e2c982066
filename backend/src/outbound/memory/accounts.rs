//! Member accounts and bearer tokens over the shared state.

use async_trait::async_trait;

use super::MemoryStore;
use crate::domain::ports::{
    AuthTokenRepository, AuthTokenRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{NewUser, StoredCredentials, TokenKey, User, UserId};

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, user: &NewUser) -> Result<User, UserRepositoryError> {
        let mut state = self.state();
        if state.users.iter().any(|u| u.user.username == user.username) {
            return Err(UserRepositoryError::duplicate_username());
        }
        if state.users.iter().any(|u| u.user.email == user.email) {
            return Err(UserRepositoryError::duplicate_email());
        }
        let created = User {
            id: UserId::new(state.allocate_id()),
            username: user.username.clone(),
            email: user.email.clone(),
        };
        state.users.push(StoredCredentials {
            user: created.clone(),
            password_hash: user.password_hash.clone(),
        });
        Ok(created)
    }

    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<StoredCredentials>, UserRepositoryError> {
        Ok(self
            .state()
            .users
            .iter()
            .find(|u| u.user.username == username)
            .cloned())
    }
}

#[async_trait]
impl AuthTokenRepository for MemoryStore {
    async fn replace_for_user(
        &self,
        user: UserId,
        key: &TokenKey,
    ) -> Result<(), AuthTokenRepositoryError> {
        let mut state = self.state();
        state.tokens.retain(|_, owner| *owner != user);
        state.tokens.insert(key.as_str().to_owned(), user);
        Ok(())
    }

    async fn find_user(&self, key: &TokenKey) -> Result<Option<UserId>, AuthTokenRepositoryError> {
        Ok(self.state().tokens.get(key.as_str()).copied())
    }

    async fn delete(&self, key: &TokenKey) -> Result<(), AuthTokenRepositoryError> {
        self.state().tokens.remove(key.as_str());
        Ok(())
    }
}
