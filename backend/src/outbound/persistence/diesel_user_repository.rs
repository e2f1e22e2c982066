//! PostgreSQL-backed member accounts.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{NewUser, StoredCredentials, User, UserId};

use super::diesel_basic_error_mapping::{
    map_basic_diesel_error, map_basic_pool_error, unique_violation,
};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

const USERNAME_CONSTRAINT: &str = "users_username_key";
const EMAIL_CONSTRAINT: &str = "users_email_key";

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug)]
enum CreateFailure {
    Rejected(UserRepositoryError),
    Database(DieselError),
}

impl From<DieselError> for CreateFailure {
    fn from(error: DieselError) -> Self {
        Self::Database(error)
    }
}

fn map_pool_error(error: PoolError) -> UserRepositoryError {
    map_basic_pool_error(error, UserRepositoryError::connection)
}

fn map_diesel_error(error: DieselError) -> UserRepositoryError {
    match unique_violation(&error) {
        Some(USERNAME_CONSTRAINT) => return UserRepositoryError::duplicate_username(),
        Some(EMAIL_CONSTRAINT) => return UserRepositoryError::duplicate_email(),
        Some(other) => debug!(constraint = other, "unexpected unique violation on users"),
        None => {}
    }
    map_basic_diesel_error(
        error,
        UserRepositoryError::query,
        UserRepositoryError::connection,
    )
}

fn map_create_failure(failure: CreateFailure) -> UserRepositoryError {
    match failure {
        CreateFailure::Rejected(error) => error,
        CreateFailure::Database(error) => map_diesel_error(error),
    }
}

fn row_to_user(row: UserRow) -> StoredCredentials {
    StoredCredentials {
        user: User {
            id: UserId::new(row.id),
            username: row.username,
            email: row.email,
        },
        password_hash: row.password_hash,
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, UserRepositoryError> {
        use diesel_async::AsyncConnection as _;
        use diesel_async::scoped_futures::ScopedFutureExt as _;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = conn
            .transaction::<UserRow, CreateFailure, _>(|conn| {
                async move {
                    let username_taken: bool = diesel::select(exists(
                        users::table.filter(users::username.eq(&user.username)),
                    ))
                    .get_result(conn)
                    .await?;
                    if username_taken {
                        return Err(CreateFailure::Rejected(
                            UserRepositoryError::duplicate_username(),
                        ));
                    }

                    let email_taken: bool =
                        diesel::select(exists(users::table.filter(users::email.eq(&user.email))))
                            .get_result(conn)
                            .await?;
                    if email_taken {
                        return Err(CreateFailure::Rejected(
                            UserRepositoryError::duplicate_email(),
                        ));
                    }

                    let row = diesel::insert_into(users::table)
                        .values(&NewUserRow {
                            username: &user.username,
                            email: &user.email,
                            password_hash: &user.password_hash,
                        })
                        .returning(UserRow::as_returning())
                        .get_result(conn)
                        .await?;
                    Ok(row)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_create_failure)?;

        Ok(row_to_user(row).user)
    }

    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<StoredCredentials>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .filter(users::username.eq(username))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(row_to_user))
    }
}
