//! PostgreSQL-backed registration ledger.
//!
//! `register` runs in one transaction that first locks the event row with
//! `SELECT ... FOR UPDATE`. Concurrent registrations for the same event
//! therefore queue behind each other, and the count they observe already
//! includes every committed competitor. The `(user_id, event_id)` unique
//! constraint backs up the duplicate check.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{RegistrationLedger, RegistrationLedgerError};
use crate::domain::{EventId, Registration, UserId, is_full};

use super::diesel_basic_error_mapping::{
    map_basic_diesel_error, map_basic_pool_error, unique_violation,
};
use super::models::{NewRegistrationRow, RegistrationRow};
use super::pool::{DbPool, PoolError};
use super::schema::{event_registrations, events};

/// Diesel-backed implementation of the registration ledger port.
#[derive(Clone)]
pub struct DieselRegistrationLedger {
    pool: DbPool,
}

impl DieselRegistrationLedger {
    /// Create a new ledger with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Outcome of a failed registration transaction.
#[derive(Debug)]
enum RegisterFailure {
    Rejected(RegistrationLedgerError),
    Database(DieselError),
}

impl From<DieselError> for RegisterFailure {
    fn from(error: DieselError) -> Self {
        Self::Database(error)
    }
}

fn map_pool_error(error: PoolError) -> RegistrationLedgerError {
    map_basic_pool_error(error, RegistrationLedgerError::connection)
}

fn map_diesel_error(error: DieselError) -> RegistrationLedgerError {
    if unique_violation(&error).is_some() {
        debug!("registration raced a duplicate insert");
        return RegistrationLedgerError::already_registered();
    }
    map_basic_diesel_error(
        error,
        RegistrationLedgerError::query,
        RegistrationLedgerError::connection,
    )
}

fn map_register_failure(failure: RegisterFailure) -> RegistrationLedgerError {
    match failure {
        RegisterFailure::Rejected(error) => error,
        RegisterFailure::Database(error) => map_diesel_error(error),
    }
}

fn count_to_u64(count: i64) -> u64 {
    u64::try_from(count).unwrap_or_default()
}

#[async_trait]
impl RegistrationLedger for DieselRegistrationLedger {
    async fn register(
        &self,
        user: UserId,
        event: EventId,
    ) -> Result<Registration, RegistrationLedgerError> {
        use diesel_async::AsyncConnection as _;
        use diesel_async::scoped_futures::ScopedFutureExt as _;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = conn
            .transaction::<RegistrationRow, RegisterFailure, _>(|conn| {
                async move {
                    let capacity: Option<i32> = events::table
                        .find(event.get())
                        .select(events::capacity)
                        .for_update()
                        .first::<Option<i32>>(conn)
                        .await
                        .optional()?
                        .ok_or(RegisterFailure::Rejected(
                            RegistrationLedgerError::event_not_found(),
                        ))?;

                    let duplicate: bool = diesel::select(exists(
                        event_registrations::table
                            .filter(event_registrations::user_id.eq(user.get()))
                            .filter(event_registrations::event_id.eq(event.get())),
                    ))
                    .get_result(conn)
                    .await?;
                    if duplicate {
                        return Err(RegisterFailure::Rejected(
                            RegistrationLedgerError::already_registered(),
                        ));
                    }

                    let taken: i64 = event_registrations::table
                        .filter(event_registrations::event_id.eq(event.get()))
                        .count()
                        .get_result(conn)
                        .await?;
                    let capacity = capacity.and_then(|value| u32::try_from(value).ok());
                    if is_full(capacity, count_to_u64(taken)) {
                        return Err(RegisterFailure::Rejected(
                            RegistrationLedgerError::capacity_exceeded(),
                        ));
                    }

                    let row = diesel::insert_into(event_registrations::table)
                        .values(&NewRegistrationRow {
                            user_id: user.get(),
                            event_id: event.get(),
                        })
                        .returning(RegistrationRow::as_returning())
                        .get_result(conn)
                        .await?;
                    Ok(row)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_register_failure)?;

        Ok(Registration {
            user_id: UserId::new(row.user_id),
            event_id: EventId::new(row.event_id),
            created_at: row.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Error mapping coverage; locking behaviour is exercised against
    //! embedded PostgreSQL in `tests/diesel_ledger.rs`.
    use diesel::result::DatabaseErrorKind;
    use rstest::rstest;

    use super::super::diesel_basic_error_mapping::test_support::ConstraintViolation;
    use super::*;

    #[rstest]
    fn unique_violation_is_already_registered() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(ConstraintViolation("event_registrations_user_event_key")),
        );
        assert_eq!(
            map_diesel_error(error),
            RegistrationLedgerError::AlreadyRegistered
        );
    }

    #[rstest]
    #[case(RegistrationLedgerError::EventNotFound)]
    #[case(RegistrationLedgerError::CapacityExceeded)]
    fn rejections_pass_through(#[case] rejection: RegistrationLedgerError) {
        assert_eq!(
            map_register_failure(RegisterFailure::Rejected(rejection.clone())),
            rejection
        );
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert!(matches!(err, RegistrationLedgerError::Connection { .. }));
    }
}
