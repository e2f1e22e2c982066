//! PostgreSQL-backed volunteer groups and memberships.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{VolunteerRepository, VolunteerRepositoryError};
use crate::domain::{UserId, VolunteerGroup, VolunteerMembership, VolunteerRole};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::VolunteerGroupRow;
use super::pool::{DbPool, PoolError};
use super::schema::{volunteer_groups, volunteer_memberships};

/// Diesel-backed implementation of the volunteer repository port.
#[derive(Clone)]
pub struct DieselVolunteerRepository {
    pool: DbPool,
}

impl DieselVolunteerRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> VolunteerRepositoryError {
    map_basic_pool_error(error, VolunteerRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> VolunteerRepositoryError {
    map_basic_diesel_error(
        error,
        VolunteerRepositoryError::query,
        VolunteerRepositoryError::connection,
    )
}

type MembershipRow = (i64, String, String, DateTime<Utc>);

fn membership_from_row(
    (group_id, group_name, role, added_at): MembershipRow,
) -> Result<VolunteerMembership, VolunteerRepositoryError> {
    let role = role.parse::<VolunteerRole>().map_err(|err| {
        warn!(group_id, error = %err, "stored volunteer role is not recognised");
        VolunteerRepositoryError::query(err.to_string())
    })?;
    Ok(VolunteerMembership {
        group_id,
        group_name,
        role,
        added_at,
    })
}

impl From<VolunteerGroupRow> for VolunteerGroup {
    fn from(row: VolunteerGroupRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            logo: row.logo,
        }
    }
}

#[async_trait]
impl VolunteerRepository for DieselVolunteerRepository {
    async fn active_groups(&self) -> Result<Vec<VolunteerGroup>, VolunteerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<VolunteerGroupRow> = volunteer_groups::table
            .filter(volunteer_groups::active.eq(true))
            .order((volunteer_groups::name, volunteer_groups::id))
            .select(VolunteerGroupRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(VolunteerGroup::from).collect())
    }

    async fn memberships_for(
        &self,
        user: UserId,
    ) -> Result<Vec<VolunteerMembership>, VolunteerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<MembershipRow> = volunteer_memberships::table
            .inner_join(volunteer_groups::table)
            .filter(volunteer_memberships::user_id.eq(user.get()))
            .order((volunteer_groups::name, volunteer_groups::id))
            .select((
                volunteer_groups::id,
                volunteer_groups::name,
                volunteer_memberships::role,
                volunteer_memberships::added_at,
            ))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(membership_from_row).collect()
    }
}
