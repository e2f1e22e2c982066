//! PostgreSQL-backed event catalogue.
//!
//! Listing reads events, their images and registration counts inside one
//! transaction so the three queries observe the same snapshot.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::dsl::count_star;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{EventRepository, EventRepositoryError};
use crate::domain::{Bilingual, Event, EventFilter, EventId, EventImage, EventListing};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{EventImageRow, EventRow};
use super::pool::{DbPool, PoolError};
use super::schema::{event_images, event_registrations, events};

/// Diesel-backed implementation of the event repository port.
#[derive(Clone)]
pub struct DieselEventRepository {
    pool: DbPool,
}

impl DieselEventRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EventRepositoryError {
    map_basic_pool_error(error, EventRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> EventRepositoryError {
    map_basic_diesel_error(
        error,
        EventRepositoryError::query,
        EventRepositoryError::connection,
    )
}

fn filtered(filter: EventFilter) -> events::BoxedQuery<'static, Pg> {
    let query = events::table.into_boxed();
    match filter.starts_from {
        Some(from) => query.filter(events::start_datetime.ge(from)),
        None => query,
    }
}

fn to_sql_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn count_to_u64(count: i64) -> u64 {
    u64::try_from(count).unwrap_or_default()
}

/// Fetch images and registration counts for `rows` and assemble listings.
async fn hydrate(
    conn: &mut AsyncPgConnection,
    rows: Vec<EventRow>,
) -> Result<Vec<EventListing>, diesel::result::Error> {
    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let image_rows: Vec<EventImageRow> = event_images::table
        .filter(event_images::event_id.eq_any(&ids))
        .order((
            event_images::event_id,
            event_images::sort_order,
            event_images::id,
        ))
        .select(EventImageRow::as_select())
        .load(conn)
        .await?;
    let counts: HashMap<i64, i64> = event_registrations::table
        .filter(event_registrations::event_id.eq_any(&ids))
        .group_by(event_registrations::event_id)
        .select((event_registrations::event_id, count_star()))
        .load::<(i64, i64)>(conn)
        .await?
        .into_iter()
        .collect();

    let mut images: HashMap<i64, Vec<EventImage>> = HashMap::new();
    for row in image_rows {
        images.entry(row.event_id).or_default().push(EventImage {
            path: row.image,
            caption: Bilingual::new(row.caption_en, row.caption_ja),
        });
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let registration_count = count_to_u64(counts.get(&row.id).copied().unwrap_or(0));
            let images = images.remove(&row.id).unwrap_or_default();
            EventListing {
                event: row_to_event(row, images),
                registration_count,
            }
        })
        .collect())
}

fn row_to_event(row: EventRow, images: Vec<EventImage>) -> Event {
    let EventRow {
        id,
        title_en,
        title_ja,
        description_en,
        description_ja,
        start_datetime,
        location,
        capacity,
        created_at,
        updated_at,
    } = row;
    Event {
        id: EventId::new(id),
        title: Bilingual::new(title_en, title_ja),
        description: Bilingual::new(description_en, description_ja),
        start_datetime,
        location,
        // The column carries a non-negative CHECK constraint.
        capacity: capacity.and_then(|value| u32::try_from(value).ok()),
        images,
        created_at,
        updated_at,
    }
}

#[async_trait]
impl EventRepository for DieselEventRepository {
    async fn count(&self, filter: EventFilter) -> Result<u64, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let total: i64 = filtered(filter)
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(count_to_u64(total))
    }

    async fn list(
        &self,
        filter: EventFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<EventListing>, EventRepositoryError> {
        use diesel_async::AsyncConnection as _;
        use diesel_async::scoped_futures::ScopedFutureExt as _;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction(|conn| {
            async move {
                let rows: Vec<EventRow> = filtered(filter)
                    .order((events::start_datetime.desc(), events::id.desc()))
                    .offset(to_sql_bound(offset))
                    .limit(to_sql_bound(limit))
                    .select(EventRow::as_select())
                    .load(conn)
                    .await?;
                hydrate(conn, rows).await
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn find(&self, id: EventId) -> Result<Option<EventListing>, EventRepositoryError> {
        use diesel_async::AsyncConnection as _;
        use diesel_async::scoped_futures::ScopedFutureExt as _;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let listings = conn
            .transaction(|conn| {
                async move {
                    let rows: Vec<EventRow> = events::table
                        .find(id.get())
                        .select(EventRow::as_select())
                        .load(conn)
                        .await?;
                    hydrate(conn, rows).await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;
        Ok(listings.into_iter().next())
    }
}
