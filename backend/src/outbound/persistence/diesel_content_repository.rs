//! PostgreSQL-backed page documents.
//!
//! Each page table is read as a singleton: the row with the lowest id wins.
//! A page and its ordered children are read in one transaction.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ContentRepository, ContentRepositoryError};
use crate::domain::{
    Bilingual, CleaningFeature, CleaningServicePage, EventPlaceholder, EventsPageSettings,
    FeatureColor, GalleryImage, MissionPage,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{
    CleaningFeatureRow, CleaningServicePageRow, EventPlaceholderRow, EventsPageSettingsRow,
    GalleryImageRow, MissionPageRow,
};
use super::pool::{DbPool, PoolError};
use super::schema::{
    cleaning_features, cleaning_gallery_images, cleaning_service_pages, event_placeholders,
    events_page_settings, mission_pages,
};

/// Diesel-backed implementation of the content repository port.
#[derive(Clone)]
pub struct DieselContentRepository {
    pool: DbPool,
}

impl DieselContentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ContentRepositoryError {
    map_basic_pool_error(error, ContentRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ContentRepositoryError {
    map_basic_diesel_error(
        error,
        ContentRepositoryError::query,
        ContentRepositoryError::connection,
    )
}

fn mission_from_row(row: MissionPageRow) -> MissionPage {
    MissionPage {
        title: Bilingual::new(row.title_en, row.title_ja),
        body: Bilingual::new(row.body_en, row.body_ja),
        hero_image: row.hero_image,
        updated_at: Some(row.updated_at),
    }
}

fn cleaning_from_rows(
    page: CleaningServicePageRow,
    features: Vec<CleaningFeatureRow>,
    gallery: Vec<GalleryImageRow>,
) -> CleaningServicePage {
    CleaningServicePage {
        title: Bilingual::new(page.title_en, page.title_ja),
        description: Bilingual::new(page.description_en, page.description_ja),
        cta: Bilingual::new(page.cta_en, page.cta_ja),
        image: page.image,
        features: features
            .into_iter()
            .map(|row| CleaningFeature {
                text: Bilingual::new(row.text_en, row.text_ja),
                color: FeatureColor::from_stored(&row.color),
            })
            .collect(),
        gallery: Some(
            gallery
                .into_iter()
                .map(|row| GalleryImage {
                    path: row.image,
                    caption: Bilingual::new(row.caption_en, row.caption_ja),
                })
                .collect(),
        ),
        updated_at: Some(page.updated_at),
    }
}

fn events_page_from_rows(
    page: EventsPageSettingsRow,
    placeholders: Vec<EventPlaceholderRow>,
) -> EventsPageSettings {
    EventsPageSettings {
        title: Bilingual::new(page.title_en, page.title_ja),
        subtitle: Bilingual::new(page.subtitle_en, page.subtitle_ja),
        hero_image: page.hero_image,
        placeholders: placeholders
            .into_iter()
            .map(|row| EventPlaceholder {
                title: Bilingual::new(row.title_en, row.title_ja),
                description: Bilingual::new(row.description_en, row.description_ja),
                image: row.image,
                cta_label: Bilingual::new(row.cta_label_en, row.cta_label_ja),
                cta_url: row.cta_url,
            })
            .collect(),
        updated_at: Some(page.updated_at),
    }
}

#[async_trait]
impl ContentRepository for DieselContentRepository {
    async fn mission(&self) -> Result<Option<MissionPage>, ContentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = mission_pages::table
            .order(mission_pages::id)
            .select(MissionPageRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(mission_from_row))
    }

    async fn cleaning_service(
        &self,
    ) -> Result<Option<CleaningServicePage>, ContentRepositoryError> {
        use diesel_async::AsyncConnection as _;
        use diesel_async::scoped_futures::ScopedFutureExt as _;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            async move {
                let Some(page) = cleaning_service_pages::table
                    .order(cleaning_service_pages::id)
                    .select(CleaningServicePageRow::as_select())
                    .first(conn)
                    .await
                    .optional()?
                else {
                    return Ok(None);
                };
                let features = cleaning_features::table
                    .filter(cleaning_features::page_id.eq(page.id))
                    .order((cleaning_features::sort_order, cleaning_features::id))
                    .select(CleaningFeatureRow::as_select())
                    .load(conn)
                    .await?;
                let gallery = cleaning_gallery_images::table
                    .filter(cleaning_gallery_images::page_id.eq(page.id))
                    .order((
                        cleaning_gallery_images::sort_order,
                        cleaning_gallery_images::id,
                    ))
                    .select(GalleryImageRow::as_select())
                    .load(conn)
                    .await?;
                Ok(Some(cleaning_from_rows(page, features, gallery)))
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn events_page(&self) -> Result<Option<EventsPageSettings>, ContentRepositoryError> {
        use diesel_async::AsyncConnection as _;
        use diesel_async::scoped_futures::ScopedFutureExt as _;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            async move {
                let Some(page) = events_page_settings::table
                    .order(events_page_settings::id)
                    .select(EventsPageSettingsRow::as_select())
                    .first(conn)
                    .await
                    .optional()?
                else {
                    return Ok(None);
                };
                let placeholders = event_placeholders::table
                    .filter(event_placeholders::page_id.eq(page.id))
                    .filter(event_placeholders::active.eq(true))
                    .order((event_placeholders::sort_order, event_placeholders::id))
                    .select(EventPlaceholderRow::as_select())
                    .load(conn)
                    .await?;
                Ok(Some(events_page_from_rows(page, placeholders)))
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}
