//! PostgreSQL-backed UI strings and site text.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{TranslationRepository, TranslationRepositoryError};
use crate::domain::{Bilingual, SiteText, TranslationEntry};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{SiteTextRow, TranslationRow};
use super::pool::{DbPool, PoolError};
use super::schema::{site_text_settings, translatable_strings};

/// Diesel-backed implementation of the translation repository port.
#[derive(Clone)]
pub struct DieselTranslationRepository {
    pool: DbPool,
}

impl DieselTranslationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TranslationRepositoryError {
    map_basic_pool_error(error, TranslationRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> TranslationRepositoryError {
    map_basic_diesel_error(
        error,
        TranslationRepositoryError::query,
        TranslationRepositoryError::connection,
    )
}

impl From<TranslationRow> for TranslationEntry {
    fn from(row: TranslationRow) -> Self {
        Self {
            namespace: row.namespace,
            key: row.key,
            language: row.language,
            text: row.text,
            updated_at: row.updated_at,
        }
    }
}

impl From<SiteTextRow> for SiteText {
    fn from(row: SiteTextRow) -> Self {
        Self {
            home_label: Bilingual::new(row.home_label_en, row.home_label_ja),
            events_label: Bilingual::new(row.events_label_en, row.events_label_ja),
            cleaning_label: Bilingual::new(row.cleaning_label_en, row.cleaning_label_ja),
            cleaning_short: Bilingual::new(row.cleaning_short_en, row.cleaning_short_ja),
            login: Bilingual::new(row.login_en, row.login_ja),
            register: Bilingual::new(row.register_en, row.register_ja),
            logout: Bilingual::new(row.logout_en, row.logout_ja),
            browse_events: Bilingual::new(row.browse_events_en, row.browse_events_ja),
            learn_more: Bilingual::new(row.learn_more_en, row.learn_more_ja),
            instagram_url: row.instagram_url,
        }
    }
}

#[async_trait]
impl TranslationRepository for DieselTranslationRepository {
    async fn entries(
        &self,
        language: &str,
        namespace: &str,
    ) -> Result<Vec<TranslationEntry>, TranslationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<TranslationRow> = translatable_strings::table
            .filter(translatable_strings::language.eq(language))
            .filter(translatable_strings::namespace.eq(namespace))
            .order(translatable_strings::key)
            .select(TranslationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(TranslationEntry::from).collect())
    }

    async fn site_text(&self) -> Result<Option<SiteText>, TranslationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = site_text_settings::table
            .order(site_text_settings::id)
            .select(SiteTextRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(SiteText::from))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn site_text_row_pairs_languages() {
        let row = SiteTextRow {
            home_label_en: "Home".into(),
            home_label_ja: "ホーム".into(),
            events_label_en: "Events".into(),
            events_label_ja: "イベント".into(),
            cleaning_label_en: "Cleaning".into(),
            cleaning_label_ja: "清掃".into(),
            cleaning_short_en: "Cleaning".into(),
            cleaning_short_ja: "清掃".into(),
            login_en: "Login".into(),
            login_ja: "ログイン".into(),
            register_en: "Register".into(),
            register_ja: "登録".into(),
            logout_en: "Logout".into(),
            logout_ja: "ログアウト".into(),
            browse_events_en: "Browse".into(),
            browse_events_ja: "見る".into(),
            learn_more_en: "More".into(),
            learn_more_ja: "詳しく".into(),
            instagram_url: "https://instagram.com/bijou".into(),
        };
        let text = SiteText::from(row);
        assert_eq!(text.login, Bilingual::new("Login", "ログイン"));
        assert_eq!(text.instagram_url, "https://instagram.com/bijou");
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let err = map_diesel_error(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ClosedConnection,
            Box::new(String::from("closed")),
        ));
        assert!(matches!(err, TranslationRepositoryError::Connection { .. }));
    }
}
