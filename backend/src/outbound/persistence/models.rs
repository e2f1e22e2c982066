//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Conversions into domain types live beside
//! the adapters that load them.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{
    auth_tokens, cleaning_features, cleaning_gallery_images, cleaning_service_pages,
    contact_messages, event_images, event_placeholders, event_registrations, events,
    events_page_settings, mission_pages, site_text_settings, translatable_strings, users,
    volunteer_groups,
};

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = auth_tokens)]
pub(crate) struct NewAuthTokenRow<'a> {
    pub key: &'a str,
    pub user_id: i64,
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EventRow {
    pub id: i64,
    pub title_en: String,
    pub title_ja: String,
    pub description_en: String,
    pub description_ja: String,
    pub start_datetime: DateTime<Utc>,
    pub location: String,
    pub capacity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = event_images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EventImageRow {
    pub event_id: i64,
    pub image: String,
    pub caption_en: String,
    pub caption_ja: String,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = event_registrations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RegistrationRow {
    pub user_id: i64,
    pub event_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = event_registrations)]
pub(crate) struct NewRegistrationRow {
    pub user_id: i64,
    pub event_id: i64,
}

// ---------------------------------------------------------------------------
// Page documents
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = mission_pages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MissionPageRow {
    pub title_en: String,
    pub title_ja: String,
    pub body_en: String,
    pub body_ja: String,
    pub hero_image: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cleaning_service_pages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CleaningServicePageRow {
    pub id: i64,
    pub title_en: String,
    pub title_ja: String,
    pub description_en: String,
    pub description_ja: String,
    pub cta_en: String,
    pub cta_ja: String,
    pub image: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cleaning_features)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CleaningFeatureRow {
    pub text_en: String,
    pub text_ja: String,
    pub color: String,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cleaning_gallery_images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct GalleryImageRow {
    pub image: String,
    pub caption_en: String,
    pub caption_ja: String,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = events_page_settings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EventsPageSettingsRow {
    pub id: i64,
    pub title_en: String,
    pub title_ja: String,
    pub subtitle_en: String,
    pub subtitle_ja: String,
    pub hero_image: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = event_placeholders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EventPlaceholderRow {
    pub title_en: String,
    pub title_ja: String,
    pub description_en: String,
    pub description_ja: String,
    pub image: Option<String>,
    pub cta_label_en: String,
    pub cta_label_ja: String,
    pub cta_url: String,
}

// ---------------------------------------------------------------------------
// Translations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = translatable_strings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TranslationRow {
    pub namespace: String,
    pub key: String,
    pub language: String,
    pub text: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = site_text_settings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SiteTextRow {
    pub home_label_en: String,
    pub home_label_ja: String,
    pub events_label_en: String,
    pub events_label_ja: String,
    pub cleaning_label_en: String,
    pub cleaning_label_ja: String,
    pub cleaning_short_en: String,
    pub cleaning_short_ja: String,
    pub login_en: String,
    pub login_ja: String,
    pub register_en: String,
    pub register_ja: String,
    pub logout_en: String,
    pub logout_ja: String,
    pub browse_events_en: String,
    pub browse_events_ja: String,
    pub learn_more_en: String,
    pub learn_more_ja: String,
    pub instagram_url: String,
}

// ---------------------------------------------------------------------------
// Contact and volunteers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contact_messages)]
pub(crate) struct NewContactMessageRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contact_messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContactMessageRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = volunteer_groups)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct VolunteerGroupRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub logo: Option<String>,
}
