//! Response payload shapes.
//!
//! Every content endpoint answers in one of two fixed shapes: a bilingual
//! view carrying `*_en`/`*_ja` pairs, or a single-language view with the
//! suffix dropped. Each endpoint models this as an untagged enum so the
//! two shapes stay distinct types.

use chrono::{DateTime, Utc};
use pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    Bilingual, CleaningServicePage, EventImage, EventListing, EventPlaceholder,
    EventsPageSettings, FeatureColor, GalleryImage, Language, MissionPage, VolunteerGroup,
    VolunteerMembership,
};
use crate::inbound::http::state::MediaUrls;

/// Optional `lang` selector accepted by every GET endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LangQuery {
    /// `en` or `ja`; anything else yields the bilingual shape.
    pub lang: Option<String>,
}

impl LangQuery {
    /// Resolved language, if recognised.
    #[must_use]
    pub fn language(&self) -> Option<Language> {
        Language::from_query(self.lang.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Mission
// ---------------------------------------------------------------------------

/// Mission page with both translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MissionBilingual {
    pub title_en: String,
    pub title_ja: String,
    pub body_en: String,
    pub body_ja: String,
    pub hero_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Mission page in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MissionLocalized {
    pub title: String,
    pub body: String,
    pub hero_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// `GET /api/mission/` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum MissionView {
    Bilingual(MissionBilingual),
    Localized(MissionLocalized),
}

impl MissionView {
    /// Shape `page` for `language`.
    #[must_use]
    pub fn new(page: MissionPage, language: Option<Language>, media: &MediaUrls) -> Self {
        let hero_image = media.url_opt(page.hero_image.as_deref());
        match language {
            Some(lang) => Self::Localized(MissionLocalized {
                title: page.title.get(lang).clone(),
                body: page.body.get(lang).clone(),
                hero_image,
                updated_at: page.updated_at,
            }),
            None => Self::Bilingual(MissionBilingual {
                title_en: page.title.en,
                title_ja: page.title.ja,
                body_en: page.body.en,
                body_ja: page.body.ja,
                hero_image,
                updated_at: page.updated_at,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Cleaning service
// ---------------------------------------------------------------------------

/// Feature bullet with both translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FeatureBilingual {
    pub text_en: String,
    pub text_ja: String,
    #[schema(value_type = String, example = "primary")]
    pub color: FeatureColor,
}

/// Feature bullet in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FeatureLocalized {
    pub text: String,
    #[schema(value_type = String, example = "accent")]
    pub color: FeatureColor,
}

/// Captioned image; captions are always bilingual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ImageView {
    pub url: String,
    pub caption_en: String,
    pub caption_ja: String,
}

impl ImageView {
    fn new(path: &str, caption: Bilingual, media: &MediaUrls) -> Self {
        Self {
            url: media.url(path),
            caption_en: caption.en,
            caption_ja: caption.ja,
        }
    }

    fn from_gallery(image: GalleryImage, media: &MediaUrls) -> Self {
        Self::new(&image.path, image.caption, media)
    }

    fn from_event(image: EventImage, media: &MediaUrls) -> Self {
        Self::new(&image.path, image.caption, media)
    }
}

/// Cleaning page with both translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CleaningBilingual {
    pub title_en: String,
    pub title_ja: String,
    pub description_en: String,
    pub description_ja: String,
    pub cta_en: String,
    pub cta_ja: String,
    pub image: Option<String>,
    pub features: Vec<FeatureBilingual>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<ImageView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Cleaning page in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CleaningLocalized {
    pub title: String,
    pub description: String,
    pub cta: String,
    pub image: Option<String>,
    pub features: Vec<FeatureLocalized>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<ImageView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// `GET /api/cleaning-service/` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CleaningView {
    Bilingual(CleaningBilingual),
    Localized(CleaningLocalized),
}

impl CleaningView {
    /// Shape `page` for `language`.
    ///
    /// Feature text is the one field that borrows English when the
    /// Japanese side is blank.
    #[must_use]
    pub fn new(page: CleaningServicePage, language: Option<Language>, media: &MediaUrls) -> Self {
        let image = media.url_opt(page.image.as_deref());
        let gallery = page.gallery.map(|images| {
            images
                .into_iter()
                .map(|image| ImageView::from_gallery(image, media))
                .collect()
        });
        match language {
            Some(lang) => Self::Localized(CleaningLocalized {
                title: page.title.get(lang).clone(),
                description: page.description.get(lang).clone(),
                cta: page.cta.get(lang).clone(),
                image,
                features: page
                    .features
                    .iter()
                    .map(|feature| FeatureLocalized {
                        text: feature.text.get_or_english(lang).to_owned(),
                        color: feature.color,
                    })
                    .collect(),
                gallery,
                updated_at: page.updated_at,
            }),
            None => Self::Bilingual(CleaningBilingual {
                title_en: page.title.en,
                title_ja: page.title.ja,
                description_en: page.description.en,
                description_ja: page.description.ja,
                cta_en: page.cta.en,
                cta_ja: page.cta.ja,
                image,
                features: page
                    .features
                    .into_iter()
                    .map(|feature| FeatureBilingual {
                        text_en: feature.text.en,
                        text_ja: feature.text.ja,
                        color: feature.color,
                    })
                    .collect(),
                gallery,
                updated_at: page.updated_at,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Events page
// ---------------------------------------------------------------------------

/// Placeholder card with both translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PlaceholderBilingual {
    pub title_en: String,
    pub title_ja: String,
    pub description_en: String,
    pub description_ja: String,
    pub image: Option<String>,
    pub cta_label_en: String,
    pub cta_label_ja: String,
    pub cta_url: String,
}

/// Placeholder card in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PlaceholderLocalized {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub cta_label: String,
    pub cta_url: String,
}

/// Events page hero with both translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EventsPageBilingual {
    pub title_en: String,
    pub title_ja: String,
    pub subtitle_en: String,
    pub subtitle_ja: String,
    pub hero_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub placeholders: Vec<PlaceholderBilingual>,
}

/// Events page hero in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EventsPageLocalized {
    pub title: String,
    pub subtitle: String,
    pub hero_image: Option<String>,
    pub placeholders: Vec<PlaceholderLocalized>,
}

/// `GET /api/events-page/` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum EventsPageView {
    Bilingual(EventsPageBilingual),
    Localized(EventsPageLocalized),
}

fn localized_placeholder(
    placeholder: EventPlaceholder,
    lang: Language,
    media: &MediaUrls,
) -> PlaceholderLocalized {
    PlaceholderLocalized {
        title: placeholder.title.get(lang).clone(),
        description: placeholder.description.get(lang).clone(),
        image: media.url_opt(placeholder.image.as_deref()),
        cta_label: placeholder.cta_label.get(lang).clone(),
        cta_url: placeholder.cta_url,
    }
}

fn bilingual_placeholder(placeholder: EventPlaceholder, media: &MediaUrls) -> PlaceholderBilingual {
    PlaceholderBilingual {
        image: media.url_opt(placeholder.image.as_deref()),
        title_en: placeholder.title.en,
        title_ja: placeholder.title.ja,
        description_en: placeholder.description.en,
        description_ja: placeholder.description.ja,
        cta_label_en: placeholder.cta_label.en,
        cta_label_ja: placeholder.cta_label.ja,
        cta_url: placeholder.cta_url,
    }
}

impl EventsPageView {
    /// Shape `page` for `language`.
    #[must_use]
    pub fn new(page: EventsPageSettings, language: Option<Language>, media: &MediaUrls) -> Self {
        let hero_image = media.url_opt(page.hero_image.as_deref());
        match language {
            Some(lang) => Self::Localized(EventsPageLocalized {
                title: page.title.get(lang).clone(),
                subtitle: page.subtitle.get(lang).clone(),
                hero_image,
                placeholders: page
                    .placeholders
                    .into_iter()
                    .map(|p| localized_placeholder(p, lang, media))
                    .collect(),
            }),
            None => Self::Bilingual(EventsPageBilingual {
                title_en: page.title.en,
                title_ja: page.title.ja,
                subtitle_en: page.subtitle.en,
                subtitle_ja: page.subtitle.ja,
                hero_image,
                updated_at: page.updated_at,
                placeholders: page
                    .placeholders
                    .into_iter()
                    .map(|p| bilingual_placeholder(p, media))
                    .collect(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Fields every event item carries regardless of language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EventCommon {
    pub id: i64,
    pub start_datetime: DateTime<Utc>,
    pub location: String,
    /// `null` means unlimited.
    pub capacity: Option<u32>,
    /// `null` when capacity is unlimited.
    pub available_slots: Option<u32>,
    pub images: Vec<ImageView>,
}

/// Event item with both translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EventBilingual {
    #[serde(flatten)]
    pub common: EventCommon,
    pub title_en: String,
    pub title_ja: String,
    pub description_en: String,
    pub description_ja: String,
}

/// Event item in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EventLocalized {
    #[serde(flatten)]
    pub common: EventCommon,
    pub title: String,
    pub description: String,
}

/// One event as listed or fetched by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum EventView {
    Bilingual(EventBilingual),
    Localized(EventLocalized),
}

impl EventView {
    /// Shape `listing` for `language`.
    #[must_use]
    pub fn new(listing: EventListing, language: Option<Language>, media: &MediaUrls) -> Self {
        let available_slots = listing.available_slots();
        let event = listing.event;
        let common = EventCommon {
            id: event.id.get(),
            start_datetime: event.start_datetime,
            location: event.location,
            capacity: event.capacity,
            available_slots,
            images: event
                .images
                .into_iter()
                .map(|image| ImageView::from_event(image, media))
                .collect(),
        };
        match language {
            Some(lang) => Self::Localized(EventLocalized {
                common,
                title: event.title.get(lang).clone(),
                description: event.description.get(lang).clone(),
            }),
            None => Self::Bilingual(EventBilingual {
                common,
                title_en: event.title.en,
                title_ja: event.title.ja,
                description_en: event.description.en,
                description_ja: event.description.ja,
            }),
        }
    }

    /// Shape a whole page of listings.
    #[must_use]
    pub fn page(
        page: Page<EventListing>,
        language: Option<Language>,
        media: &MediaUrls,
    ) -> Page<Self> {
        page.map(|listing| Self::new(listing, language, media))
    }
}

/// OpenAPI schema for a page of events.
#[derive(ToSchema)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct EventPageSchema {
    results: Vec<EventView>,
    #[schema(example = 1)]
    page: u32,
    #[schema(example = 9)]
    page_size: u32,
    total: u64,
    total_pages: u32,
    has_next: bool,
    has_prev: bool,
}

// ---------------------------------------------------------------------------
// Volunteers
// ---------------------------------------------------------------------------

/// Active volunteer group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct VolunteerGroupView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub logo: Option<String>,
}

impl VolunteerGroupView {
    /// Shape `group`, resolving its logo URL.
    #[must_use]
    pub fn new(group: VolunteerGroup, media: &MediaUrls) -> Self {
        Self {
            logo: media.url_opt(group.logo.as_deref()),
            id: group.id,
            name: group.name,
            description: group.description,
        }
    }
}

/// The caller's place in a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MembershipView {
    pub group_id: i64,
    pub group_name: String,
    #[schema(value_type = String, example = "member")]
    pub role: crate::domain::VolunteerRole,
    pub added_at: DateTime<Utc>,
}

impl From<VolunteerMembership> for MembershipView {
    fn from(membership: VolunteerMembership) -> Self {
        Self {
            group_id: membership.group_id,
            group_name: membership.group_name,
            role: membership.role,
            added_at: membership.added_at,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Shape checks for the bilingual and single-language views.
    use chrono::TimeZone;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::{CleaningFeature, Event, EventId};

    #[fixture]
    fn media() -> MediaUrls {
        MediaUrls::new("/media/")
    }

    fn to_json(value: &impl Serialize) -> Value {
        serde_json::to_value(value).expect("view serialises")
    }

    #[rstest]
    fn builtin_mission_omits_updated_at(media: MediaUrls) {
        let view = MissionView::new(MissionPage::builtin(), None, &media);
        let value = to_json(&view);
        assert_eq!(value["title_en"], "House of Bijou");
        assert_eq!(value["hero_image"], Value::Null);
        assert!(value.get("updated_at").is_none());
        assert!(value.get("title").is_none());
    }

    #[rstest]
    #[case(Language::En, "House of Bijou celebrates the shared roots and solidarity between African/Black and Asian communities.")]
    #[case(Language::Ja, "House of Bijou は、アフリカン/ブラックとアジアのコミュニティのつながりと連帯を祝福します。")]
    fn localized_mission_drops_suffixes(
        media: MediaUrls,
        #[case] lang: Language,
        #[case] body: &str,
    ) {
        let value = to_json(&MissionView::new(MissionPage::builtin(), Some(lang), &media));
        assert_eq!(
            value,
            json!({"title": "House of Bijou", "body": body, "hero_image": null})
        );
    }

    #[rstest]
    fn japanese_feature_text_falls_back_to_english(media: MediaUrls) {
        let mut page = CleaningServicePage::builtin();
        page.features = vec![CleaningFeature {
            text: Bilingual::new("Full turnover", ""),
            color: FeatureColor::Primary,
        }];
        page.gallery = Some(Vec::new());
        let value = to_json(&CleaningView::new(page, Some(Language::Ja), &media));
        assert_eq!(
            value["features"],
            json!([{"text": "Full turnover", "color": "primary"}])
        );
        assert_eq!(value["gallery"], json!([]));
    }

    #[rstest]
    fn bilingual_feature_text_is_left_blank(media: MediaUrls) {
        let mut page = CleaningServicePage::builtin();
        page.features = vec![CleaningFeature {
            text: Bilingual::new("Full turnover", ""),
            color: FeatureColor::Accent,
        }];
        let value = to_json(&CleaningView::new(page, None, &media));
        assert_eq!(
            value["features"],
            json!([{"text_en": "Full turnover", "text_ja": "", "color": "accent"}])
        );
        assert!(value.get("gallery").is_none());
    }

    #[rstest]
    fn event_items_carry_slots_and_image_urls(media: MediaUrls) {
        let at = Utc.with_ymd_and_hms(2026, 11, 1, 9, 0, 0).unwrap();
        let listing = EventListing {
            event: Event {
                id: EventId::new(5),
                title: Bilingual::new("Beach Cleanup", "ビーチの清掃"),
                description: Bilingual::new("Bring gloves", "手袋持参"),
                start_datetime: at,
                location: "Lake Biwa".into(),
                capacity: Some(10),
                images: vec![EventImage {
                    path: "events/beach.jpg".into(),
                    caption: Bilingual::new("Shore", "岸"),
                }],
                created_at: at,
                updated_at: at,
            },
            registration_count: 7,
        };
        let value = to_json(&EventView::new(listing, Some(Language::Ja), &media));
        assert_eq!(value["id"], 5);
        assert_eq!(value["title"], "ビーチの清掃");
        assert_eq!(value["available_slots"], 3);
        assert_eq!(
            value["images"],
            json!([{"url": "/media/events/beach.jpg", "caption_en": "Shore", "caption_ja": "岸"}])
        );
        assert!(value.get("title_en").is_none());
    }

    #[rstest]
    fn localized_events_page_has_no_updated_at(media: MediaUrls) {
        let mut page = EventsPageSettings::builtin();
        page.updated_at = Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        let value = to_json(&EventsPageView::new(page, Some(Language::En), &media));
        assert_eq!(value["title"], "Upcoming Events");
        assert!(value.get("updated_at").is_none());
        assert_eq!(value["placeholders"], json!([]));
    }
}
