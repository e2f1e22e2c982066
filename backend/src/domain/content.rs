//! Singleton page documents and their ordered children.
//!
//! Each page is "first record wins": the store may hold several revisions
//! and the repository returns the first by identity. When nothing is
//! stored the services fall back to the built-in defaults defined here,
//! which intentionally carry no `updated_at` and no gallery.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Bilingual;

/// Mission statement shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionPage {
    /// Title pair.
    pub title: Bilingual,
    /// Body pair.
    pub body: Bilingual,
    /// Stored hero image path, if any.
    pub hero_image: Option<String>,
    /// Last modification; `None` for the built-in default.
    pub updated_at: Option<DateTime<Utc>>,
}

impl MissionPage {
    /// Built-in content used until an editor stores a mission page.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            title: Bilingual::new("House of Bijou", "House of Bijou"),
            body: Bilingual::new(
                "House of Bijou celebrates the shared roots and solidarity between African/Black and Asian communities.",
                "House of Bijou は、アフリカン/ブラックとアジアのコミュニティのつながりと連帯を祝福します。",
            ),
            hero_image: None,
            updated_at: None,
        }
    }
}

/// Brand colour of a feature bullet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureColor {
    /// Magenta/rose.
    #[default]
    Primary,
    /// Gold.
    Accent,
    /// Teal.
    Secondary,
}

impl FeatureColor {
    /// Parse a stored colour; blank or unknown values become `Primary`.
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        match raw {
            "accent" => Self::Accent,
            "secondary" => Self::Secondary,
            _ => Self::Primary,
        }
    }

    /// Stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Accent => "accent",
            Self::Secondary => "secondary",
        }
    }
}

/// Feature bullet on the cleaning service page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleaningFeature {
    /// Bullet text; the Japanese side may be blank.
    pub text: Bilingual,
    /// Bullet dot colour.
    pub color: FeatureColor,
}

/// Captioned gallery image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    /// Stored media path.
    pub path: String,
    /// Caption pair.
    pub caption: Bilingual,
}

/// Maximum number of gallery images published with the cleaning page.
pub const CLEANING_GALLERY_LIMIT: usize = 3;

/// Cleaning service page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleaningServicePage {
    /// Title pair.
    pub title: Bilingual,
    /// Description pair.
    pub description: Bilingual,
    /// Call-to-action pair.
    pub cta: Bilingual,
    /// Stored image path, if any.
    pub image: Option<String>,
    /// Feature bullets ordered by `(order, id)`.
    pub features: Vec<CleaningFeature>,
    /// Gallery ordered by `(order, id)`; `None` for the built-in default.
    pub gallery: Option<Vec<GalleryImage>>,
    /// Last modification; `None` for the built-in default.
    pub updated_at: Option<DateTime<Utc>>,
}

impl CleaningServicePage {
    /// Built-in content used until an editor stores a cleaning page.
    #[must_use]
    pub fn builtin() -> Self {
        let feature = |en: &str, ja: &str, color| CleaningFeature {
            text: Bilingual::new(en, ja),
            color,
        };
        Self {
            title: Bilingual::new("Airbnb Cleaning", "清掃サービス"),
            description: Bilingual::new(
                "Professional, reliable short-stay cleaning by members of the house. Flexible scheduling and hotel-standard turnover.",
                "コミュニティメンバーによる信頼できる清掃。柔軟なスケジュールとホテル品質の仕上がり。",
            ),
            cta: Bilingual::new(
                "Tell us your schedule and property details — we’ll get back with a quote.",
                "日程と物件情報をお知らせください。お見積もりをご連絡します。",
            ),
            image: None,
            features: vec![
                feature(
                    "Full turnover: linens, bathroom, kitchen, reset staging",
                    "フルターン：リネン、バスルーム、キッチン、ステージング復元",
                    FeatureColor::Primary,
                ),
                feature(
                    "Restock consumables and basic supplies",
                    "消耗品・基本備品の補充",
                    FeatureColor::Accent,
                ),
                feature(
                    "Flexible scheduling and quick response",
                    "柔軟なスケジュールと迅速対応",
                    FeatureColor::Secondary,
                ),
                feature(
                    "Photo reporting on completion (optional)",
                    "写真レポート（任意）",
                    FeatureColor::Primary,
                ),
            ],
            gallery: None,
            updated_at: None,
        }
    }

    /// Keep at most [`CLEANING_GALLERY_LIMIT`] gallery images.
    #[must_use]
    pub fn with_published_gallery(mut self) -> Self {
        if let Some(gallery) = self.gallery.as_mut() {
            gallery.truncate(CLEANING_GALLERY_LIMIT);
        }
        self
    }
}

/// Placeholder card shown on the events page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPlaceholder {
    /// Title pair.
    pub title: Bilingual,
    /// Description pair.
    pub description: Bilingual,
    /// Stored image path, if any.
    pub image: Option<String>,
    /// Call-to-action label pair.
    pub cta_label: Bilingual,
    /// Call-to-action target.
    pub cta_url: String,
}

/// Hero settings for the events listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsPageSettings {
    /// Title pair.
    pub title: Bilingual,
    /// Subtitle pair.
    pub subtitle: Bilingual,
    /// Stored hero image path, if any.
    pub hero_image: Option<String>,
    /// Active placeholders ordered by `(order, id)`.
    pub placeholders: Vec<EventPlaceholder>,
    /// Last modification; `None` for the built-in default.
    pub updated_at: Option<DateTime<Utc>>,
}

impl EventsPageSettings {
    /// Built-in content used until an editor stores events page settings.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            title: Bilingual::new("Upcoming Events", "イベント情報"),
            subtitle: Bilingual::new(
                "Join community gatherings, volunteer days, and workshops. New dates drop regularly — check back soon!",
                "コミュニティイベント、ボランティア、ワークショップなど。最新情報をお見逃しなく！",
            ),
            hero_image: None,
            placeholders: Vec::new(),
            updated_at: None,
        }
    }
}
