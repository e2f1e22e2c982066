//! UI string translations grouped by namespace.
//!
//! Rows are keyed by `(namespace, key, language)`. Bundles merge one or
//! more namespaces into a flat `key -> text` mapping and carry a weak
//! validator derived from the newest contributing row, so clients can
//! revalidate cached bundles cheaply.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::{Bilingual, Language};

/// Namespace used when a request names none.
pub const DEFAULT_NAMESPACE: &str = "common";

/// One stored translation row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    /// Namespace grouping the key.
    pub namespace: String,
    /// Lookup key used by the frontend.
    pub key: String,
    /// Language tag of the row.
    pub language: String,
    /// Display text.
    pub text: String,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Parse the comma-separated `ns` query value.
///
/// Entries are trimmed and empty entries dropped; order is preserved
/// because later namespaces override earlier ones.
///
/// ```
/// use bijou_backend::domain::parse_namespaces;
///
/// assert_eq!(parse_namespaces(None), vec!["common"]);
/// assert_eq!(parse_namespaces(Some(" common, ,home ")), vec!["common", "home"]);
/// assert!(parse_namespaces(Some(",")).is_empty());
/// ```
#[must_use]
pub fn parse_namespaces(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or(DEFAULT_NAMESPACE)
        .split(',')
        .map(str::trim)
        .filter(|ns| !ns.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Editor-managed navigation and call-to-action labels.
///
/// Overlaid onto merged bundles after namespace data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteText {
    /// "Home" navigation label.
    pub home_label: Bilingual,
    /// "Events" navigation label.
    pub events_label: Bilingual,
    /// "Cleaning Service" navigation label.
    pub cleaning_label: Bilingual,
    /// Short form of the cleaning label.
    pub cleaning_short: Bilingual,
    /// Login button.
    pub login: Bilingual,
    /// Register button.
    pub register: Bilingual,
    /// Logout button.
    pub logout: Bilingual,
    /// "Browse events" call to action.
    pub browse_events: Bilingual,
    /// "Learn more" call to action.
    pub learn_more: Bilingual,
    /// Instagram profile link, identical in both languages.
    pub instagram_url: String,
}

impl SiteText {
    /// Key/value pairs to overlay for the requested language tag.
    ///
    /// Japanese values are used only for `ja`; every other tag gets English.
    #[must_use]
    pub fn overlay(&self, language: &str) -> [(&'static str, &str); 10] {
        let lang = match Language::from_query(Some(language)) {
            Some(Language::Ja) => Language::Ja,
            _ => Language::En,
        };
        [
            ("home", self.home_label.get(lang).as_str()),
            ("events", self.events_label.get(lang).as_str()),
            ("cleaning", self.cleaning_label.get(lang).as_str()),
            ("cleaning_short", self.cleaning_short.get(lang).as_str()),
            ("login", self.login.get(lang).as_str()),
            ("register", self.register.get(lang).as_str()),
            ("logout", self.logout.get(lang).as_str()),
            ("browse_events", self.browse_events.get(lang).as_str()),
            ("learn_more", self.learn_more.get(lang).as_str()),
            ("instagram_url", self.instagram_url.as_str()),
        ]
    }
}

/// Flat translation mapping plus its cache validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationBundle {
    entries: BTreeMap<String, String>,
    latest: Option<DateTime<Utc>>,
}

impl TranslationBundle {
    /// Empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge rows, overriding existing keys and tracking the newest timestamp.
    pub fn merge_rows<'a>(&mut self, rows: impl IntoIterator<Item = &'a TranslationEntry>) {
        for row in rows {
            self.entries.insert(row.key.clone(), row.text.clone());
            self.latest = Some(
                self.latest
                    .map_or(row.updated_at, |latest| latest.max(row.updated_at)),
            );
        }
    }

    /// Overlay site text labels; they do not affect the validator.
    pub fn overlay_site_text(&mut self, site_text: &SiteText, language: &str) {
        for (key, value) in site_text.overlay(language) {
            self.entries.insert(key.to_owned(), value.to_owned());
        }
    }

    /// Merged `key -> text` mapping.
    #[must_use]
    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Consume the bundle, returning the mapping.
    #[must_use]
    pub fn into_entries(self) -> BTreeMap<String, String> {
        self.entries
    }

    /// Newest `updated_at` among merged rows.
    #[must_use]
    pub fn latest_update(&self) -> Option<DateTime<Utc>> {
        self.latest
    }

    /// Weak validator for a merged bundle: `W/"i18n-{lang}-{seconds}"`.
    #[must_use]
    pub fn merged_validator(&self, language: &str) -> Option<String> {
        self.latest
            .map(|ts| format!("W/\"i18n-{language}-{}\"", ts.timestamp()))
    }

    /// Weak validator for a single namespace:
    /// `W/"i18n-{lang}-{namespace}-{seconds}"`.
    #[must_use]
    pub fn namespace_validator(&self, language: &str, namespace: &str) -> Option<String> {
        self.latest
            .map(|ts| format!("W/\"i18n-{language}-{namespace}-{}\"", ts.timestamp()))
    }
}
