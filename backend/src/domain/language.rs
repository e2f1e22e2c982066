//! Language selection for bilingual content.
//!
//! Every piece of translatable content is stored as an English/Japanese
//! pair. Requests pick one language through a `lang` query parameter; when
//! it is absent or unrecognised the caller receives both translations.
//! Fallback between languages is never implicit: call sites that want the
//! Japanese side to borrow the English text use
//! [`Bilingual::get_or_english`] explicitly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported content languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Japanese.
    Ja,
}

/// Returned when a language code is not one of `en` or `ja`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code: {0}")]
pub struct UnsupportedLanguage(pub String);

impl Language {
    /// Wire code of the language.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    /// Resolve an optional `lang` query value.
    ///
    /// Codes are matched exactly; anything else selects the bilingual view.
    ///
    /// ```
    /// use bijou_backend::domain::Language;
    ///
    /// assert_eq!(Language::from_query(Some("ja")), Some(Language::Ja));
    /// assert_eq!(Language::from_query(Some("JA")), None);
    /// assert_eq!(Language::from_query(None), None);
    /// ```
    #[must_use]
    pub fn from_query(code: Option<&str>) -> Option<Self> {
        code.and_then(|value| value.parse().ok())
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "ja" => Ok(Self::Ja),
            other => Err(UnsupportedLanguage(other.to_owned())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An English/Japanese pair of values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual<T = String> {
    /// English value.
    pub en: T,
    /// Japanese value.
    pub ja: T,
}

impl<T> Bilingual<T> {
    /// Pair two translations.
    pub fn new(en: impl Into<T>, ja: impl Into<T>) -> Self {
        Self {
            en: en.into(),
            ja: ja.into(),
        }
    }

    /// Borrow the value for `language`.
    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::En => &self.en,
            Language::Ja => &self.ja,
        }
    }
}

impl Bilingual<String> {
    /// Borrow the value for `language`, substituting English when the
    /// Japanese side is blank.
    ///
    /// ```
    /// use bijou_backend::domain::{Bilingual, Language};
    ///
    /// let text: Bilingual = Bilingual::new("Full turnover", " ");
    /// assert_eq!(text.get_or_english(Language::Ja), "Full turnover");
    /// ```
    #[must_use]
    pub fn get_or_english(&self, language: Language) -> &str {
        match language {
            Language::Ja if self.ja.trim().is_empty() => &self.en,
            other => self.get(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("en"), Some(Language::En))]
    #[case(Some("ja"), Some(Language::Ja))]
    #[case(Some("fr"), None)]
    #[case(Some(""), None)]
    #[case(Some(" en"), None)]
    #[case(None, None)]
    fn from_query_matches_exact_codes(#[case] raw: Option<&str>, #[case] expected: Option<Language>) {
        assert_eq!(Language::from_query(raw), expected);
    }

    #[rstest]
    fn get_selects_side() {
        let pair: Bilingual = Bilingual::new("Hello", "こんにちは");
        assert_eq!(pair.get(Language::En), "Hello");
        assert_eq!(pair.get(Language::Ja), "こんにちは");
    }

    #[rstest]
    #[case("Full turnover", "", Language::Ja, "Full turnover")]
    #[case("Full turnover", "フルターン", Language::Ja, "フルターン")]
    #[case("", "フルターン", Language::En, "")]
    fn fallback_only_borrows_english_for_japanese(
        #[case] en: &str,
        #[case] ja: &str,
        #[case] language: Language,
        #[case] expected: &str,
    ) {
        let pair: Bilingual = Bilingual::new(en, ja);
        assert_eq!(pair.get_or_english(language), expected);
    }

    #[rstest]
    fn unsupported_code_reports_value() {
        let err = "de".parse::<Language>().expect_err("unsupported");
        assert_eq!(err.to_string(), "unsupported language code: de");
    }
}
