//! Port reading UI translation rows and site text settings.

use async_trait::async_trait;

use crate::domain::{SiteText, TranslationEntry};

use super::define_port_error;

define_port_error! {
    /// Errors raised by translation repository adapters.
    pub enum TranslationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "translation repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "translation repository query failed: {message}",
    }
}

/// Read access to translations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// All rows for `(language, namespace)`.
    async fn entries(
        &self,
        language: &str,
        namespace: &str,
    ) -> Result<Vec<TranslationEntry>, TranslationRepositoryError>;

    /// The current site text settings, first record wins.
    async fn site_text(&self) -> Result<Option<SiteText>, TranslationRepositoryError>;
}
