//! Translation bundle assembly.

use std::sync::Arc;

use crate::domain::ports::{TranslationRepository, TranslationRepositoryError};
use crate::domain::{Error, TranslationBundle};

/// Builds merged and single-namespace translation bundles.
#[derive(Clone)]
pub struct TranslationService {
    repository: Arc<dyn TranslationRepository>,
}

impl TranslationService {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<dyn TranslationRepository>) -> Self {
        Self { repository }
    }

    fn map_repository_error(error: TranslationRepositoryError) -> Error {
        match error {
            TranslationRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("translation repository unavailable: {message}"))
            }
            TranslationRepositoryError::Query { message } => {
                Error::internal(format!("translation repository error: {message}"))
            }
        }
    }

    /// Merge `namespaces` in order, later ones winning, then apply the site
    /// text labels on top.
    ///
    /// The validator of the result reflects translation rows only.
    pub async fn merged(
        &self,
        language: &str,
        namespaces: &[String],
    ) -> Result<TranslationBundle, Error> {
        let mut bundle = TranslationBundle::new();
        for namespace in namespaces {
            let rows = self
                .repository
                .entries(language, namespace)
                .await
                .map_err(Self::map_repository_error)?;
            bundle.merge_rows(&rows);
        }
        if let Some(site_text) = self
            .repository
            .site_text()
            .await
            .map_err(Self::map_repository_error)?
        {
            bundle.overlay_site_text(&site_text, language);
        }
        Ok(bundle)
    }

    /// Rows of a single namespace, without the site text overlay.
    pub async fn namespace(
        &self,
        language: &str,
        namespace: &str,
    ) -> Result<TranslationBundle, Error> {
        let rows = self
            .repository
            .entries(language, namespace)
            .await
            .map_err(Self::map_repository_error)?;
        let mut bundle = TranslationBundle::new();
        bundle.merge_rows(&rows);
        Ok(bundle)
    }
}
