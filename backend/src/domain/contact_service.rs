//! Contact form intake.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::ports::{ContactNotifier, ContactRepository, ContactRepositoryError};
use crate::domain::{ContactMessage, Error, NewContactMessage};

/// Stores contact submissions and notifies editors.
#[derive(Clone)]
pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
    notifier: Arc<dyn ContactNotifier>,
}

impl ContactService {
    /// Create a service from its collaborators.
    pub fn new(repository: Arc<dyn ContactRepository>, notifier: Arc<dyn ContactNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    fn map_repository_error(error: ContactRepositoryError) -> Error {
        match error {
            ContactRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("contact repository unavailable: {message}"))
            }
            ContactRepositoryError::Query { message } => {
                Error::internal(format!("contact repository error: {message}"))
            }
        }
    }

    /// Persist `message`, then notify. Notification failures are logged only.
    pub async fn submit(&self, message: &NewContactMessage) -> Result<ContactMessage, Error> {
        let stored = self
            .repository
            .store(message)
            .await
            .map_err(Self::map_repository_error)?;
        info!(contact_id = stored.id, "contact message stored");
        if let Err(err) = self.notifier.notify(&stored).await {
            warn!(contact_id = stored.id, error = %err, "contact notification failed");
        }
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::ports::{ContactNotifierError, MockContactNotifier, MockContactRepository};

    fn submission() -> NewContactMessage {
        NewContactMessage::try_from_parts("Amy", "a@x.com", "Hello").expect("valid message")
    }

    fn stored_repo() -> MockContactRepository {
        let mut repo = MockContactRepository::new();
        repo.expect_store().times(1).return_once(|message| {
            Ok(ContactMessage {
                id: 1,
                name: message.name().to_owned(),
                email: message.email().to_owned(),
                message: message.message().to_owned(),
                sent_at: Utc::now(),
            })
        });
        repo
    }

    #[tokio::test]
    async fn submission_survives_notifier_failure() {
        let mut notifier = MockContactNotifier::new();
        notifier
            .expect_notify()
            .times(1)
            .return_once(|_| Err(ContactNotifierError::delivery("smtp down")));

        let stored = ContactService::new(Arc::new(stored_repo()), Arc::new(notifier))
            .submit(&submission())
            .await
            .expect("submission stored");
        assert_eq!(stored.name, "Amy");
    }

    #[tokio::test]
    async fn notifier_is_skipped_when_store_fails() {
        let mut repo = MockContactRepository::new();
        repo.expect_store()
            .return_once(|_| Err(ContactRepositoryError::connection("refused")));
        let mut notifier = MockContactNotifier::new();
        notifier.expect_notify().never();

        let result = ContactService::new(Arc::new(repo), Arc::new(notifier))
            .submit(&submission())
            .await;
        assert!(result.is_err());
    }
}
