//! Contact notification adapters.

use async_trait::async_trait;
use tracing::info;

use crate::domain::ContactMessage;
use crate::domain::ports::{ContactNotifier, ContactNotifierError};

/// Notifier that records submissions in the structured log.
///
/// Stands in for a mail integration: editors watch the log stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogContactNotifier;

#[async_trait]
impl ContactNotifier for LogContactNotifier {
    async fn notify(&self, message: &ContactMessage) -> Result<(), ContactNotifierError> {
        info!(
            contact_id = message.id,
            name = %message.name,
            email = %message.email,
            sent_at = %message.sent_at,
            "new contact message"
        );
        Ok(())
    }
}
