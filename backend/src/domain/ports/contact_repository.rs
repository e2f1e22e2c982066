//! Ports persisting contact submissions and notifying editors.

use async_trait::async_trait;

use crate::domain::{ContactMessage, NewContactMessage};

use super::define_port_error;

define_port_error! {
    /// Errors raised by contact repository adapters.
    pub enum ContactRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "contact repository connection failed: {message}",
        /// Insert failed during execution.
        Query { message: String } => "contact repository query failed: {message}",
    }
}

define_port_error! {
    /// Errors raised by contact notifiers.
    pub enum ContactNotifierError {
        /// Delivery failed.
        Delivery { message: String } => "contact notification failed: {message}",
    }
}

/// Storage for contact submissions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Store a submission, returning the stored record.
    async fn store(
        &self,
        message: &NewContactMessage,
    ) -> Result<ContactMessage, ContactRepositoryError>;
}

/// Outbound notification for stored submissions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    /// Tell editors a submission arrived.
    async fn notify(&self, message: &ContactMessage) -> Result<(), ContactNotifierError>;
}
