//! Contact form submissions.

use chrono::{DateTime, Utc};

/// Returned when a contact submission is missing a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Name, email and message are required.")]
pub struct ContactValidationError;

/// Validated, not yet stored, contact submission.
///
/// ## Invariants
/// - every field is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    name: String,
    email: String,
    message: String,
}

impl NewContactMessage {
    /// Validate raw form fields.
    ///
    /// ```
    /// use bijou_backend::domain::NewContactMessage;
    ///
    /// let msg = NewContactMessage::try_from_parts(" Amy ", "a@x.com", "Hi!").expect("valid");
    /// assert_eq!(msg.name(), "Amy");
    /// assert!(NewContactMessage::try_from_parts("Amy", "", "Hi!").is_err());
    /// ```
    pub fn try_from_parts(
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<Self, ContactValidationError> {
        let (name, email, message) = (name.trim(), email.trim(), message.trim());
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactValidationError);
        }
        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        })
    }

    /// Sender name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sender address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A stored contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    /// Storage identity.
    pub id: i64,
    /// Sender name.
    pub name: String,
    /// Sender address.
    pub email: String,
    /// Message body.
    pub message: String,
    /// When the message was received.
    pub sent_at: DateTime<Utc>,
}
