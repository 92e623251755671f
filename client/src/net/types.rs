//! Shared wire DTOs for the contact form.
//!
//! DESIGN
//! ======
//! The server deserializes the same `ContactSubmission` the form posts and
//! runs the same `validate()`, so the browser check is a convenience and the
//! server check is authoritative.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_MESSAGE_LEN: usize = 5000;

/// A project inquiry from the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    /// Project description. Older forms post this as `description`.
    #[serde(alias = "description")]
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please tell us a little about your project.")]
    MissingMessage,
    #[error("{field} is too long (max {max} characters).")]
    TooLong { field: &'static str, max: usize },
}

impl ContactSubmission {
    /// Trim every field and check required fields and email shape.
    ///
    /// # Errors
    ///
    /// Returns the first failing check, in field order.
    pub fn validate(&self) -> Result<Self, ContactValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err(ContactValidationError::MissingName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ContactValidationError::TooLong { field: "Name", max: MAX_NAME_LEN });
        }
        if email.is_empty() {
            return Err(ContactValidationError::MissingEmail);
        }
        if email.len() > MAX_EMAIL_LEN {
            return Err(ContactValidationError::TooLong { field: "Email", max: MAX_EMAIL_LEN });
        }
        if !is_plausible_email(email) {
            return Err(ContactValidationError::InvalidEmail);
        }
        if message.is_empty() {
            return Err(ContactValidationError::MissingMessage);
        }
        if message.chars().count() > MAX_MESSAGE_LEN {
            return Err(ContactValidationError::TooLong { field: "Project description", max: MAX_MESSAGE_LEN });
        }

        Ok(Self { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
    }
}

/// `local@domain.tld` with no whitespace. Deliverability is the mail relay's problem.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Body returned by `POST /api/contact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    #[must_use]
    pub fn sent() -> Self {
        Self { success: true, error: None }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, error: Some(error.into()) }
    }
}
