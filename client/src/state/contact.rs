//! Contact form state machine.
//!
//! `Idle -> Submitting -> Success | Failed(reason)`. Validation failures go
//! straight to `Failed` without a request. Success clears the fields; failure
//! keeps them so the visitor can retry, and every retry is a fresh POST.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::types::ContactSubmission;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default)]
pub struct ContactFormState {
    pub fields: ContactSubmission,
    pub status: SubmitStatus,
}

impl ContactFormState {
    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.fields.name = value,
            ContactField::Email => self.fields.email = value,
            ContactField::Message => self.fields.message = value,
        }
        if matches!(self.status, SubmitStatus::Failed(_)) {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Validate and move to `Submitting`. Returns the cleaned submission to
    /// post, or `None` when nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.status == SubmitStatus::Submitting {
            return None;
        }
        match self.fields.validate() {
            Ok(clean) => {
                self.status = SubmitStatus::Submitting;
                Some(clean)
            }
            Err(e) => {
                self.status = SubmitStatus::Failed(e.to_string());
                None
            }
        }
    }

    /// Record the relay's answer. Ignored unless a submit is in flight.
    pub fn finish_submit(&mut self, result: Result<(), String>) {
        if self.status != SubmitStatus::Submitting {
            return;
        }
        self.status = match result {
            Ok(()) => {
                self.fields = ContactSubmission::default();
                SubmitStatus::Success
            }
            Err(reason) => SubmitStatus::Failed(reason),
        };
    }

    /// "Send another message": back to an empty, idle form.
    pub fn reset(&mut self) {
        if self.status != SubmitStatus::Submitting {
            self.status = SubmitStatus::Idle;
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}
