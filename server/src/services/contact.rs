//! Contact relay: turns a validated inquiry into an email to the studio.
//!
//! DESIGN
//! ======
//! Delivery sits behind the [`ContactMailer`] trait so route handlers can be
//! tested with a recording mock. [`ResendMailer`] is the production
//! implementation; the submitter's address becomes the reply-to so the studio
//! answers the visitor directly.

use client::net::types::ContactSubmission;
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use crate::config::MailConfig;

const CONTACT_EMAIL_TEMPLATE: &str = include_str!("../../templates/contact_email.html");

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// Sends one inquiry. Implementations must be shareable across requests.
#[async_trait::async_trait]
pub trait ContactMailer: Send + Sync {
    /// Deliver `submission`, already validated.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Delivery`] when the provider rejects the send.
    async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactError>;
}

/// [`ContactMailer`] backed by the Resend API.
pub struct ResendMailer {
    resend: Resend,
    from: String,
    to: Vec<String>,
}

impl ResendMailer {
    #[must_use]
    pub fn new(config: &MailConfig) -> Self {
        Self { resend: Resend::new(&config.api_key), from: config.from.clone(), to: config.to.clone() }
    }
}

#[async_trait::async_trait]
impl ContactMailer for ResendMailer {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        let subject = inquiry_subject(&submission.name);
        let html = render_contact_template(submission);

        let email = CreateEmailBaseOptions::new(&self.from, &self.to, &subject)
            .with_html(&html)
            .with_reply(&submission.email);
        self.resend
            .emails
            .send(email)
            .await
            .map_err(|e| ContactError::Delivery(e.to_string()))?;
        Ok(())
    }
}

/// Subject line for an inquiry. Line breaks are flattened so a crafted name
/// cannot inject headers.
#[must_use]
pub fn inquiry_subject(name: &str) -> String {
    let flat: String = name.chars().map(|c| if c.is_control() { ' ' } else { c }).collect();
    format!("New Project Inquiry from {}", flat.trim())
}

#[must_use]
pub fn render_contact_template(submission: &ContactSubmission) -> String {
    CONTACT_EMAIL_TEMPLATE
        .replace("{{NAME}}", &escape_html(&submission.name))
        .replace("{{EMAIL}}", &escape_html(&submission.email))
        .replace("{{MESSAGE}}", &escape_html(&submission.message))
}

#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
