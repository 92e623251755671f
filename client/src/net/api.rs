//! REST helper for the contact relay.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning an error since the form only submits
//! from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as user-facing strings; the form shows them inline and
//! keeps the typed fields so the visitor can retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ContactSubmission;
#[cfg(feature = "hydrate")]
use super::types::ContactResponse;

#[cfg(any(test, feature = "hydrate"))]
const CONTACT_ENDPOINT: &str = "/api/contact";

#[cfg(any(test, feature = "hydrate"))]
const NETWORK_FAILED_MESSAGE: &str = "Failed to connect to the server. Please check your connection and try again.";

#[cfg(any(test, feature = "hydrate"))]
fn contact_failed_message(status: u16, server_error: Option<&str>) -> String {
    match status {
        404 => "The email system is not reachable right now (404). Please reach us on WhatsApp instead.".to_owned(),
        429 => "Too many messages sent. Please wait a few minutes and try again.".to_owned(),
        _ => match server_error.map(str::trim).filter(|e| !e.is_empty()) {
            Some(error) => format!("Failed to send message: {error}"),
            None => format!("Server error ({status}). Please try again later."),
        },
    }
}

/// Post a project inquiry to `/api/contact`.
///
/// # Errors
///
/// Returns a message suitable for display when the request cannot be sent or
/// the server rejects it.
pub async fn submit_contact(submission: &ContactSubmission) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(submission)
            .map_err(|e| e.to_string())?;
        let resp = request.send().await.map_err(|e| {
            log::warn!("contact: request failed: {e}");
            NETWORK_FAILED_MESSAGE.to_owned()
        })?;
        if resp.ok() {
            log::info!("contact: inquiry sent");
            return Ok(());
        }
        let status = resp.status();
        let body = resp.json::<ContactResponse>().await.ok();
        log::warn!("contact: server rejected inquiry with status {status}");
        Err(contact_failed_message(status, body.as_ref().and_then(|b| b.error.as_deref())))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
        Err("contact form is only available in the browser".to_owned())
    }
}
