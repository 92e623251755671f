//! Contact relay endpoint.
//!
//! `POST /api/contact` validates the inquiry, applies rate limits, and hands
//! it to the configured mailer. Every response body is a `ContactResponse`.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use client::net::types::{ContactResponse, ContactSubmission};

use crate::rate_limit::{RateLimitError, client_key};
use crate::state::AppState;

pub const NOT_CONFIGURED_MESSAGE: &str = "Contact form is not configured. Please reach us on WhatsApp.";
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send email";
pub const RATE_LIMITED_MESSAGE: &str = "Too many requests. Please try again later.";
pub const MALFORMED_MESSAGE: &str = "Invalid request body.";

type Reply = (StatusCode, Json<ContactResponse>);

fn reply(status: StatusCode, body: ContactResponse) -> Reply {
    (status, Json(body))
}

/// `POST /api/contact`
///
/// 200 on delivery; 400 for a malformed or invalid inquiry; 429 when rate
/// limited; 503 without a mailer; 502 when the mail provider fails.
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ContactSubmission>, JsonRejection>,
) -> Reply {
    let Json(submission) = match body {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(error = %e, "contact: malformed body");
            return reply(StatusCode::BAD_REQUEST, ContactResponse::failed(MALFORMED_MESSAGE));
        }
    };

    let submission = match submission.validate() {
        Ok(clean) => clean,
        Err(e) => return reply(StatusCode::BAD_REQUEST, ContactResponse::failed(e.to_string())),
    };

    let Some(mailer) = state.mailer.as_ref() else {
        tracing::warn!("contact: inquiry received but RESEND_API_KEY is not configured");
        return reply(StatusCode::SERVICE_UNAVAILABLE, ContactResponse::failed(NOT_CONFIGURED_MESSAGE));
    };

    let client = client_key(&headers);
    if let Err(e) = state.rate_limiter.check_and_record(&client) {
        let scope = match e {
            RateLimitError::PerClientExceeded { .. } => "client",
            RateLimitError::GlobalExceeded { .. } => "global",
        };
        tracing::warn!(%client, scope, error = %e, "contact: rate limited");
        return reply(StatusCode::TOO_MANY_REQUESTS, ContactResponse::failed(RATE_LIMITED_MESSAGE));
    }

    match mailer.send(&submission).await {
        Ok(()) => {
            tracing::info!(%client, name = %submission.name, "contact: inquiry delivered");
            reply(StatusCode::OK, ContactResponse::sent())
        }
        Err(e) => {
            tracing::error!(%client, error = %e, "contact: delivery failed");
            reply(StatusCode::BAD_GATEWAY, ContactResponse::failed(DELIVERY_FAILED_MESSAGE))
        }
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
