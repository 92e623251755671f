use std::sync::{Arc, Mutex};

use super::*;
use crate::config::RateLimitConfig;
use crate::services::contact::{ContactError, ContactMailer};

// =========================================================================
// MockMailer
// =========================================================================

#[derive(Default)]
struct MockMailer {
    sent: Mutex<Vec<ContactSubmission>>,
    fail_with: Option<String>,
}

impl MockMailer {
    fn failing(reason: &str) -> Self {
        Self { sent: Mutex::new(Vec::new()), fail_with: Some(reason.to_owned()) }
    }

    fn sent(&self) -> Vec<ContactSubmission> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ContactMailer for MockMailer {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        if let Some(reason) = &self.fail_with {
            return Err(ContactError::Delivery(reason.clone()));
        }
        self.sent.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

fn state_with(mailer: &Arc<MockMailer>, per_client_limit: usize) -> AppState {
    let limits = RateLimitConfig { per_client_limit, ..RateLimitConfig::default() };
    AppState::new(Some(mailer.clone() as Arc<dyn ContactMailer>), limits)
}

fn inquiry() -> Json<ContactSubmission> {
    Json(ContactSubmission {
        name: " Asha ".into(),
        email: "asha@example.com".into(),
        message: "A site for my salon".into(),
    })
}

fn from_ip(ip: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", ip.parse().unwrap());
    headers
}

// =========================================================================
// submit
// =========================================================================

#[tokio::test]
async fn valid_inquiry_is_delivered() {
    let mailer = Arc::new(MockMailer::default());
    let (status, Json(body)) = submit(State(state_with(&mailer, 5)), from_ip("1.1.1.1"), Ok(inquiry())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, ContactResponse::sent());
    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].name, "Asha", "fields are trimmed before delivery");
}

#[tokio::test]
async fn invalid_inquiry_is_rejected_without_sending() {
    let mailer = Arc::new(MockMailer::default());
    let bad = Json(ContactSubmission { name: "Asha".into(), email: "not-an-email".into(), message: "hi".into() });
    let (status, Json(body)) = submit(State(state_with(&mailer, 5)), HeaderMap::new(), Ok(bad)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error.as_deref(), Some("Please enter a valid email address."));
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let mailer = Arc::new(MockMailer::default());
    let body = Json::<ContactSubmission>::from_bytes(b"{\"name\":");
    let (status, Json(resp)) = submit(State(state_with(&mailer, 5)), HeaderMap::new(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.error.as_deref(), Some(MALFORMED_MESSAGE));
}

#[tokio::test]
async fn legacy_description_field_is_accepted() {
    let mailer = Arc::new(MockMailer::default());
    let body = Json::<ContactSubmission>::from_bytes(
        br#"{"name":"Asha","email":"asha@example.com","description":"Cafe site"}"#,
    );
    let (status, _) = submit(State(state_with(&mailer, 5)), HeaderMap::new(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(mailer.sent()[0].message, "Cafe site");
}

#[tokio::test]
async fn missing_mailer_is_service_unavailable() {
    let state = AppState::new(None, RateLimitConfig::default());
    let (status, Json(body)) = submit(State(state), HeaderMap::new(), Ok(inquiry())).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(!body.success);
    assert_eq!(body.error.as_deref(), Some(NOT_CONFIGURED_MESSAGE));
}

#[tokio::test]
async fn delivery_failure_is_bad_gateway() {
    let mailer = Arc::new(MockMailer::failing("provider down"));
    let (status, Json(body)) = submit(State(state_with(&mailer, 5)), HeaderMap::new(), Ok(inquiry())).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body.error.as_deref(), Some(DELIVERY_FAILED_MESSAGE));
}

#[tokio::test]
async fn repeated_submissions_are_rate_limited_per_client() {
    let mailer = Arc::new(MockMailer::default());
    let state = state_with(&mailer, 2);

    for _ in 0..2 {
        let (status, _) = submit(State(state.clone()), from_ip("9.9.9.9"), Ok(inquiry())).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, Json(body)) = submit(State(state.clone()), from_ip("9.9.9.9"), Ok(inquiry())).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body.error.as_deref(), Some(RATE_LIMITED_MESSAGE));

    let (status, _) = submit(State(state), from_ip("8.8.8.8"), Ok(inquiry())).await;
    assert_eq!(status, StatusCode::OK, "other clients are unaffected");
    assert_eq!(mailer.sent().len(), 3);
}

#[tokio::test]
async fn invalid_inquiries_do_not_consume_rate_limit() {
    let mailer = Arc::new(MockMailer::default());
    let state = state_with(&mailer, 1);
    let empty = Json(ContactSubmission::default());

    let (status, _) = submit(State(state.clone()), from_ip("7.7.7.7"), Ok(empty)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = submit(State(state), from_ip("7.7.7.7"), Ok(inquiry())).await;
    assert_eq!(status, StatusCode::OK);
}
