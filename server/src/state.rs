//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the optional contact mailer and the submission rate limiter.
//! Cloning is cheap; every field is shared.

use std::sync::Arc;

use crate::config::RateLimitConfig;
use crate::rate_limit::RateLimiter;
use crate::services::contact::ContactMailer;

#[derive(Clone)]
pub struct AppState {
    /// `None` when `RESEND_API_KEY` is not configured; the relay answers 503.
    pub mailer: Option<Arc<dyn ContactMailer>>,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(mailer: Option<Arc<dyn ContactMailer>>, rate_limit: RateLimitConfig) -> Self {
        Self { mailer, rate_limiter: RateLimiter::new(rate_limit) }
    }
}
