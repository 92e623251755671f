use super::*;

const WINDOW: Duration = Duration::from_secs(600);

fn limiter(per_client_limit: usize, global_limit: usize) -> RateLimiter {
    RateLimiter::new(RateLimitConfig { per_client_limit, global_limit, window: WINDOW })
}

// =============================================================================
// check_and_record
// =============================================================================

#[test]
fn per_client_allows_up_to_limit() {
    let rl = limiter(3, 100);
    let now = Instant::now();

    for i in 0..3 {
        assert!(rl.check_and_record_at("1.2.3.4", now).is_ok(), "request {i} should succeed");
    }
    assert_eq!(
        rl.check_and_record_at("1.2.3.4", now),
        Err(RateLimitError::PerClientExceeded { limit: 3, window_secs: 600 })
    );
}

#[test]
fn clients_are_limited_independently() {
    let rl = limiter(1, 100);
    let now = Instant::now();

    assert!(rl.check_and_record_at("a", now).is_ok());
    assert!(rl.check_and_record_at("a", now).is_err());
    assert!(rl.check_and_record_at("b", now).is_ok());
}

#[test]
fn global_allows_up_to_limit() {
    let rl = limiter(100, 4);
    let now = Instant::now();

    for i in 0..4 {
        assert!(rl.check_and_record_at(&format!("client-{i}"), now).is_ok());
    }
    assert_eq!(
        rl.check_and_record_at("fresh", now),
        Err(RateLimitError::GlobalExceeded { limit: 4, window_secs: 600 })
    );
}

#[test]
fn rejected_requests_are_not_recorded() {
    let rl = limiter(1, 2);
    let now = Instant::now();

    assert!(rl.check_and_record_at("a", now).is_ok());
    for _ in 0..10 {
        assert!(rl.check_and_record_at("a", now).is_err());
    }
    // Only one global slot used; another client still fits.
    assert!(rl.check_and_record_at("b", now).is_ok());
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = limiter(2, 100);
    let start = Instant::now();

    rl.check_and_record_at("a", start).unwrap();
    rl.check_and_record_at("a", start).unwrap();
    assert!(rl.check_and_record_at("a", start).is_err());

    let later = start + WINDOW;
    assert!(rl.check_and_record_at("a", later).is_ok());
}

#[test]
fn drained_clients_are_forgotten() {
    let rl = limiter(5, 100);
    let start = Instant::now();

    rl.check_and_record_at("a", start).unwrap();
    rl.check_and_record_at("b", start).unwrap();
    assert_eq!(rl.tracked_clients(), 2);

    rl.check_and_record_at("c", start + WINDOW).unwrap();
    assert_eq!(rl.tracked_clients(), 1);
}

#[test]
fn clones_share_counters() {
    let rl = limiter(1, 100);
    let twin = rl.clone();
    let now = Instant::now();

    rl.check_and_record_at("a", now).unwrap();
    assert!(twin.check_and_record_at("a", now).is_err());
}

// =============================================================================
// client_key
// =============================================================================

#[test]
fn client_key_uses_first_forwarded_hop() {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
    headers.insert("x-real-ip", "10.0.0.9".parse().unwrap());
    assert_eq!(client_key(&headers), "203.0.113.7");
}

#[test]
fn client_key_falls_back_to_real_ip() {
    let mut headers = HeaderMap::new();
    headers.insert("x-real-ip", " 198.51.100.2 ".parse().unwrap());
    assert_eq!(client_key(&headers), "198.51.100.2");
}

#[test]
fn client_key_defaults_to_unknown() {
    assert_eq!(client_key(&HeaderMap::new()), UNKNOWN_CLIENT);

    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", "".parse().unwrap());
    assert_eq!(client_key(&headers), UNKNOWN_CLIENT);
}
