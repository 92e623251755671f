use super::*;

#[test]
fn ssr_fallbacks_are_neutral() {
    assert!(now_ms().abs() < f64::EPSILON);
    assert_eq!(utc_offset_minutes(), 0);
    assert_eq!(random_seed(), 0);
}

#[test]
fn offset_from_js_flips_sign() {
    // India (UTC+05:30) reports -330; New York winter reports 300.
    assert_eq!(offset_from_js(-330.0), 330);
    assert_eq!(offset_from_js(300.0), -300);
    assert_eq!(offset_from_js(0.0), 0);
}

#[test]
fn offset_from_js_ignores_garbage() {
    assert_eq!(offset_from_js(f64::NAN), 0);
}

#[test]
fn seed_from_parts_varies_with_both_inputs() {
    let a = seed_from_parts(0.25, 1_000.0);
    assert_ne!(a, seed_from_parts(0.5, 1_000.0));
    assert_ne!(a, seed_from_parts(0.25, 2_000.0));
}

#[test]
fn seed_from_parts_clamps_out_of_range_random() {
    assert_eq!(seed_from_parts(-1.0, 0.0), 0);
    assert_eq!(seed_from_parts(2.0, 0.0), seed_from_parts(1.0, 0.0));
}
