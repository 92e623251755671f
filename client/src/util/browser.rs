//! Browser environment access with SSR fallbacks.
//!
//! Every function here is callable during server rendering; the non-hydrate
//! versions return neutral values or do nothing.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Viewer's offset from UTC in minutes, east positive.
#[must_use]
pub fn utc_offset_minutes() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        // getTimezoneOffset is west-positive.
        offset_from_js(js_sys::Date::new_0().get_timezone_offset())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

#[cfg(any(test, feature = "hydrate"))]
#[allow(clippy::cast_possible_truncation)]
fn offset_from_js(timezone_offset: f64) -> i32 {
    if timezone_offset.is_finite() { -(timezone_offset.round() as i32) } else { 0 }
}

/// Seed for the conversation's reply jitter.
#[must_use]
pub fn random_seed() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        seed_from_parts(js_sys::Math::random(), js_sys::Date::now())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

#[cfg(any(test, feature = "hydrate"))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seed_from_parts(random: f64, now_ms: f64) -> u64 {
    let mantissa = (random.clamp(0.0, 1.0) * f64::from(u32::MAX)) as u64;
    (mantissa << 32) ^ (now_ms.max(0.0) as u64)
}

/// Open `url` in a new browsing context without handing it our `window`.
pub fn open_external(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
            log::warn!("open_external({url}) failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Smooth-scroll the element with `id` into view. Missing ids are ignored.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            log::debug!("scroll_to_section: no element #{id}");
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Smooth-scroll back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}
