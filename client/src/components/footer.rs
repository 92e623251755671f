//! Site footer with studio contact details.

use leptos::prelude::*;

use crate::content::{STUDIO_EMAIL, STUDIO_NAME, STUDIO_TAGLINE};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contact" class="footer">
            <div class="footer__inner">
                <div>
                    <p class="footer__name">{STUDIO_NAME.to_uppercase()}</p>
                    <p class="footer__tagline">{STUDIO_TAGLINE}</p>
                </div>
                <div class="footer__meta">
                    <a class="footer__email" href=format!("mailto:{STUDIO_EMAIL}")>{STUDIO_EMAIL}</a>
                    <p>{format!("© 2026 {STUDIO_NAME}. All rights reserved.")}</p>
                </div>
            </div>
        </footer>
    }
}
