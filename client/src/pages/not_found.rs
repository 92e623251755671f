//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <div class="page page--narrow not-found">
            <h1>"404"</h1>
            <p class="muted">"Oops! Page not found."</p>
            <A href="/" attr:class="btn btn--gold">
                "Return to Home"
            </A>
        </div>
    }
}
