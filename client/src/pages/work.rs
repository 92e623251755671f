//! Standalone portfolio page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::sections::Portfolio;

#[component]
pub fn WorkPage() -> impl IntoView {
    view! {
        <Title text="Work | Devansh Digital Studio"/>
        <div class="page">
            <Portfolio/>
        </div>
    }
}
