//! Contact page hosting the inquiry form.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::contact_form::ContactForm;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact | Devansh Digital Studio"/>
        <div class="page page--narrow">
            <div class="page__header">
                <h1>"Get in Touch"</h1>
                <p class="muted">"Ready to start your project? Fill out the form below or reach out directly."</p>
            </div>
            <ContactForm/>
        </div>
    }
}
