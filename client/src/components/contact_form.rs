//! Project inquiry form posting to the contact relay.

use leptos::prelude::*;

use crate::state::contact::{ContactField, ContactFormState, SubmitStatus};

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(submission) = form.try_update(ContactFormState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_contact(&submission).await;
            form.update(|f| f.finish_submit(result));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = submission;
        }
    };

    let field = move |which: ContactField| {
        move || {
            form.with(|f| match which {
                ContactField::Name => f.fields.name.clone(),
                ContactField::Email => f.fields.email.clone(),
                ContactField::Message => f.fields.message.clone(),
            })
        }
    };
    let set = move |which: ContactField| {
        move |ev: leptos::ev::Event| form.update(|f| f.set_field(which, event_target_value(&ev)))
    };

    let submitting = move || form.with(ContactFormState::is_submitting);
    let succeeded = move || form.with(|f| f.status == SubmitStatus::Success);

    view! {
        <div class="contact-form">
            <Show
                when=succeeded
                fallback=move || {
                    view! {
                        <form class="contact-form__card" on:submit=on_submit novalidate>
                            <label class="contact-form__label" for="contact-name">"Name"</label>
                            <input
                                id="contact-name"
                                class="contact-form__input"
                                required
                                placeholder="John Doe"
                                prop:value=field(ContactField::Name)
                                on:input=set(ContactField::Name)
                            />

                            <label class="contact-form__label" for="contact-email">"Email"</label>
                            <input
                                id="contact-email"
                                class="contact-form__input"
                                type="email"
                                required
                                placeholder="john@example.com"
                                prop:value=field(ContactField::Email)
                                on:input=set(ContactField::Email)
                            />

                            <label class="contact-form__label" for="contact-message">"Project Description"</label>
                            <textarea
                                id="contact-message"
                                class="contact-form__input contact-form__textarea"
                                required
                                placeholder="I need a modern website for my..."
                                prop:value=field(ContactField::Message)
                                on:input=set(ContactField::Message)
                            ></textarea>

                            {move || {
                                form.with(|f| f.error().map(str::to_owned))
                                    .map(|error| view! { <p class="contact-form__error" role="alert">{error}</p> })
                            }}

                            <button class="btn btn--gold contact-form__submit" type="submit" disabled=submitting>
                                {move || if submitting() { "Sending..." } else { "Send Request" }}
                            </button>
                        </form>
                    }
                }
            >
                <div class="contact-form__card contact-form__success">
                    <div class="contact-form__check">"✓"</div>
                    <h3>"Message Sent!"</h3>
                    <p>"We'll be in touch shortly to discuss your vision."</p>
                    <button class="btn btn--ghost" on:click=move |_| form.update(ContactFormState::reset)>
                        "Send another message"
                    </button>
                </div>
            </Show>
        </div>
    }
}
