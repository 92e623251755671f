//! Fixed top navigation with a collapsible mobile menu.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::NAV_LINKS;
use crate::util::browser;

#[component]
pub fn Navbar() -> impl IntoView {
    let mobile_open = RwSignal::new(false);

    let links = move |class: &'static str| {
        NAV_LINKS
            .iter()
            .map(|link| {
                view! {
                    <a class=class href=link.href() on:click=move |_| mobile_open.set(false)>
                        {link.label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <button class="navbar__brand" on:click=move |_| browser::scroll_to_top()>
                    "Devansh"
                    <span class="text-gold">"."</span>
                    "Studio"
                </button>

                <div class="navbar__links">
                    {links("navbar__link")}
                    <A href="/contact" attr:class="btn btn--gold btn--sm">
                        "Get in Touch"
                    </A>
                </div>

                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| mobile_open.update(|open| *open = !*open)
                >
                    {move || if mobile_open.get() { "×" } else { "☰" }}
                </button>
            </div>

            <Show when=move || mobile_open.get()>
                <div class="navbar__mobile">
                    {links("navbar__mobile-link")}
                    <A href="/contact" attr:class="btn btn--gold btn--block" on:click=move |_| mobile_open.set(false)>
                        "Get in Touch"
                    </A>
                </div>
            </Show>
        </nav>
    }
}
