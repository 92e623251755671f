//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{chat_widget::ChatWidget, footer::Footer, navbar::Navbar};
use crate::pages::{contact::ContactPage, home::HomePage, not_found::NotFoundPage, work::WorkPage};
use crate::state::chat::ChatState;
use crate::util::browser;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The chat widget sits outside `<Routes>` so one conversation survives
/// navigation between pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::new(browser::random_seed()));
    provide_context(chat);

    view! {
        <Stylesheet id="leptos" href="/pkg/studio.css"/>
        <Title text="Devansh Digital Studio | Premium Websites"/>
        <Meta
            name="description"
            content="Premium websites built to grow businesses. Modern, high-performance sites for cafes, salons, and local brands."
        />

        <Router>
            <Navbar/>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("work") view=WorkPage/>
                </Routes>
            </main>
            <Footer/>
            <ChatWidget/>
        </Router>
    }
}
