//! Landing page: every marketing section in scroll order.

use leptos::prelude::*;

use crate::components::sections::{FinalCta, Hero, Portfolio, Pricing, Process, Services, Testimonials, WhyUs};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero/>
        <Services/>
        <WhyUs/>
        <Portfolio/>
        <Process/>
        <Pricing/>
        <Testimonials/>
        <FinalCta/>
    }
}
