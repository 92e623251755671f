//! Home page sections. Static markup over the tables in `content`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::{PLANS, PROCESS_STEPS, PROJECTS, Plan, Project, SERVICES, TESTIMONIAL_STARS, TESTIMONIALS, WHY_US};
use crate::util::browser;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__inner">
                <p class="eyebrow">"Devansh Digital Studio"</p>
                <h1 class="hero__title">
                    "Premium Websites Built to " <span class="text-gradient-gold">"Grow Businesses"</span>
                </h1>
                <p class="hero__lead">
                    "We design modern, high-performance websites for cafes, salons, and local brands that care about quality, trust, and customers."
                </p>
                <div class="hero__actions">
                    <button class="btn btn--gold btn--lg" on:click=move |_| browser::scroll_to_section("pricing")>
                        "Get a Website →"
                    </button>
                    <button class="btn btn--outline btn--lg" on:click=move |_| browser::scroll_to_section("work")>
                        "View Work"
                    </button>
                </div>
                <p class="hero__motto">"Designed. Developed. Delivered with precision."</p>
            </div>
        </section>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="section section--alt">
            <div class="section__header">
                <p class="eyebrow">"What We Do"</p>
                <h2>"Not just websites. " <span class="text-gradient-gold">"Digital storefronts"</span> " that work."</h2>
            </div>
            <div class="grid grid--3">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <div class="card">
                                <h3>{service.title}</h3>
                                <p class="muted">{service.description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn WhyUs() -> impl IntoView {
    view! {
        <section class="section">
            <div class="why-us">
                <div>
                    <p class="eyebrow">"Why Us"</p>
                    <h2>"Designed to Convert. " <span class="text-gradient-gold">"Built to Last."</span></h2>
                    <p class="muted">
                        "We don't build generic websites. Every pixel serves a purpose: to make your business look credible and bring in customers."
                    </p>
                </div>
                <ul class="why-us__list">
                    {WHY_US
                        .iter()
                        .map(|reason| view! { <li class="why-us__item"><span class="check">"✓"</span>{*reason}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </section>
    }
}

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <section id="work" class="section section--alt">
            <div class="section__header">
                <p class="eyebrow">"Portfolio"</p>
                <h2>"Selected Work"</h2>
            </div>
            <div class="grid grid--3">
                {PROJECTS.iter().map(|project| view! { <ProjectCard project=*project/> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="card project">
            <a class="project__image" href=project.link target="_blank" rel="noopener noreferrer">
                <img src=project.image alt=project.title loading="lazy"/>
                <span class="project__label">{project.label}</span>
            </a>
            <div class="project__body">
                <p class="eyebrow eyebrow--small">{project.kind}</p>
                <h3>
                    <a href=project.link target="_blank" rel="noopener noreferrer">{project.title}</a>
                </h3>
                <p class="muted">{project.description}</p>
                <div class="tags">
                    {project.features.iter().map(|f| view! { <span class="tag">{*f}</span> }).collect::<Vec<_>>()}
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn Process() -> impl IntoView {
    view! {
        <section id="process" class="section">
            <div class="section__header">
                <p class="eyebrow">"Process"</p>
                <h2>"A Simple, " <span class="text-gradient-gold">"Proven Process"</span></h2>
            </div>
            <div class="grid grid--4">
                {PROCESS_STEPS
                    .iter()
                    .map(|step| {
                        view! {
                            <div class="step">
                                <span class="step__number">{step.number}</span>
                                <h3>{step.title}</h3>
                                <p class="muted">{step.description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="section section--alt">
            <div class="section__header">
                <p class="eyebrow">"Pricing"</p>
                <h2>"Transparent Pricing. " <span class="text-gradient-gold">"Premium Quality."</span></h2>
            </div>
            <div class="grid grid--2 pricing">
                {PLANS.iter().map(|plan| view! { <PlanCard plan=*plan/> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: Plan) -> impl IntoView {
    let button_class = if plan.featured { "btn btn--gold btn--block" } else { "btn btn--outline btn--block" };
    view! {
        <div class="card plan" class:plan--featured=plan.featured>
            {plan.featured.then(|| view! { <span class="plan__badge">"Most Popular"</span> })}
            <h3>{plan.name}</h3>
            <p class="plan__price text-gradient-gold">{plan.price}</p>
            <p class="muted">{plan.description}</p>
            <ul class="plan__features">
                {plan.features.iter().map(|f| view! { <li><span class="check">"✓"</span>{*f}</li> }).collect::<Vec<_>>()}
            </ul>
            <A href="/contact" attr:class=button_class>
                "Get Started →"
            </A>
        </div>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let stars = "★".repeat(TESTIMONIAL_STARS);
    view! {
        <section class="section">
            <div class="section__header">
                <p class="eyebrow">"Testimonials"</p>
                <h2>"Trusted by " <span class="text-gradient-gold">"Growing Businesses"</span></h2>
            </div>
            <div class="grid grid--3">
                {TESTIMONIALS
                    .iter()
                    .map(|t| {
                        view! {
                            <figure class="card testimonial">
                                <div class="testimonial__stars" aria-label="5 stars">{stars.clone()}</div>
                                <blockquote>{format!("\u{201c}{}\u{201d}", t.quote)}</blockquote>
                                <figcaption>
                                    <p class="testimonial__name">{t.name}</p>
                                    <p class="muted small">{t.role}</p>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn FinalCta() -> impl IntoView {
    view! {
        <section class="section section--alt final-cta">
            <p class="eyebrow">"Ready?"</p>
            <h2>"Let's Build Something " <span class="text-gradient-gold">"Worth Remembering."</span></h2>
            <p class="muted">"If you care about quality, speed, and results, let's talk."</p>
            <div class="hero__actions">
                <A href="/contact" attr:class="btn btn--gold btn--lg">
                    "Take Action →"
                </A>
                <button
                    class="btn btn--outline btn--lg"
                    on:click=move |_| browser::open_external(chat::script::EXTERNAL_CHAT_URL)
                >
                    "💬 WhatsApp Us"
                </button>
            </div>
        </section>
    }
}
