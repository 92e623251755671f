//! Scripted content spoken by the assistant.
//!
//! Rule responses in [`crate::intent`] reuse these answers, so edits here
//! change the bot's replies without touching the rule table.

/// Shown once, a few seconds after the widget mounts, if nothing was said yet.
pub const GREETING: &str =
    "Welcome to Devansh Digital Studio 👋 Looking to build a powerful website for your business?";

/// Chips rendered above the input. Selecting one submits its label verbatim.
pub const QUICK_REPLIES: &[&str] = &["Services", "Pricing", "Process", "Tech Stack", "Get a Quote"];

/// Deep link opened by the "external chat" follow-up action.
pub const EXTERNAL_CHAT_URL: &str = "https://wa.me/918506000070";

/// Route the "contact form" follow-up action navigates to.
pub const CONTACT_ROUTE: &str = "/contact";

pub const CONTACT_ACTION_LABEL: &str = "📩 Contact Form";
pub const EXTERNAL_ACTION_LABEL: &str = "💬 WhatsApp Us";

// =============================================================================
// KNOWLEDGE BASE
// =============================================================================

pub const SERVICES: &str = "We offer custom website development, business websites, landing pages, e-commerce solutions, portfolio websites, and performance optimization/redesign services.";
pub const PROCESS: &str = "Our process includes: 1. Discovery & Discussion, 2. Design & Prototype, 3. Development, 4. Revisions, 5. Testing, and 6. Deployment.";
pub const TIMELINE: &str = "Standard websites typically take 5–10 days. Advanced or custom projects may take 2–4 weeks depending on complexity.";
pub const PRICING: &str = "Pricing depends on the scope, features, and integrations required. I'd be happy to arrange a personalized quote for you!";
pub const SUPPORT: &str = "We provide 1 month of free technical support after deployment, which includes bug fixes. We also offer optional monthly maintenance plans.";
pub const MAINTENANCE: &str = "Our maintenance services cover content updates, security patches, backup management, speed optimization, and feature additions.";
pub const TECHNICAL: &str = "We build with SEO-friendly structures, mobile responsiveness, fast loading optimization, and can integrate tools like WhatsApp, Analytics, and custom forms.";
pub const TECH_STACK: &str = "We use the latest modern tech stack including React, Next.js, TypeScript, Tailwind CSS, and Node.js to ensure your website is fast, secure, and scalable.";
pub const SEO: &str = "All our websites are built with SEO best practices in mind, including semantic HTML, meta tags, fast load times, and mobile optimization to help you rank higher.";
pub const HOSTING: &str = "We can assist you with choosing the right hosting provider and setting up your domain. We recommend reliable providers like Vercel, Netlify, or AWS.";
pub const USP: &str = "We combine premium luxury design with cutting-edge technology. We don't just build websites; we build digital experiences that convert visitors into clients.";
pub const PORTFOLIO: &str = "You can view our latest work in the 'Work' section of this website. We have experience across various industries including e-commerce, corporate, and creative portfolios.";
pub const FALLBACK: &str = "I'm not 100% sure about that specific detail. However, I can tell you about our Services, Pricing, Process, or Tech Stack. Or would you like to start a custom quote?";
