//! Static site copy: services, portfolio, process, pricing, testimonials.
//!
//! Section components render these tables directly. Anchors in [`NAV_LINKS`]
//! must match the `id` each section renders on the home page.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const STUDIO_NAME: &str = "Devansh Digital Studio";
pub const STUDIO_TAGLINE: &str = "Premium Websites That Turn Visitors Into Customers";
pub const STUDIO_EMAIL: &str = "devansh.studio.work@gmail.com";

// =============================================================================
// NAVIGATION
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Section id on the home page.
    pub section: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Services", section: "services" },
    NavLink { label: "Work", section: "work" },
    NavLink { label: "Process", section: "process" },
    NavLink { label: "Pricing", section: "pricing" },
];

impl NavLink {
    /// Link that works from any page: `/#section`.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/#{}", self.section)
    }
}

// =============================================================================
// SERVICES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Custom Website Design",
        description: "Unique designs crafted for your brand. No templates. No shortcuts.",
    },
    Service {
        title: "Business Landing Pages",
        description: "High-converting pages that turn visitors into paying customers.",
    },
    Service {
        title: "Cafe & Salon Websites",
        description: "Built specifically for hospitality. Menus, bookings, vibes, all covered.",
    },
    Service {
        title: "Booking & WhatsApp Integration",
        description: "Let customers reach you instantly. One tap. No friction.",
    },
    Service {
        title: "Performance & SEO Basics",
        description: "Fast load times. Google-friendly. Built to be found.",
    },
    Service {
        title: "Hosting & Launch Support",
        description: "We handle the tech. You focus on your business.",
    },
];

pub const WHY_US: &[&str] = &[
    "Tailored designs, no templates",
    "Mobile-first & lightning fast",
    "Built for real customers, not designers",
    "Clear calls-to-action on every page",
    "Fast delivery (5–7 days)",
    "Direct communication, no middlemen",
];

// =============================================================================
// PORTFOLIO
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub label: &'static str,
    /// Live demo, opened in a new tab.
    pub link: &'static str,
    pub image: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "The Brew Room",
        kind: "Modern Café Website",
        description: "A warm, inviting digital experience for an artisan coffee house. Designed to drive foot traffic and build loyal regulars.",
        features: &["Online menu", "Location & hours", "Instagram integration"],
        label: "Concept Project",
        link: "https://demo-website-cafe.vercel.app",
        image: "/images/portfolio/brew-room.png",
    },
    Project {
        title: "Aura Salon",
        kind: "Luxury Salon Website",
        description: "Elegant, minimal design for a high-end salon. Built to attract premium clients and simplify bookings.",
        features: &["Service catalog", "WhatsApp booking", "Client testimonials"],
        label: "Concept Project",
        link: "https://demo-website-salon.vercel.app",
        image: "/images/portfolio/aura-salon.png",
    },
    Project {
        title: "Olive & Ember",
        kind: "Boutique Restaurant Website",
        description: "A rich, immersive website for a fine-dining restaurant. Focused on atmosphere, trust, and reservations.",
        features: &["Dynamic menu", "Reservation system", "Chef's story"],
        label: "Concept Project",
        link: "https://demo-website-dining.vercel.app",
        image: "/images/portfolio/olive-amber.png",
    },
];

// =============================================================================
// PROCESS / PRICING
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: &[Step] = &[
    Step { number: 1, title: "Understand", description: "We learn your business, audience, and goals inside out." },
    Step { number: 2, title: "Design", description: "Craft a visual identity that feels premium and purposeful." },
    Step { number: 3, title: "Build", description: "Develop a fast, responsive, conversion-ready website." },
    Step { number: 4, title: "Launch", description: "Go live with confidence. We handle hosting and support." },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// Highlighted as "Most Popular".
    pub featured: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Basic Premium",
        price: "Starting from ₹9,998",
        description: "Perfect for new businesses that want a clean, professional online presence.",
        features: &[
            "Custom one-page design",
            "Mobile responsive",
            "Contact & WhatsApp integration",
            "Basic SEO setup",
            "Hosting guidance",
        ],
        featured: false,
    },
    Plan {
        name: "High-End Business",
        price: "Custom pricing",
        description: "For established brands that demand more: multi-page, advanced features, premium finish.",
        features: &[
            "Multi-page custom design",
            "Booking & form integration",
            "Advanced SEO & speed optimization",
            "Content strategy support",
            "Priority delivery (5–7 days)",
        ],
        featured: true,
    },
];

// =============================================================================
// TESTIMONIALS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Priya Mehta",
        role: "Owner, Bloom Café",
        quote: "Devansh delivered exactly what we needed: a website that looks premium and actually brings in customers. Best decision we made.",
    },
    Testimonial {
        name: "Arjun Kapoor",
        role: "Founder, Luxe Salon",
        quote: "The speed, the quality, the attention to detail. Our bookings went up within the first week. Highly recommend.",
    },
    Testimonial {
        name: "Sneha Iyer",
        role: "Manager, Olive & Ember",
        quote: "Professional, fast, and zero hassle. The website speaks for itself. Our guests love it.",
    },
];

pub const TESTIMONIAL_STARS: usize = 5;
