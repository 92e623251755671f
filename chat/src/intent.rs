//! Keyword intent resolution.
//!
//! DESIGN
//! ======
//! Rules are scanned in declaration order and the first rule with any
//! keyword contained in the lowercased message wins. Keyword sets overlap
//! ("not interested" hits the quote rule before the decline rule), so the
//! order of [`RULES`] is part of the contract, not an implementation detail.
//!
//! Resolution is pure: the same message always yields the same reply.

use log::debug;
use serde::Serialize;

use crate::script;

#[cfg(test)]
#[path = "intent_test.rs"]
mod intent_test;

/// Named intents, one per rule plus the fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Quote,
    Affirm,
    Services,
    Process,
    Timeline,
    Pricing,
    Support,
    Maintenance,
    TechStack,
    Seo,
    Hosting,
    Usp,
    Portfolio,
    Mobile,
    Contact,
    Ecommerce,
    Landing,
    Redesign,
    Payment,
    Guarantee,
    Greeting,
    Thanks,
    Farewell,
    Decline,
    Fallback,
}

impl Intent {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::Affirm => "affirm",
            Self::Services => "services",
            Self::Process => "process",
            Self::Timeline => "timeline",
            Self::Pricing => "pricing",
            Self::Support => "support",
            Self::Maintenance => "maintenance",
            Self::TechStack => "tech_stack",
            Self::Seo => "seo",
            Self::Hosting => "hosting",
            Self::Usp => "usp",
            Self::Portfolio => "portfolio",
            Self::Mobile => "mobile",
            Self::Contact => "contact",
            Self::Ecommerce => "ecommerce",
            Self::Landing => "landing",
            Self::Redesign => "redesign",
            Self::Payment => "payment",
            Self::Guarantee => "guarantee",
            Self::Greeting => "greeting",
            Self::Thanks => "thanks",
            Self::Farewell => "farewell",
            Self::Decline => "decline",
            Self::Fallback => "fallback",
        }
    }
}

/// One entry of the ordered rule table.
#[derive(Clone, Copy, Debug)]
pub struct IntentRule {
    pub intent: Intent,
    /// Lowercase substrings; any one of them matching selects the rule.
    pub keywords: &'static [&'static str],
    pub response: &'static str,
    /// Prompt appended after a blank line, if any.
    pub follow_up: Option<&'static str>,
    /// Whether the reply offers the contact-form / external-chat actions.
    pub has_action: bool,
}

impl IntentRule {
    /// True if any keyword occurs in the already-lowercased `message`.
    #[must_use]
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }

    /// Full reply text including the follow-up prompt.
    #[must_use]
    pub fn reply_text(&self) -> String {
        match self.follow_up {
            Some(follow_up) => format!("{}\n\n{follow_up}", self.response),
            None => self.response.to_owned(),
        }
    }
}

/// Outcome of resolving one user message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub intent: Intent,
    pub text: String,
    pub has_action: bool,
}

// =============================================================================
// RULE TABLE
// =============================================================================

const fn rule(intent: Intent, keywords: &'static [&'static str], response: &'static str, has_action: bool) -> IntentRule {
    IntentRule { intent, keywords, response, follow_up: None, has_action }
}

/// The built-in rules, highest precedence first.
pub const RULES: &[IntentRule] = &[
    rule(
        Intent::Quote,
        &["quote", "consultation", "hire", "interested", "start project"],
        "We'd love to help! Click below to fill out our quick contact form and we'll get back to you with a personalized plan.",
        true,
    ),
    rule(
        Intent::Affirm,
        &[
            "yes", "sure", "okay", "ok", "yeah", "yep", "yup", "ya", "yea", "absolutely", "definitely", "of course",
            "let's go", "go ahead", "please", "do it", "sounds good", "i want", "i need", "i'm interested",
            "let's do it", "count me in",
        ],
        "Great! Click below to reach our Get in Touch form — our team will connect with you shortly.",
        true,
    ),
    IntentRule {
        intent: Intent::Services,
        keywords: &["service", "offer", "do you do", "build", "what can you"],
        response: script::SERVICES,
        follow_up: Some("Would you like a custom quote for any of these?"),
        has_action: false,
    },
    rule(Intent::Process, &["process", "steps", "how it works", "how do you"], script::PROCESS, false),
    rule(Intent::Timeline, &["time", "long", "duration", "days", "weeks", "deadline"], script::TIMELINE, false),
    IntentRule {
        intent: Intent::Pricing,
        keywords: &[
            "price", "cost", "rates", "budget", "money", "charge", "fee", "how much", "affordable", "expensive", "cheap",
        ],
        response: script::PRICING,
        follow_up: Some("Shall I redirect you to our contact form?"),
        has_action: true,
    },
    rule(Intent::Support, &["support", "warranty", "after launch", "post launch", "bug"], script::SUPPORT, false),
    rule(Intent::Maintenance, &["maintain", "update", "security", "backup", "patch"], script::MAINTENANCE, false),
    rule(
        Intent::TechStack,
        &[
            "tech", "react", "node", "next", "stack", "language", "code", "framework", "wordpress", "html",
            "javascript", "typescript",
        ],
        script::TECH_STACK,
        false,
    ),
    rule(
        Intent::Seo,
        &["seo", "rank", "google", "search engine", "keyword", "traffic", "visibility"],
        script::SEO,
        false,
    ),
    rule(
        Intent::Hosting,
        &["host", "server", "domain", "deploy", "live", "publish", "launch", "ssl", "https"],
        script::HOSTING,
        false,
    ),
    rule(
        Intent::Usp,
        &["why", "usp", "special", "better", "choose", "different", "unique", "advantage"],
        script::USP,
        false,
    ),
    rule(
        Intent::Portfolio,
        &["work", "portfolio", "example", "case study", "previous", "sample", "demo", "show"],
        script::PORTFOLIO,
        false,
    ),
    rule(
        Intent::Mobile,
        &["mobile", "responsive", "phone", "tablet", "device", "screen", "adaptive"],
        script::TECHNICAL,
        false,
    ),
    rule(
        Intent::Contact,
        &["contact", "email", "whatsapp", "call", "reach", "connect", "talk", "form", "touch"],
        "You can reach us directly through our Get in Touch form below!",
        true,
    ),
    rule(
        Intent::Ecommerce,
        &["ecommerce", "e-commerce", "shop", "store", "product", "sell", "payment", "cart"],
        "We build complete e-commerce solutions with product management, payment gateway integration, and inventory systems. Want us to create one for you?",
        true,
    ),
    rule(
        Intent::Landing,
        &["landing", "page", "single page", "one page"],
        "We design high-converting landing pages optimized for lead generation and brand awareness. Interested in getting one built?",
        false,
    ),
    rule(
        Intent::Redesign,
        &["redesign", "revamp", "improve", "upgrade", "redo", "makeover"],
        "We specialize in website redesigns that boost performance and modernize your brand's digital presence. Would you like to discuss yours?",
        false,
    ),
    rule(
        Intent::Payment,
        &["payment", "pay", "method", "upi", "card", "gpay", "paytm"],
        "We accept various payment methods. Payment terms are discussed during consultation. Would you like to get in touch with our team?",
        true,
    ),
    rule(
        Intent::Guarantee,
        &["guarantee", "refund", "revision", "change"],
        "We offer revision rounds during the development process and 1 month of free post-launch support to ensure you're 100% satisfied.",
        false,
    ),
    rule(
        Intent::Greeting,
        &["hello", "hi", "hey", "greeting", "good morning", "good evening", "good afternoon"],
        "Hello! 👋 How can I assist you today? Feel free to ask about our services, pricing, or tech stack.",
        false,
    ),
    rule(
        Intent::Thanks,
        &["thank", "thanks", "appreciate", "great", "awesome", "perfect", "nice", "cool", "good"],
        "You're welcome! 😊 Is there anything else I can help you with?",
        false,
    ),
    rule(
        Intent::Farewell,
        &["bye", "goodbye", "see you", "later", "done"],
        "Thanks for chatting! Feel free to reach out anytime. Have a great day! 🙌",
        false,
    ),
    rule(
        Intent::Decline,
        &[
            "no", "nope", "nah", "not now", "not interested", "no thanks", "no thank", "maybe later", "not yet",
            "don't want", "pass", "skip", "never mind", "nevermind",
        ],
        "No worries at all! If you ever change your mind, we're just a click away. Feel free to reach out anytime.",
        true,
    ),
];

// =============================================================================
// RESOLVER
// =============================================================================

/// Ordered rule table plus the reply used when nothing matches.
#[derive(Clone, Copy, Debug)]
pub struct Resolver {
    rules: &'static [IntentRule],
    fallback: &'static str,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(RULES, script::FALLBACK)
    }
}

impl Resolver {
    #[must_use]
    pub const fn new(rules: &'static [IntentRule], fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// Resolve a user message to a reply. Never fails; unmatched input gets
    /// the fallback text with no follow-up actions.
    #[must_use]
    pub fn resolve(&self, message: &str) -> Resolution {
        let lowered = message.to_lowercase();
        let resolution = self.rules.iter().find(|r| r.matches(&lowered)).map_or_else(
            || Resolution { intent: Intent::Fallback, text: self.fallback.to_owned(), has_action: false },
            |r| Resolution { intent: r.intent, text: r.reply_text(), has_action: r.has_action },
        );

        debug!(
            "chat: resolved {message:?} -> {} (action={})",
            resolution.intent.as_str(),
            resolution.has_action
        );
        resolution
    }
}

/// Resolve against the built-in rule table.
#[must_use]
pub fn resolve(message: &str) -> Resolution {
    Resolver::default().resolve(message)
}
