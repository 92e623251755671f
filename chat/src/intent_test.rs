use super::*;

fn rule_for(intent: Intent) -> &'static IntentRule {
    RULES
        .iter()
        .find(|r| r.intent == intent)
        .expect("intent present in RULES")
}

fn position(intent: Intent) -> usize {
    RULES
        .iter()
        .position(|r| r.intent == intent)
        .expect("intent present in RULES")
}

// =============================================================
// Rule table shape
// =============================================================

#[test]
fn rule_table_declares_twenty_four_rules_in_order() {
    let order: Vec<Intent> = RULES.iter().map(|r| r.intent).collect();
    assert_eq!(
        order,
        vec![
            Intent::Quote,
            Intent::Affirm,
            Intent::Services,
            Intent::Process,
            Intent::Timeline,
            Intent::Pricing,
            Intent::Support,
            Intent::Maintenance,
            Intent::TechStack,
            Intent::Seo,
            Intent::Hosting,
            Intent::Usp,
            Intent::Portfolio,
            Intent::Mobile,
            Intent::Contact,
            Intent::Ecommerce,
            Intent::Landing,
            Intent::Redesign,
            Intent::Payment,
            Intent::Guarantee,
            Intent::Greeting,
            Intent::Thanks,
            Intent::Farewell,
            Intent::Decline,
        ]
    );
}

#[test]
fn keywords_are_lowercase_and_non_empty() {
    for rule in RULES {
        assert!(!rule.keywords.is_empty(), "{} has no keywords", rule.intent.as_str());
        for keyword in rule.keywords {
            assert!(!keyword.is_empty());
            assert_eq!(*keyword, keyword.to_lowercase(), "keyword {keyword:?} is not lowercase");
        }
    }
}

#[test]
fn fallback_is_not_in_rule_table() {
    assert!(RULES.iter().all(|r| r.intent != Intent::Fallback));
}

// =============================================================
// Matching
// =============================================================

#[test]
fn matching_ignores_case() {
    assert_eq!(resolve("HELLO").intent, Intent::Greeting);
    assert_eq!(resolve("Hello there").intent, Intent::Greeting);
}

#[test]
fn matching_is_substring_based() {
    assert_eq!(resolve("hosting").intent, Intent::Hosting);
    assert_eq!(resolve("Is it expensive?").intent, Intent::Pricing);
}

#[test]
fn services_chip_resolves_to_services() {
    let res = resolve("Services");
    assert_eq!(res.intent, Intent::Services);
    assert_eq!(res.text, format!("{}\n\nWould you like a custom quote for any of these?", script::SERVICES));
    assert!(!res.has_action);
}

#[test]
fn other_quick_reply_chips_resolve() {
    assert_eq!(resolve("Process").intent, Intent::Process);
    assert_eq!(resolve("Tech Stack").intent, Intent::TechStack);
    assert_eq!(resolve("Get a Quote").intent, Intent::Quote);
}

#[test]
fn pricing_chip_label_matches_no_keyword() {
    // "pricing" does not contain "price"; the verbatim table falls through.
    assert_eq!(resolve("Pricing").intent, Intent::Fallback);
}

#[test]
fn cost_question_resolves_to_pricing_with_action() {
    let res = resolve("how much does it cost");
    assert_eq!(res.intent, Intent::Pricing);
    assert_eq!(res.text, format!("{}\n\nShall I redirect you to our contact form?", script::PRICING));
    assert!(res.has_action);
}

// =============================================================
// Precedence
// =============================================================

#[test]
fn pricing_precedes_greeting() {
    assert!(position(Intent::Pricing) < position(Intent::Greeting));
    assert_eq!(resolve("hi, what's the price").intent, Intent::Pricing);
}

#[test]
fn not_interested_hits_quote_before_decline() {
    assert!(position(Intent::Quote) < position(Intent::Decline));
    let res = resolve("not interested");
    assert_eq!(res.intent, Intent::Quote);
    assert!(res.has_action);
}

#[test]
fn affirm_precedes_services() {
    assert_eq!(resolve("I need a website").intent, Intent::Affirm);
}

#[test]
fn services_phrase_precedes_seo() {
    assert_eq!(resolve("Do you do SEO?").intent, Intent::Services);
    assert_eq!(resolve("seo").intent, Intent::Seo);
}

#[test]
fn maybe_later_hits_farewell_before_decline() {
    assert_eq!(resolve("maybe later").intent, Intent::Farewell);
}

#[test]
fn plain_no_declines_with_action() {
    let res = resolve("no");
    assert_eq!(res.intent, Intent::Decline);
    assert!(res.has_action);
}

#[test]
fn payment_keyword_prefers_ecommerce_over_payment_rule() {
    // "payment" appears in both sets; ecommerce is declared first.
    assert_eq!(resolve("payment").intent, Intent::Ecommerce);
    assert_eq!(resolve("Can I pay by UPI?").intent, Intent::Payment);
}

// =============================================================
// Fallback and purity
// =============================================================

#[test]
fn unmatched_input_falls_back_without_action() {
    let res = resolve("purple elephant migration");
    assert_eq!(res.intent, Intent::Fallback);
    assert_eq!(res.text, script::FALLBACK);
    assert!(!res.has_action);
}

#[test]
fn emoji_only_falls_back() {
    assert_eq!(resolve("🙂").intent, Intent::Fallback);
}

#[test]
fn resolution_is_deterministic() {
    for input in ["hi, what's the price", "Services", "zzz", "No thanks", "whatsapp"] {
        assert_eq!(resolve(input), resolve(input));
    }
}

#[test]
fn action_flags_match_rule_table() {
    for intent in [Intent::Quote, Intent::Affirm, Intent::Pricing, Intent::Contact, Intent::Ecommerce, Intent::Payment, Intent::Decline] {
        assert!(rule_for(intent).has_action, "{} should carry actions", intent.as_str());
    }
    for intent in [Intent::Services, Intent::Process, Intent::Greeting, Intent::Thanks, Intent::Farewell] {
        assert!(!rule_for(intent).has_action, "{} should not carry actions", intent.as_str());
    }
}

// =============================================================
// Custom resolver
// =============================================================

const CUSTOM_RULES: &[IntentRule] = &[IntentRule {
    intent: Intent::Greeting,
    keywords: &["ahoy"],
    response: "Ahoy!",
    follow_up: None,
    has_action: false,
}];

#[test]
fn custom_resolver_uses_its_own_table_and_fallback() {
    let resolver = Resolver::new(CUSTOM_RULES, "??");
    assert_eq!(resolver.resolve("AHOY matey").text, "Ahoy!");
    assert_eq!(resolver.resolve("hello").text, "??");
    assert_eq!(resolver.resolve("hello").intent, Intent::Fallback);
}

#[test]
fn intent_names_are_snake_case() {
    assert_eq!(Intent::TechStack.as_str(), "tech_stack");
    assert_eq!(Intent::Fallback.as_str(), "fallback");
}
