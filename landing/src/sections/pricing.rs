use std::sync::Arc;

use leptos::prelude::*;
use rising_tides_index::ProductMetrics;

use crate::config::{CheckoutLinks, SiteLinks};
use crate::icons::{ICON_CHECK, ICON_STAR, ICON_USERS, ICON_VIDEO_CAMERA, Icon};

/// Phrase inside a plan feature that links to the community page.
const COMMUNITY_PHRASE: &str = "community access";

struct Plan {
    name: &'static str,
    price: &'static str,
    original_price: Option<&'static str>,
    price_note: Option<&'static str>,
    limited_time: bool,
    savings: Option<&'static str>,
    description: &'static str,
    badge: Option<&'static str>,
    icon: Option<&'static str>,
    features: Vec<String>,
    cta: &'static str,
    href: String,
    highlight: bool,
}

fn plans(metrics: &ProductMetrics, checkout: &CheckoutLinks) -> Vec<Plan> {
    vec![
        Plan {
            name: "Pro",
            price: "$99",
            original_price: None,
            price_note: None,
            limited_time: false,
            savings: None,
            description: "Everything you need to supercharge Claude Code",
            badge: None,
            icon: None,
            features: vec![
                format!("All {} production-ready skills", metrics.skills_count()),
                format!("{} MCP plugin bundles", metrics.plugins_count()),
                format!("{} CLI integration guides", metrics.clis_count()),
                "One-command setup (installs Claude Code + all prerequisites)".into(),
                "Private GitHub repo access".into(),
                "Lifetime updates".into(),
                "Community access".into(),
            ],
            cta: "Get Pro",
            href: checkout.pro.clone(),
            highlight: false,
        },
        Plan {
            name: "Done-With-You",
            price: "$399",
            original_price: Some("$499"),
            price_note: None,
            limited_time: true,
            savings: None,
            description: "Get set up on a call with Nick, creator of Rising Tides Pack",
            badge: Some("Most Popular"),
            icon: Some(ICON_VIDEO_CAMERA),
            features: [
                "Everything in Pro",
                "45-minute 1:1 setup call",
                "Full installation on your machine",
                "MCP + memory configuration",
                "First project walkthrough",
                "Tips, tricks & best practices",
                "Priority community access",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            cta: "Book the Call",
            href: checkout.done_with_you.clone(),
            highlight: true,
        },
        Plan {
            name: "Team",
            price: "$399",
            original_price: Some("$495"),
            price_note: Some("up to 5 seats"),
            limited_time: false,
            savings: Some("Save $96 vs 5× Pro"),
            description: "For teams building with Claude Code",
            badge: None,
            icon: Some(ICON_USERS),
            features: [
                "Everything in Pro",
                "5 GitHub account access",
                "Consolidated team billing",
                "Priority community access",
                "Team onboarding guide",
                "Slack support channel",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            cta: "Get Team Access",
            href: checkout.team.clone(),
            highlight: false,
        },
    ]
}

#[component]
pub fn Pricing(
    metrics: Arc<ProductMetrics>,
    checkout: CheckoutLinks,
    links: SiteLinks,
) -> impl IntoView {
    let cards = plans(&metrics, &checkout)
        .into_iter()
        .map(|plan| view! { <PlanCard plan=plan community_about=links.community_about.clone() /> })
        .collect::<Vec<_>>();

    view! {
        <section id="pricing" class="section">
            <div class="container">
                <div class="section-header" data-reveal="">
                    <p class="section-eyebrow">"Pricing"</p>
                    <h2 class="section-title">"One purchase. Lifetime access."</h2>
                    <p class="section-description">
                        "No subscriptions. No recurring fees. Pay once, use forever."
                    </p>
                </div>
                <div class="plans">{cards}</div>
                <p class="pricing-trust">
                    "Secure checkout via Stripe • Instant repo access • Lifetime updates"
                </p>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: Plan, community_about: String) -> impl IntoView {
    let class = if plan.highlight { "plan highlight" } else { "plan" };
    let cta_class = if plan.highlight {
        "btn btn-primary btn-block"
    } else {
        "btn btn-secondary btn-block"
    };
    let features = plan
        .features
        .into_iter()
        .map(|feature| {
            view! {
                <li>
                    <Icon path=ICON_CHECK size="18" class="icon-green" />
                    {feature_text(feature, &community_about)}
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <article class=class data-reveal="">
            {plan.badge.map(|badge| view! {
                <div class="plan-badge">
                    <Icon path=ICON_STAR size="12" />
                    <span>{badge}</span>
                </div>
            })}

            <div class="plan-name">
                {plan.icon.map(|icon| view! { <Icon path=icon class="icon-amber" /> })}
                <h3>{plan.name}</h3>
            </div>

            <div class="plan-price-row">
                {plan.original_price.map(|price| view! { <span class="plan-original">{price}</span> })}
                <span class="plan-price">{plan.price}</span>
                {plan.price_note.map(|note| view! { <span class="plan-note">{note}</span> })}
                {plan.limited_time.then(|| view! { <span class="plan-limited">"Limited time"</span> })}
                {plan.savings.map(|savings| view! { <span class="plan-savings">{savings}</span> })}
            </div>
            <p class="card-text">{plan.description}</p>

            <ul class="plan-features">{features}</ul>

            <a href=plan.href class=cta_class>{plan.cta}</a>
        </article>
    }
}

/// Feature text, with the community phrase turned into a link when present.
fn feature_text(feature: String, community_about: &str) -> AnyView {
    match feature.split_once(COMMUNITY_PHRASE) {
        Some((before, after)) => {
            let before = before.to_string();
            let after = after.to_string();
            view! {
                <span>
                    {before}
                    <a href=community_about.to_string() target="_blank" rel="noopener noreferrer">
                        {COMMUNITY_PHRASE}
                    </a>
                    {after}
                </span>
            }
            .into_any()
        }
        None => view! { <span>{feature}</span> }.into_any(),
    }
}
