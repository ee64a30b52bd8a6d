use std::sync::Arc;

use leptos::prelude::*;
use rising_tides_index::ProductMetrics;

use crate::icons::{
    ICON_GAUGE, ICON_LIGHTNING, ICON_SQUARES_FOUR, ICON_STACK, ICON_STAR, ICON_TERMINAL, Icon,
};

struct Feature {
    icon: &'static str,
    title: String,
    description: String,
    highlight: bool,
}

fn features(metrics: &ProductMetrics) -> Vec<Feature> {
    vec![
        Feature {
            icon: ICON_STAR,
            title: "Auto-discovery".into(),
            description: "Claude matches your request to the right skill using a lightweight index. \
                          No manual loading. No slash commands needed."
                .into(),
            highlight: true,
        },
        Feature {
            icon: ICON_GAUGE,
            title: "~7% context cost".into(),
            description: format!(
                "Access all {} skills while using under 7% of your context window. Skills load \
                 on-demand, so your context stays free for actual work.",
                metrics.skills_count()
            ),
            highlight: false,
        },
        Feature {
            icon: ICON_SQUARES_FOUR,
            title: format!("{} MCP plugins", metrics.plugins_count()),
            description: "Pre-configured bundles for React, Playwright, Stripe, GitHub, video \
                          generation, and more. Zero-config MCP setup."
                .into(),
            highlight: false,
        },
        Feature {
            icon: ICON_TERMINAL,
            title: format!("{} CLI integrations", metrics.clis_count()),
            description: "GitHub, Stripe, Vercel, Netlify, Firebase, Supabase, Google Cloud, Jira, \
                          Datadog — auth flows and workflows documented."
                .into(),
            highlight: false,
        },
        Feature {
            icon: ICON_LIGHTNING,
            title: "One-command install".into(),
            description: "Installs everything: Node.js, Git, Python, Claude Code, and the skills \
                          pack. Already have some? It skips what's installed and updates Claude \
                          Code to the latest version."
                .into(),
            highlight: false,
        },
        Feature {
            icon: ICON_STACK,
            title: "Project-level control".into(),
            description: "Pull only the skills you need per project with /recommend skills. \
                          Keep projects lean. No bloat."
                .into(),
            highlight: false,
        },
    ]
}

#[component]
pub fn Features(metrics: Arc<ProductMetrics>) -> impl IntoView {
    let cards = features(&metrics)
        .into_iter()
        .enumerate()
        .map(|(index, feature)| view! { <FeatureCard number={index + 1} feature=feature /> })
        .collect::<Vec<_>>();

    view! {
        <section id="features" class="section">
            <div class="container">
                <div class="section-header" data-reveal="">
                    <p class="section-eyebrow">"The Fix"</p>
                    <h2 class="section-title">"One library. Everything works."</h2>
                    <p class="section-description">
                        "Rising Tides is a curated, tested, indexed collection of skills that Claude \
                         auto-discovers and loads on demand. You describe your task — Claude picks \
                         the right skill."
                    </p>
                </div>
                <div class="card-grid">{cards}</div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(number: usize, feature: Feature) -> impl IntoView {
    let class = if feature.highlight { "card highlight" } else { "card" };
    view! {
        <article class=class data-reveal="">
            <div class="feature-head">
                <span class="feature-number">{format!("{number:02}")}</span>
                <div class="card-icon feature">
                    <Icon path=feature.icon />
                </div>
            </div>
            <h3 class="card-title">{feature.title}</h3>
            <p class="card-text">{feature.description}</p>
        </article>
    }
}
