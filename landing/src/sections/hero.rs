use std::sync::Arc;

use leptos::prelude::*;
use rising_tides_index::ProductMetrics;

use crate::icons::{ICON_ARROW_RIGHT, ICON_CARET_DOWN, ICON_SHIELD_CHECK, Icon};

#[component]
pub fn Hero(metrics: Arc<ProductMetrics>) -> impl IntoView {
    let counts = format!(
        "{} skills • {} plugins • {} MCPs",
        metrics.skills_count(),
        metrics.plugins_count(),
        metrics.mcps_count()
    );
    let description = format!(
        "A curated library of {} production-ready skills for Claude Code — from React patterns \
         to Stripe integration, SEO audits to deployment pipelines. One install. ~7% context cost.",
        metrics.skills_count()
    );
    let stats = [
        (metrics.skills_count().to_string(), "Skills"),
        (metrics.plugins_count().to_string(), "Plugins"),
        ("~7%".to_string(), "Context Cost"),
        ("1".to_string(), "Command Setup"),
    ];

    view! {
        <section class="hero">
            <div class="hero-glow amber" aria-hidden="true"></div>
            <div class="hero-glow purple" aria-hidden="true"></div>

            <div class="container hero-inner">
                <div class="hero-badge" data-reveal="">
                    <Icon path=ICON_SHIELD_CHECK size="16" class="icon-green" />
                    <span>"Security Audited"</span>
                    <span class="hero-badge-counts">{counts}</span>
                </div>

                <h1 class="hero-title" data-reveal="">
                    "Stop building skills."
                    <br />
                    <span class="gradient-text">"Start shipping code."</span>
                </h1>

                <p class="hero-description" data-reveal="">{description}</p>

                <div class="hero-actions" data-reveal="">
                    <a href="#pricing" class="btn btn-primary btn-large">
                        "Get the Pack"
                        <Icon path=ICON_ARROW_RIGHT size="18" />
                    </a>
                    <a href="#demo" class="btn btn-secondary btn-large">"See It in Action"</a>
                </div>

                <div class="hero-stats" data-reveal="">
                    {stats
                        .into_iter()
                        .map(|(number, label)| {
                            view! {
                                <div>
                                    <div class="hero-stat-number">{number}</div>
                                    <div class="hero-stat-label">{label}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="scroll-hint" aria-hidden="true">
                <span>"Scroll"</span>
                <Icon path=ICON_CARET_DOWN size="16" />
            </div>
        </section>
    }
}
