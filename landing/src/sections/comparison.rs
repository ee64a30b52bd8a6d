use std::sync::Arc;

use leptos::prelude::*;
use rising_tides_index::ProductMetrics;

use crate::icons::{ICON_CHECK, ICON_X, Icon};

struct Row {
    feature: &'static str,
    diy: &'static str,
    rising_tides: String,
}

fn rows(metrics: &ProductMetrics) -> Vec<Row> {
    let row = |feature, diy, rising_tides: &str| Row {
        feature,
        diy,
        rising_tides: rising_tides.to_string(),
    };
    vec![
        Row {
            feature: "Finding skills",
            diy: "Scattered across GitHub, blogs, Twitter",
            rising_tides: format!("{} curated, tested, indexed", metrics.skills_count()),
        },
        row("Context cost", "Unknown — often 20-40%", "Under 7% — tested and measured"),
        row("MCP setup", "Manual JSON editing per project", "Auto-configured via plugins"),
        row("Discovery", "Remember what you installed", "Auto-matched by triggers"),
        row("Setup time", "Hours per project", "One command, done"),
        row(
            "Security audit",
            "None — trust random repos",
            "1,000+ files scanned, verified safe",
        ),
    ]
}

#[component]
pub fn Comparison(metrics: Arc<ProductMetrics>) -> impl IntoView {
    let body = rows(&metrics)
        .into_iter()
        .map(|row| {
            view! {
                <div class="compare-row">
                    <div class="compare-feature">{row.feature}</div>
                    <div class="compare-diy">
                        <Icon path=ICON_X size="16" class="icon-red" />
                        <span>{row.diy}</span>
                    </div>
                    <div class="compare-rt">
                        <Icon path=ICON_CHECK size="16" class="icon-green" />
                        <span>{row.rising_tides}</span>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="section">
            <div class="container-narrow">
                <div class="section-header" data-reveal="">
                    <p class="section-eyebrow">"Why This Exists"</p>
                    <h2 class="section-title">"DIY vs. Rising Tides"</h2>
                </div>
                <div class="compare" data-reveal="">
                    <div class="compare-row compare-head">
                        <div></div>
                        <div class="compare-diy">"Do It Yourself"</div>
                        <div class="compare-rt">"Rising Tides"</div>
                    </div>
                    {body}
                </div>
            </div>
        </section>
    }
}
