use std::sync::Arc;

use leptos::prelude::*;
use rising_tides_index::ProductMetrics;

use crate::icons::{ICON_ARROW_RIGHT, Icon};

#[component]
pub fn Cta(metrics: Arc<ProductMetrics>) -> impl IntoView {
    let tagline = format!(
        "{} skills. {} plugins. ~7% context. One command.",
        metrics.skills_count(),
        metrics.plugins_count()
    );
    view! {
        <section class="section cta">
            <div class="container-tight" data-reveal="">
                <h2 class="cta-title">
                    "Stop cobbling together skills."
                    <br />
                    <span class="gradient-text">"Start with a system that works."</span>
                </h2>
                <p class="cta-tagline">{tagline}</p>
                <a href="#pricing" class="btn btn-primary btn-large">
                    "Get Rising Tides"
                    <Icon path=ICON_ARROW_RIGHT />
                </a>
            </div>
        </section>
    }
}
