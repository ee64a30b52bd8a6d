use std::sync::Arc;

use leptos::prelude::*;
use rising_tides_index::ProductMetrics;

/// "What's Inside": one chip per category, largest first.
#[component]
pub fn Categories(metrics: Arc<ProductMetrics>) -> impl IntoView {
    let title = format!(
        "{} skills across {} categories",
        metrics.skills_count(),
        metrics.categories_count()
    );
    let chips = metrics
        .categories_by_count()
        .into_iter()
        .map(|category| {
            view! {
                <div class="chip">
                    <span class="chip-count">{category.count}</span>
                    <span class="chip-name">{category.name.clone()}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="section">
            <div class="container">
                <div class="section-header" data-reveal="">
                    <p class="section-eyebrow">"What's Inside"</p>
                    <h2 class="section-title">{title}</h2>
                </div>
                <div class="chips" data-reveal="">{chips}</div>
            </div>
        </section>
    }
}
