use leptos::prelude::*;

use crate::icons::{ICON_CLOCK, ICON_MAGNIFYING_GLASS, ICON_WARNING_CIRCLE, Icon};

const PROBLEMS: [(&str, &str, &str); 3] = [
    (
        ICON_MAGNIFYING_GLASS,
        "Scattered skills",
        "You find a skill on GitHub, another on Twitter, paste from a blog post. Nothing works together. No consistency.",
    ),
    (
        ICON_WARNING_CIRCLE,
        "Context bloat",
        "Load a few skills and suddenly you've burned 30% of your context window before writing a single line of code.",
    ),
    (
        ICON_CLOCK,
        "Hours of setup",
        "Every new project means configuring MCPs, hunting for the right skill files, and debugging broken integrations.",
    ),
];

#[component]
pub fn Problem() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <div class="section-header" data-reveal="">
                    <p class="section-eyebrow">"The Problem"</p>
                </div>
                <div class="card-grid">
                    {PROBLEMS
                        .into_iter()
                        .map(|(icon, title, text)| {
                            view! {
                                <article class="card" data-reveal="">
                                    <div class="card-icon problem">
                                        <Icon path=icon size="24" />
                                    </div>
                                    <h3 class="card-title">{title}</h3>
                                    <p class="card-text">{text}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
