use leptos::prelude::*;

use crate::icons::{ICON_ARROW_RIGHT, Icon};

const STEPS: [(&str, &str); 3] = [
    (
        "Install",
        "One command installs Node.js, Git, Claude Code — everything. Already set up? It skips what you have and updates the rest.",
    ),
    (
        "Describe your task",
        "\"Help me set up Stripe payments\" or \"Build a React dashboard\" — just talk to Claude like normal.",
    ),
    (
        "Claude handles the rest",
        "The right skills activate automatically. Best practices, CLI commands, MCP tools — all loaded on demand.",
    ),
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    let last = STEPS.len() - 1;
    let steps = STEPS
        .into_iter()
        .enumerate()
        .map(|(index, (title, text))| {
            view! {
                <div class="step" data-reveal="">
                    <div class="step-number">{index + 1}</div>
                    <h3 class="card-title">{title}</h3>
                    <p class="card-text">{text}</p>
                </div>
                {(index < last).then(|| view! {
                    <div class="step-arrow" aria-hidden="true">
                        <Icon path=ICON_ARROW_RIGHT size="24" />
                    </div>
                })}
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="section">
            <div class="container">
                <div class="section-header" data-reveal="">
                    <p class="section-eyebrow">"How It Works"</p>
                </div>
                <div class="steps">{steps}</div>
            </div>
        </section>
    }
}
