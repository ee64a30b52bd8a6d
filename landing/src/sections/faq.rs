use std::sync::Arc;

use leptos::prelude::*;
use rising_tides_index::ProductMetrics;

use crate::icons::{ICON_CARET_DOWN, Icon};

fn faqs(metrics: &ProductMetrics) -> Vec<(&'static str, String)> {
    let skills = metrics.skills_count();
    vec![
        (
            "What exactly is a \"skill\" for Claude Code?",
            "A skill is a markdown file that teaches Claude workflows, patterns, and best practices \
             for a specific domain — like React development, Stripe payments, or SEO auditing. Claude \
             reads the skill and applies that knowledge to your tasks. No plugins or extensions needed."
                .into(),
        ),
        (
            "Do I need Claude Max or Pro?",
            "You need a Claude Code subscription (Claude Max at $100/mo or Claude Pro at $20/mo with \
             limited usage). The skills pack works on top of Claude Code — it's the knowledge layer, \
             not a separate tool."
                .into(),
        ),
        (
            "How does \"~7% context cost\" work?",
            format!(
                "Claude Code has a 200k token context window. Most skill collections burn 20-40% of \
                 that just loading. Rising Tides is architected so skills load on-demand — you get \
                 access to all {skills} skills while using under 7% of your context. The rest stays \
                 free for actual work."
            ),
        ),
        (
            "What if I only need a few skills?",
            "Run /recommend skills in any project. It analyzes your codebase and recommends only the \
             relevant skills to import. You pull what you need, nothing more."
                .into(),
        ),
        (
            "What OS do you support?",
            "Mac, Linux, and Windows. Each platform has a dedicated setup script that installs \
             everything — Node.js, Git, Python, Claude Code, and the skills pack. If you already have \
             some prerequisites, it detects them and skips ahead. New users and existing Claude Code \
             users run the same script."
                .into(),
        ),
        (
            "Do I get updates?",
            "Yes. You get access to the private GitHub repo. Pull updates anytime. New skills are \
             added regularly."
                .into(),
        ),
        (
            "What if I have trouble installing?",
            "Drop the GitHub repo into Claude Desktop or paste it into Claude.ai and ask it to help \
             you troubleshoot. The setup scripts handle most cases automatically, but Claude can walk \
             you through any edge cases. That's the beauty of using an AI-powered tool — the \
             documentation is self-helping."
                .into(),
        ),
        (
            "Can't I just install a bunch of skills myself?",
            format!(
                "You could, but you'd be trading hours of work for a $99 shortcut. Rising Tides isn't \
                 just a skill collection — it's {skills} tools that have been security audited, tested \
                 for context efficiency, and organized for on-demand loading. If you install skills \
                 from random GitHub repos, you should be doing security audits on every skill, MCP, \
                 and plugin yourself. We've already done that work. This is a quality-of-life \
                 improvement that gives you vetted tools without the risk."
            ),
        ),
        (
            "What happens after I buy?",
            "You'll receive an email with an invite to the private GitHub repo and setup \
             instructions. For Done-With-You, you'll also get a Cal.com link to book your 45-minute \
             call."
                .into(),
        ),
    ]
}

/// Accordion of common questions. All answers are in the markup; the page
/// script only toggles which ones are expanded.
#[component]
pub fn Faq(metrics: Arc<ProductMetrics>) -> impl IntoView {
    let items = faqs(&metrics)
        .into_iter()
        .map(|(question, answer)| {
            view! {
                <div class="faq-item">
                    <button class="faq-question" data-faq-toggle="" aria-expanded="false">
                        <span>{question}</span>
                        <Icon path=ICON_CARET_DOWN />
                    </button>
                    <div class="faq-answer">
                        <p>{answer}</p>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="faq" class="section">
            <div class="container-tight">
                <div class="section-header" data-reveal="">
                    <p class="section-eyebrow">"FAQ"</p>
                </div>
                <div class="faq-list" data-reveal="">{items}</div>
            </div>
        </section>
    }
}
