// Post-checkout confirmation page
use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::icons::{ICON_ARROW_RIGHT, ICON_CALENDAR, ICON_CHECK_CIRCLE, Icon};

/// Static "what happens next" page. Takes no product data.
#[component]
pub fn SuccessPage(config: SiteConfig) -> impl IntoView {
    let links = config.links;
    let mailto = links.mailto();
    let email = links.contact_email.clone();

    view! {
        <main class="success">
            <div class="success-glow" aria-hidden="true"></div>
            <div class="container-tight success-inner">
                <div class="success-badge">
                    <Icon path=ICON_CHECK_CIRCLE size="48" class="icon-green" />
                </div>

                <h1 class="success-title">"You're in!"</h1>
                <p class="success-lead">"Welcome to Rising Tides. Here's what happens next."</p>

                <div class="next-steps">
                    <div class="next-step">
                        <div class="next-step-marker amber">"1"</div>
                        <div>
                            <h3>"Receipt on the way"</h3>
                            <p>
                                "Stripe will send your receipt within a few minutes. Check your inbox (and spam folder)."
                            </p>
                        </div>
                    </div>
                    <div class="next-step">
                        <div class="next-step-marker purple">"2"</div>
                        <div>
                            <h3>"Check your email for your license key"</h3>
                            <p>
                                "Your welcome email with license key and setup instructions is on the way from "
                                <strong>{email.clone()}</strong>
                                ". Check your spam folder if you don't see it."
                            </p>
                        </div>
                    </div>
                    <div class="next-step">
                        <div class="next-step-marker green">"3"</div>
                        <div>
                            <h3>"Accept your GitHub invite"</h3>
                            <p>
                                "You'll also receive a repo invite from "
                                <strong>"github.com"</strong>
                                ". Accept it to access the private Rising Tides repo."
                            </p>
                        </div>
                    </div>
                    <div class="next-step">
                        <div class="next-step-marker blue">
                            <Icon path=ICON_CALENDAR />
                        </div>
                        <div>
                            <h3>"Done-With-You bonus"</h3>
                            <p>
                                "Purchased Done-With-You? Your email includes a Calendly link to book your 30-minute setup call with Nick."
                            </p>
                        </div>
                    </div>
                </div>

                <div class="success-actions">
                    <a href=links.community class="btn btn-primary" target="_blank" rel="noopener noreferrer">
                        "Join the Community"
                        <Icon path=ICON_ARROW_RIGHT size="16" />
                    </a>
                    <a href="/" class="btn btn-secondary">"Back to Home"</a>
                </div>

                <div class="support-note">
                    <p>
                        <strong>"Didn't get your GitHub invite within 24 hours?"</strong>
                        " Email "
                        <a href=mailto>{email}</a>
                        " with your order confirmation and GitHub username. We'll get you access right away."
                    </p>
                </div>
            </div>
        </main>
    }
}
