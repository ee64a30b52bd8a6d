// Landing page - every section in display order
use std::sync::Arc;

use leptos::prelude::*;
use rising_tides_index::ProductMetrics;

use crate::config::SiteConfig;
use crate::sections::{
    Categories, Comparison, Cta, Demo, Faq, Features, Footer, Hero, HowItWorks, Nav, Pricing,
    Problem, VideoHero,
};

#[component]
fn Divider() -> impl IntoView {
    view! { <div class="section-divider container" aria-hidden="true"></div> }
}

/// `show_video` is false when the promo video asset is missing; the video
/// block is then left out with no placeholder.
#[component]
pub fn LandingPage(
    metrics: Arc<ProductMetrics>,
    config: SiteConfig,
    show_video: bool,
) -> impl IntoView {
    let SiteConfig {
        links,
        checkout,
        assets,
        ..
    } = config;

    view! {
        <Nav links=links.clone() />
        <main>
            <Hero metrics=metrics.clone() />
            <Divider />
            <Problem />
            <Divider />
            <Features metrics=metrics.clone() />
            <Divider />
            <Demo />
            {show_video.then(|| view! { <VideoHero assets=assets /> })}
            <Divider />
            <HowItWorks />
            <Divider />
            <Categories metrics=metrics.clone() />
            <Divider />
            <Comparison metrics=metrics.clone() />
            <Divider />
            <Pricing metrics=metrics.clone() checkout=checkout links=links.clone() />
            <Divider />
            <Faq metrics=metrics.clone() />
            <Cta metrics=metrics />
        </main>
        <Footer links=links />
    }
}
