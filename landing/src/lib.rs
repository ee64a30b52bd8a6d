//! # rising-tides-landing
//!
//! Static site generator for the Rising Tides Skills Pack landing page.
//!
//! Pages are Leptos components rendered once on the server side with
//! `RenderHtml::to_html`, so the output is plain HTML with an inline
//! stylesheet and a small interaction script. No hydration, no runtime.
//!
//! Product counts come from [`ProductMetrics`], loaded once from
//! `skills-index.json` by the `rising-tides-index` crate and shared by every
//! section through an `Arc`.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rising_tides_landing::{config::SiteConfig, render_landing};
//!
//! let metrics = Arc::new(rising_tides_index::load_from_path("data/skills-index.json")?);
//! let html = render_landing(metrics, &SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

pub mod config;
pub mod document;
pub mod icons;
pub mod pages;
pub mod sections;
pub mod site;
pub mod styles;

use std::sync::Arc;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use rising_tides_index::ProductMetrics;

use config::SiteConfig;
use document::{PageDocument, PageMeta};
use pages::{LandingPage, SuccessPage};

pub use site::{BuildReport, build_site};

/// Render the landing page as a complete HTML document.
///
/// The promo video section is included unless
/// [`AssetsConfig::video_available`](config::AssetsConfig::video_available)
/// reports the asset missing.
pub fn render_landing(metrics: Arc<ProductMetrics>, config: &SiteConfig) -> String {
    let show_video = config.assets.video_available();
    render_landing_page(metrics, config, show_video)
}

pub(crate) fn render_landing_page(
    metrics: Arc<ProductMetrics>,
    config: &SiteConfig,
    show_video: bool,
) -> String {
    let meta = PageMeta::landing(&metrics);
    let page_config = config.clone();
    let doc = view! {
        <PageDocument meta=meta config=config.clone()>
            <LandingPage metrics=metrics config=page_config show_video=show_video />
        </PageDocument>
    };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

/// Render the post-purchase success page. It shows no product counts.
pub fn render_success(config: &SiteConfig) -> String {
    let page_config = config.clone();
    let doc = view! {
        <PageDocument meta=PageMeta::success() config=config.clone()>
            <SuccessPage config=page_config />
        </PageDocument>
    };

    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AssetsConfig;
    use tempfile::TempDir;

    const INDEX: &str = include_str!("../../data/skills-index.json");

    fn metrics() -> Arc<ProductMetrics> {
        Arc::new(rising_tides_index::load_from_str(INDEX).expect("valid index"))
    }

    fn config_without_video(dir: &TempDir) -> SiteConfig {
        SiteConfig {
            assets: AssetsConfig {
                public_dir: Some(dir.path().to_path_buf()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn renders_landing_document() {
        let html = render_landing(metrics(), &SiteConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\""));
        assert!(html.contains("Stop building skills."));
        assert!(html.contains("data-role=\"demo-terminal\""));
        assert!(!html.contains("noindex"));
    }

    #[test]
    fn opengraph_tags_use_property() {
        let mut config = SiteConfig::default();
        config.site.url = Some("https://risingtides.example".into());
        let html = render_landing(metrics(), &config);

        assert!(html.contains("<meta property=\"og:title\""));
        assert!(html.contains("<meta property=\"og:description\""));
        assert!(html.contains("<meta property=\"og:type\" content=\"website\""));
        assert!(html.contains(
            "<meta property=\"og:url\" content=\"https://risingtides.example\""
        ));
        assert!(!html.contains("name=\"og:"));
        // twitter cards stay keyed by name
        assert!(html.contains("<meta name=\"twitter:card\""));
    }

    #[test]
    fn og_url_omitted_without_site_url() {
        let html = render_landing(metrics(), &SiteConfig::default());
        assert!(!html.contains("og:url"));
    }

    #[test]
    fn counts_flow_into_copy() {
        let html = render_landing(metrics(), &SiteConfig::default());

        assert!(html.contains("187 skills • 38 plugins • 18 MCPs"));
        assert!(html.contains("187 skills across 13 categories"));
        assert!(html.contains("38 MCP plugins"));
        assert!(html.contains("9 CLI integrations"));
        assert!(html.contains("All 187 production-ready skills"));
        assert!(html.contains("187 skills. 38 plugins. ~7% context. One command."));
        assert!(html.contains("187 curated, tested, indexed"));
    }

    #[test]
    fn different_counts_change_every_mention() {
        let metrics = Arc::new(
            rising_tides_index::load_from_str(
                r#"{"meta":{"totalSkills":200,"totalPlugins":40,"totalCLIs":10,"totalMCPs":20},
                    "categories":{"Backend":150,"Frontend":50}}"#,
            )
            .expect("valid index"),
        );
        let html = render_landing(metrics, &SiteConfig::default());

        assert!(html.contains("200 skills • 40 plugins • 20 MCPs"));
        assert!(html.contains("200 skills across 2 categories"));
        assert!(html.contains("40 MCP plugins"));
        assert!(html.contains("10 CLI integrations"));
        assert!(!html.contains("187"));
    }

    #[test]
    fn category_chips_largest_first() {
        let html = render_landing(metrics(), &SiteConfig::default());

        let documentation = html.find(">Documentation<").expect("Documentation chip");
        let workflow = html.find(">Workflow<").expect("Workflow chip");
        let backend = html.find(">Backend<").expect("Backend chip");
        let payments = html.find(">Payments<").expect("Payments chip");
        assert!(documentation < workflow);
        assert!(workflow < backend);
        assert!(backend < payments);
    }

    #[test]
    fn checkout_links_are_configurable() {
        let mut config = SiteConfig::default();
        config.checkout.team = "https://pay.example.com/team".into();
        let html = render_landing(metrics(), &config);

        assert!(html.contains("href=\"https://pay.example.com/team\""));
        assert!(html.contains("https://buy.stripe.com/3cI00j5eQcfh6el3qnf3a04"));
        assert!(html.contains("https://buy.stripe.com/5kQeVd7mYgvx5ah6Czf3a06"));
    }

    #[test]
    fn video_section_present_by_default() {
        let html = render_landing(metrics(), &SiteConfig::default());
        assert!(html.contains("<video"));
        assert!(html.contains("playsinline"));
        assert!(html.contains("See the full skills pack in action"));
    }

    #[test]
    fn missing_video_drops_section() {
        let temp = TempDir::new().expect("temp dir");
        let html = render_landing(metrics(), &config_without_video(&temp));

        assert!(!html.contains("<video"));
        assert!(!html.contains("See the full skills pack in action"));
        // the rest of the page still renders
        assert!(html.contains("One purchase. Lifetime access."));
    }

    #[test]
    fn success_page_is_static_and_noindex() {
        let html = render_success(&SiteConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Receipt on the way"));
        assert!(html.contains("Accept your GitHub invite"));
        assert!(html.contains("Done-With-You bonus"));
        assert!(html.contains("content=\"noindex\""));
        assert!(html.contains("href=\"mailto:nick@sunsetsystems.co\""));
        assert!(!html.contains("187"));
    }
}
