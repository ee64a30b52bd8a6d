//! Root document shell shared by every page: `<head>` metadata, inline
//! stylesheet, background layer and the interaction script.

use leptos::prelude::*;
use leptos::tachys::html::attribute::custom::CustomAttribute;
use rising_tides_index::ProductMetrics;

use crate::config::SiteConfig;
use crate::styles::LANDING_CSS;

const KEYWORDS: &str = "Claude Code, AI coding, skills pack, MCP plugins, developer tools";

/// Per-page `<head>` content.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// OpenGraph description (shorter than `description`)
    pub og_description: String,
    pub twitter_title: String,
    pub twitter_description: String,
    /// Keep the page out of search indexes.
    pub noindex: bool,
}

impl PageMeta {
    pub fn landing(metrics: &ProductMetrics) -> Self {
        let skills = metrics.skills_count();
        let plugins = metrics.plugins_count();
        let mcps = metrics.mcps_count();
        Self {
            title: format!("Rising Tides Skills Pack — {skills} Skills for Claude Code"),
            description: format!(
                "{skills} curated skills, {plugins} plugins, {mcps} MCPs for Claude Code. One install. \
                 ~7% context cost. Ship faster with the most comprehensive Claude Code enhancement pack."
            ),
            og_description: format!(
                "{skills} curated skills, {plugins} plugins, {mcps} MCPs. One install. Ship faster."
            ),
            twitter_title: "Rising Tides Skills Pack".into(),
            twitter_description: format!(
                "{skills} curated skills for Claude Code. One install. Ship faster."
            ),
            noindex: false,
        }
    }

    pub fn success() -> Self {
        Self {
            title: "You're in! — Rising Tides Skills Pack".into(),
            description: "Thanks for your purchase. Here's what happens next.".into(),
            og_description: "Welcome to Rising Tides.".into(),
            twitter_title: "Rising Tides Skills Pack".into(),
            twitter_description: "Welcome to Rising Tides.".into(),
            noindex: true,
        }
    }
}

/// The complete HTML document around a page body.
#[component]
pub fn PageDocument(meta: PageMeta, config: SiteConfig, children: Children) -> impl IntoView {
    let PageMeta {
        title,
        description,
        og_description,
        twitter_title,
        twitter_description,
        noindex,
    } = meta;
    let og_title = title.clone();
    let og_url = config.site.url.clone();
    let assets = config.assets;

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <meta name="description" content=description />
                <meta name="keywords" content=KEYWORDS />
                <meta name="author" content=config.site.author />
                {noindex.then(|| view! { <meta name="robots" content="noindex" /> })}
                <link rel="icon" type="image/svg+xml" href=assets.favicon />
                <link rel="apple-touch-icon" href=assets.apple_touch_icon />
                {og_meta("og:title", og_title)}
                {og_meta("og:description", og_description)}
                {og_meta("og:type", "website".to_string())}
                {og_url.map(|url| og_meta("og:url", url))}
                <meta name="twitter:card" content="summary_large_image" />
                <meta name="twitter:title" content=twitter_title />
                <meta name="twitter:description" content=twitter_description />
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <div class="sun-rays" aria-hidden="true"></div>
                {children()}
                <script>{APP_SCRIPT}</script>
            </body>
        </html>
    }
}

/// OpenGraph tags are keyed by `property`, which `view!` has no slot for
/// on `<meta>`, so they go through the element builder.
fn og_meta(property: &'static str, content: String) -> impl IntoView {
    leptos::html::meta()
        .attr("property", property)
        .attr("content", content)
}

/// Page interactivity: navbar scroll state, mobile menu, FAQ accordion,
/// demo terminal reveal and scroll-triggered entrances.
pub const APP_SCRIPT: &str = r#"
(() => {
  document.documentElement.classList.add('js');

  // 1. Navbar background once the page scrolls
  const nav = document.querySelector('[data-role="nav"]');
  const onScroll = () => {
    if (nav) nav.classList.toggle('scrolled', window.scrollY > 20);
  };
  window.addEventListener('scroll', onScroll, { passive: true });
  onScroll();

  // 2. Mobile menu
  const menuToggle = document.querySelector('[data-role="menu-toggle"]');
  const setMenu = (open) => {
    if (!nav) return;
    nav.classList.toggle('open', open);
    if (menuToggle) menuToggle.setAttribute('aria-expanded', open ? 'true' : 'false');
  };
  if (menuToggle) {
    menuToggle.addEventListener('click', () => setMenu(!nav.classList.contains('open')));
  }
  document.querySelectorAll('[data-role="menu-link"]').forEach(link => {
    link.addEventListener('click', () => setMenu(false));
  });

  // 3. FAQ accordion
  document.querySelectorAll('[data-faq-toggle]').forEach(btn => {
    btn.addEventListener('click', () => {
      const item = btn.closest('.faq-item');
      if (!item) return;
      const open = !item.classList.contains('open');
      item.classList.toggle('open', open);
      btn.setAttribute('aria-expanded', open ? 'true' : 'false');
    });
  });

  const observe = (el, onVisible) => {
    if (!('IntersectionObserver' in window)) {
      onVisible();
      return;
    }
    const io = new IntersectionObserver(entries => {
      if (entries.some(e => e.isIntersecting)) {
        io.disconnect();
        onVisible();
      }
    }, { rootMargin: '-100px' });
    io.observe(el);
  };

  // 4. Demo terminal: reveal one line every 400ms once in view
  const demo = document.querySelector('[data-role="demo-terminal"]');
  if (demo) {
    const lines = Array.from(demo.querySelectorAll('[data-demo-line]'));
    lines.forEach(line => line.classList.add('pending'));
    observe(demo, () => {
      let shown = 0;
      const timer = setInterval(() => {
        if (shown >= lines.length) {
          clearInterval(timer);
          return;
        }
        lines[shown].classList.remove('pending');
        shown += 1;
      }, 400);
    });
  }

  // 5. Entrance animations
  document.querySelectorAll('[data-reveal]').forEach(el => {
    observe(el, () => el.classList.add('revealed'));
  });
})();
"#;
