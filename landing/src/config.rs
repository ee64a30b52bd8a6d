//! Site configuration.
//!
//! Loads optional `rising-tides.toml` from the project root. Every key has a
//! default matching the live site, so a missing file renders the production
//! page.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

/// File name looked up by [`SiteConfig::load`].
pub const CONFIG_FILE_NAME: &str = "rising-tides.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteMeta,
    pub links: SiteLinks,
    pub checkout: CheckoutLinks,
    pub assets: AssetsConfig,
}

/// Page-level metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    /// Canonical base URL, emitted as `og:url` when set.
    pub url: Option<String>,
    pub author: String,
}

/// Outbound links shared by nav, pricing, footer and the success page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteLinks {
    pub community: String,
    /// Community "about" page, linked from pricing features.
    pub community_about: String,
    pub github: String,
    pub contact_email: String,
}

/// Hosted checkout pages, one per plan. Opaque to this crate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CheckoutLinks {
    pub pro: String,
    pub done_with_you: String,
    pub team: String,
}

/// Public asset paths as referenced from the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub video: String,
    pub poster: String,
    pub favicon: String,
    pub apple_touch_icon: String,
    /// Directory the asset paths resolve against. When set, the promo
    /// video is checked for existence and its section is dropped if absent.
    pub public_dir: Option<PathBuf>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            url: None,
            author: "Rising Tides".into(),
        }
    }
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self {
            community: "https://www.skool.com/rising-tides-9034".into(),
            community_about: "https://www.skool.com/rising-tides-9034/about".into(),
            github: "https://github.com/SunsetSystemsAI".into(),
            contact_email: "nick@sunsetsystems.co".into(),
        }
    }
}

impl Default for CheckoutLinks {
    fn default() -> Self {
        Self {
            pro: "https://buy.stripe.com/3cI00j5eQcfh6el3qnf3a04".into(),
            done_with_you: "https://buy.stripe.com/5kQeVd7mYgvx5ah6Czf3a06".into(),
            team: "https://buy.stripe.com/9B64gzgXy4MP8mtaSPf3a05".into(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            video: "/video/rising-tides-promo.mp4".into(),
            poster: "/video/poster.png".into(),
            favicon: "/favicon.svg".into(),
            apple_touch_icon: "/apple-touch-icon.png".into(),
            public_dir: None,
        }
    }
}

impl SiteLinks {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

impl AssetsConfig {
    /// Whether the promo video can be shown.
    ///
    /// Without a `public_dir` there is nothing to check against and the
    /// video is assumed to be served alongside the page.
    pub fn video_available(&self) -> bool {
        match &self.public_dir {
            None => true,
            Some(dir) => {
                let path = dir.join(self.video.trim_start_matches('/'));
                let found = path.is_file();
                if !found {
                    warn!(
                        "promo video not found at {}, video section will be omitted",
                        path.display()
                    );
                }
                found
            }
        }
    }
}

impl SiteConfig {
    /// Load config from `rising-tides.toml` in the given root directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, root.display());
            return Self::default();
        }

        match Self::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path. Unlike [`SiteConfig::load`], a
    /// missing or unparsable file is an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read site config {}", path.display()))?;
        let config: SiteConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse site config {}", path.display()))?;
        debug!("loaded site config from {}", path.display());
        Ok(config)
    }
}
