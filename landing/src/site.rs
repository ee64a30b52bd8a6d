//! Writes the rendered pages to an output directory.
//!
//! Layout mirrors the routes the site is served under:
//!
//! ```text
//! <out>/index.html           /
//! <out>/success/index.html   /success
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use rising_tides_index::ProductMetrics;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::SiteConfig;
use crate::{render_landing_page, render_success};

/// What a build produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildReport {
    /// Written files, landing page first.
    pub pages: Vec<PathBuf>,
    /// Whether the promo video section made it into the landing page.
    pub video_included: bool,
}

/// Render both pages and write them under `out_dir`.
///
/// Both documents are rendered before anything touches the disk.
pub fn build_site(
    metrics: Arc<ProductMetrics>,
    config: &SiteConfig,
    out_dir: &Path,
) -> Result<BuildReport> {
    let video_included = config.assets.video_available();
    let landing = render_landing_page(metrics, config, video_included);
    let success = render_success(config);

    let pages = vec![
        write_page(&out_dir.join("index.html"), &landing)?,
        write_page(&out_dir.join("success").join("index.html"), &success)?,
    ];

    info!(
        "built {} pages into {} (video: {})",
        pages.len(),
        out_dir.display(),
        if video_included { "yes" } else { "omitted" }
    );
    Ok(BuildReport {
        pages,
        video_included,
    })
}

fn write_page(path: &Path, html: &str) -> Result<PathBuf> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("wrote {} ({} bytes)", path.display(), html.len());
    Ok(path.to_path_buf())
}
