//! # rt-landing
//!
//! Build-time generator for the Rising Tides landing page.
//!
//! ```bash
//! # Render dist/index.html and dist/success/index.html
//! rt-landing build --index data/skills-index.json --out dist
//!
//! # CI gate: validate the index and print its counts
//! rt-landing check --json
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rising_tides_index::ProductMetrics;
use tracing::info;

use rising_tides_landing::build_site;
use rising_tides_landing::config::SiteConfig;

#[derive(Parser, Debug)]
#[command(name = "rt-landing")]
#[command(about = "Static site generator for the Rising Tides Skills Pack landing page")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the landing and success pages into an output directory
    Build {
        /// Path to skills-index.json
        #[arg(long, default_value = "data/skills-index.json")]
        index: PathBuf,

        /// Output directory
        #[arg(long, default_value = "dist")]
        out: PathBuf,

        /// Site config file (default: ./rising-tides.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate skills-index.json and print the derived counts
    Check {
        /// Path to skills-index.json
        #[arg(long, default_value = "data/skills-index.json")]
        index: PathBuf,

        /// Print counts as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match args.command {
        Command::Build { index, out, config } => run_build(&index, &out, config.as_deref()),
        Command::Check { index, json } => run_check(&index, json),
    }
}

/// The one place the index is read. Everything downstream shares the `Arc`.
fn load_metrics(index: &Path) -> Result<Arc<ProductMetrics>> {
    let metrics = rising_tides_index::load_from_path(index)
        .with_context(|| format!("Invalid skills index {}", index.display()))?;
    Ok(Arc::new(metrics))
}

fn run_build(index: &Path, out: &Path, config: Option<&Path>) -> Result<()> {
    let metrics = load_metrics(index)?;
    let config = match config {
        Some(path) => SiteConfig::load_from_path(path)?,
        None => {
            let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
            SiteConfig::load(&cwd)
        }
    };

    let report = build_site(metrics, &config, out)?;
    for page in &report.pages {
        println!("wrote {}", page.display());
    }
    if !report.video_included {
        println!("promo video not found, video section omitted");
    }
    Ok(())
}

fn run_check(index: &Path, json: bool) -> Result<()> {
    let metrics = load_metrics(index)?;
    let summary = metrics.summary();
    info!("{} is valid", index.display());

    if json {
        let out = serde_json::to_string_pretty(&summary).context("Failed to serialize counts")?;
        println!("{out}");
    } else {
        println!(
            "{} skills, {} plugins, {} CLIs, {} MCPs, {} categories",
            summary.skills, summary.plugins, summary.clis, summary.mcps, summary.categories
        );
    }
    Ok(())
}
