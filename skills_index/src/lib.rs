//! # rising-tides-index
//!
//! Loader for `skills-index.json`, the static document that carries the
//! product counts shown on the Rising Tides landing page.
//!
//! The document is read once, validated, and turned into an immutable
//! [`ProductMetrics`]. Anything malformed (a missing key, a non-integer or
//! negative count, a repeated category) is an [`IndexError`], so a bad
//! document stops the build instead of rendering as blank or coerced copy.
//!
//! ```rust
//! use rising_tides_index::load_from_str;
//!
//! let metrics = load_from_str(r#"{
//!     "meta": {"totalSkills": 187, "totalPlugins": 38, "totalCLIs": 9, "totalMCPs": 18},
//!     "categories": {"Backend": 7, "Frontend": 7}
//! }"#).unwrap();
//!
//! assert_eq!(metrics.skills_count(), 187);
//! assert_eq!(metrics.categories_count(), 2);
//! ```

pub mod document;
mod error;
mod loader;
mod metrics;

pub use document::{CategoryEntries, MetaCounts, SkillsIndexDocument};
pub use error::IndexError;
pub use loader::{load_from_path, load_from_reader, load_from_str};
pub use metrics::{Category, MetricsSummary, ProductMetrics};
