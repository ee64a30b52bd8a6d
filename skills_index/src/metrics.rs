//! The validated, read-only view of the skills index.

use std::collections::HashSet;

use serde::Serialize;

use crate::document::SkillsIndexDocument;
use crate::error::IndexError;

/// One entry of the category map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub count: u64,
}

/// Product counts shown across the landing page.
///
/// Built once from a [`SkillsIndexDocument`] and never mutated. The number
/// of categories is not stored: [`ProductMetrics::categories_count`] is
/// always the length of the category list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductMetrics {
    skills: u64,
    plugins: u64,
    clis: u64,
    mcps: u64,
    categories: Vec<Category>,
}

/// Serializable snapshot of the five counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSummary {
    pub skills: u64,
    pub plugins: u64,
    pub clis: u64,
    pub mcps: u64,
    pub categories: usize,
}

impl ProductMetrics {
    /// Validate a raw document.
    pub fn from_document(doc: SkillsIndexDocument) -> Result<Self, IndexError> {
        let meta = doc.meta;
        let skills = non_negative("totalSkills", meta.total_skills)?;
        let plugins = non_negative("totalPlugins", meta.total_plugins)?;
        let clis = non_negative("totalCLIs", meta.total_clis)?;
        let mcps = non_negative("totalMCPs", meta.total_mcps)?;

        let entries = doc.categories.0;
        if let Some(idx) = entries.iter().position(|(name, _)| name.trim().is_empty()) {
            return Err(IndexError::BlankCategoryName { position: idx + 1 });
        }
        if let Some((name, count)) = entries.iter().find(|(_, count)| *count < 0) {
            return Err(IndexError::NegativeCategoryCount {
                name: name.clone(),
                value: *count,
            });
        }
        {
            let mut seen = HashSet::with_capacity(entries.len());
            if let Some((name, _)) = entries.iter().find(|(name, _)| !seen.insert(name.as_str())) {
                return Err(IndexError::DuplicateCategory { name: name.clone() });
            }
        }

        // every count is non-negative past this point
        let categories = entries
            .into_iter()
            .map(|(name, count)| Category {
                name,
                count: count.unsigned_abs(),
            })
            .collect();

        Ok(Self {
            skills,
            plugins,
            clis,
            mcps,
            categories,
        })
    }

    pub fn skills_count(&self) -> u64 {
        self.skills
    }

    pub fn plugins_count(&self) -> u64 {
        self.plugins
    }

    pub fn clis_count(&self) -> u64 {
        self.clis
    }

    pub fn mcps_count(&self) -> u64 {
        self.mcps
    }

    /// Number of distinct categories in the source document.
    pub fn categories_count(&self) -> usize {
        self.categories.len()
    }

    /// Categories in document order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Categories by item count, largest first. Ties keep document order.
    pub fn categories_by_count(&self) -> Vec<&Category> {
        let mut sorted: Vec<&Category> = self.categories.iter().collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            skills: self.skills,
            plugins: self.plugins,
            clis: self.clis,
            mcps: self.mcps,
            categories: self.categories_count(),
        }
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<u64, IndexError> {
    u64::try_from(value).map_err(|_| IndexError::NegativeCount { field, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{CategoryEntries, MetaCounts};
    use pretty_assertions::assert_eq;

    fn doc(categories: &[(&str, i64)]) -> SkillsIndexDocument {
        SkillsIndexDocument {
            meta: MetaCounts {
                total_skills: 187,
                total_plugins: 38,
                total_clis: 9,
                total_mcps: 18,
            },
            categories: CategoryEntries(
                categories
                    .iter()
                    .map(|(name, count)| (name.to_string(), *count))
                    .collect(),
            ),
        }
    }

    #[test]
    fn counts_categories_from_the_map() {
        let metrics =
            ProductMetrics::from_document(doc(&[("Backend", 7), ("Frontend", 7), ("CRO", 7)]))
                .unwrap();
        assert_eq!(metrics.categories_count(), 3);
        assert_eq!(metrics.skills_count(), 187);
    }

    #[test]
    fn zero_counts_are_valid() {
        let mut raw = doc(&[("Payments", 0)]);
        raw.meta.total_mcps = 0;
        let metrics = ProductMetrics::from_document(raw).unwrap();
        assert_eq!(metrics.mcps_count(), 0);
        assert_eq!(metrics.categories()[0].count, 0);
    }

    #[test]
    fn rejects_negative_meta_count() {
        let mut raw = doc(&[]);
        raw.meta.total_plugins = -3;
        let err = ProductMetrics::from_document(raw).unwrap_err();
        assert!(matches!(
            err,
            IndexError::NegativeCount {
                field: "totalPlugins",
                value: -3
            }
        ));
    }

    #[test]
    fn rejects_negative_category_count() {
        let err = ProductMetrics::from_document(doc(&[("Design", -1)])).unwrap_err();
        assert!(matches!(err, IndexError::NegativeCategoryCount { ref name, value: -1 } if name == "Design"));
    }

    #[test]
    fn rejects_blank_category_name() {
        let err = ProductMetrics::from_document(doc(&[("Design", 6), ("  ", 2)])).unwrap_err();
        assert!(matches!(err, IndexError::BlankCategoryName { position: 2 }));
    }

    #[test]
    fn rejects_duplicate_category() {
        let err =
            ProductMetrics::from_document(doc(&[("Design", 6), ("Workflow", 1), ("Design", 4)]))
                .unwrap_err();
        assert!(matches!(err, IndexError::DuplicateCategory { ref name } if name == "Design"));
    }

    #[test]
    fn blank_name_reported_before_later_duplicate() {
        let err = ProductMetrics::from_document(doc(&[("A", 1), ("A", 2), (" ", 3)])).unwrap_err();
        assert!(matches!(err, IndexError::BlankCategoryName { position: 3 }));
    }

    #[test]
    fn negative_count_reported_before_earlier_duplicate() {
        let err = ProductMetrics::from_document(doc(&[("A", 1), ("A", 2), ("B", -1)])).unwrap_err();
        assert!(matches!(err, IndexError::NegativeCategoryCount { ref name, value: -1 } if name == "B"));
    }

    #[test]
    fn categories_by_count_is_stable() {
        let metrics = ProductMetrics::from_document(doc(&[
            ("Payments", 1),
            ("Workflow", 11),
            ("Documentation", 11),
            ("Marketing & SEO", 16),
        ]))
        .unwrap();

        let order: Vec<&str> = metrics
            .categories_by_count()
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            order,
            vec!["Marketing & SEO", "Workflow", "Documentation", "Payments"]
        );
        // document order is untouched
        assert_eq!(metrics.categories()[0].name, "Payments");
    }

    #[test]
    fn summary_mirrors_accessors() {
        let metrics = ProductMetrics::from_document(doc(&[("Backend", 7)])).unwrap();
        assert_eq!(
            metrics.summary(),
            MetricsSummary {
                skills: 187,
                plugins: 38,
                clis: 9,
                mcps: 18,
                categories: 1,
            }
        );
    }
}
