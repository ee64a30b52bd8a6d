//! Wire schema of `skills-index.json`.
//!
//! The file is produced by the content-authoring pipeline, so this module
//! accepts its shape exactly and ignores keys it does not know about:
//!
//! ```json
//! {
//!   "meta": { "totalSkills": 187, "totalPlugins": 38, "totalCLIs": 9, "totalMCPs": 18 },
//!   "categories": { "Marketing & SEO": 16, "Documentation": 11 }
//! }
//! ```
//!
//! Counts are decoded as signed integers and checked in
//! [`crate::ProductMetrics::from_document`], so a negative value is reported
//! against its key instead of surfacing as a generic type error.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// The raw document, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillsIndexDocument {
    pub meta: MetaCounts,
    pub categories: CategoryEntries,
}

/// Headline totals from the `meta` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MetaCounts {
    #[serde(rename = "totalSkills")]
    pub total_skills: i64,
    #[serde(rename = "totalPlugins")]
    pub total_plugins: i64,
    #[serde(rename = "totalCLIs")]
    pub total_clis: i64,
    #[serde(rename = "totalMCPs")]
    pub total_mcps: i64,
}

/// Category name/count pairs in document order.
///
/// Duplicate keys are kept rather than collapsed, so validation can reject
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryEntries(pub Vec<(String, i64)>);

impl CategoryEntries {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

impl<'de> Deserialize<'de> for CategoryEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CategoryEntriesVisitor)
    }
}

struct CategoryEntriesVisitor;

impl<'de> Visitor<'de> for CategoryEntriesVisitor {
    type Value = CategoryEntries;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping category names to item counts")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, count)) = access.next_entry::<String, i64>()? {
            entries.push((name, count));
        }
        Ok(CategoryEntries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_document_order() {
        let doc: SkillsIndexDocument = serde_json::from_str(
            r#"{
                "meta": {"totalSkills": 3, "totalPlugins": 2, "totalCLIs": 1, "totalMCPs": 0},
                "categories": {"Workflow": 2, "Backend": 7, "Architecture": 6}
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = doc.categories.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Workflow", "Backend", "Architecture"]);
    }

    #[test]
    fn keeps_duplicate_keys() {
        let entries: CategoryEntries =
            serde_json::from_str(r#"{"Design": 6, "Design": 4}"#).unwrap();
        assert_eq!(
            entries.0,
            vec![("Design".to_string(), 6), ("Design".to_string(), 4)]
        );
    }

    #[test]
    fn ignores_unknown_keys() {
        let doc: SkillsIndexDocument = serde_json::from_str(
            r#"{
                "version": "2.1.0",
                "meta": {"totalSkills": 1, "totalPlugins": 0, "totalCLIs": 0, "totalMCPs": 0, "generatedAt": "2026-01-01"},
                "categories": {},
                "skills": [{"name": "seo-audit"}]
            }"#,
        )
        .unwrap();
        assert_eq!(doc.meta.total_skills, 1);
        assert!(doc.categories.is_empty());
    }

    #[test]
    fn rejects_non_object_categories() {
        let err = serde_json::from_str::<CategoryEntries>(r#"["Design"]"#).unwrap_err();
        assert!(
            err.to_string()
                .contains("an object mapping category names to item counts")
        );
    }

    #[test]
    fn rejects_fractional_counts() {
        let err = serde_json::from_str::<MetaCounts>(
            r#"{"totalSkills": 1.5, "totalPlugins": 0, "totalCLIs": 0, "totalMCPs": 0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid type"));
    }
}
