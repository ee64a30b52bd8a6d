//! Contract tests for the skills index loader.
//!
//! These pin down the behaviour every page depends on: counts come straight
//! from the document, the category total is derived from the map, and a bad
//! document never makes it past loading.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rising_tides_index::{IndexError, ProductMetrics, load_from_path, load_from_str};
use serde_json::{Value, json};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/skills-index.json")
}

fn fixture_value() -> Value {
    let raw = std::fs::read_to_string(fixture_path()).expect("read fixture");
    serde_json::from_str(&raw).expect("fixture is JSON")
}

fn load_value(value: &Value) -> Result<ProductMetrics, IndexError> {
    load_from_str(&value.to_string())
}

#[test]
fn reference_document_counts() {
    let metrics = load_from_path(fixture_path()).expect("fixture is valid");

    assert_eq!(metrics.skills_count(), 187);
    assert_eq!(metrics.plugins_count(), 38);
    assert_eq!(metrics.clis_count(), 9);
    assert_eq!(metrics.mcps_count(), 18);
    assert_eq!(metrics.categories_count(), 13);
}

#[test]
fn category_count_tracks_the_map() {
    for size in [0usize, 1, 5, 40] {
        let categories: serde_json::Map<String, Value> = (0..size)
            .map(|i| (format!("Category {i}"), json!(i)))
            .collect();
        let doc = json!({
            "meta": {"totalSkills": 1, "totalPlugins": 1, "totalCLIs": 1, "totalMCPs": 1},
            "categories": categories,
        });

        let metrics = load_value(&doc).expect("valid document");
        assert_eq!(metrics.categories_count(), size);
        assert_eq!(metrics.categories().len(), size);
    }
}

#[test]
fn loading_twice_is_identical() {
    let first = load_from_path(fixture_path()).unwrap();
    let second = load_from_path(fixture_path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.summary(), second.summary());
    // accessors are stable within one value too
    assert_eq!(first.categories_count(), first.categories_count());
}

#[test]
fn removing_a_category_only_changes_category_count() {
    let full = load_value(&fixture_value()).unwrap();

    let mut trimmed = fixture_value();
    trimmed["categories"]
        .as_object_mut()
        .expect("categories object")
        .remove("Payments");
    let trimmed = load_value(&trimmed).unwrap();

    assert_eq!(trimmed.categories_count(), 12);
    assert_eq!(trimmed.skills_count(), full.skills_count());
    assert_eq!(trimmed.plugins_count(), full.plugins_count());
    assert_eq!(trimmed.clis_count(), full.clis_count());
    assert_eq!(trimmed.mcps_count(), full.mcps_count());
}

#[test]
fn empty_category_map_is_zero_not_an_error() {
    let mut doc = fixture_value();
    doc["categories"] = json!({});

    let metrics = load_value(&doc).expect("empty map is valid");
    assert_eq!(metrics.categories_count(), 0);
    assert!(metrics.categories_by_count().is_empty());
}

#[test]
fn negative_skill_count_is_rejected() {
    let mut doc = fixture_value();
    doc["meta"]["totalSkills"] = json!(-1);

    let err = load_value(&doc).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("totalSkills"), "got: {err}");
}

#[test]
fn every_missing_meta_key_is_rejected() {
    for key in ["totalSkills", "totalPlugins", "totalCLIs", "totalMCPs"] {
        let mut doc = fixture_value();
        doc["meta"].as_object_mut().unwrap().remove(key);

        let err = load_value(&doc).unwrap_err();
        assert!(matches!(err, IndexError::Malformed { .. }), "{key}: {err}");
        assert!(err.to_string().contains(key), "{key}: {err}");
    }
}

#[test]
fn missing_categories_is_rejected() {
    let mut doc = fixture_value();
    doc.as_object_mut().unwrap().remove("categories");

    let err = load_value(&doc).unwrap_err();
    assert!(err.to_string().contains("categories"), "got: {err}");
}

#[test]
fn non_integer_counts_are_rejected() {
    for bad in [json!("187"), json!(18.5), Value::Null] {
        let mut doc = fixture_value();
        doc["meta"]["totalMCPs"] = bad.clone();

        let err = load_value(&doc).unwrap_err();
        assert!(matches!(err, IndexError::Malformed { .. }), "{bad}: {err}");
    }
}

#[test]
fn duplicate_category_in_source_text_is_rejected() {
    let raw = r#"{
        "meta": {"totalSkills": 187, "totalPlugins": 38, "totalCLIs": 9, "totalMCPs": 18},
        "categories": {"Backend": 7, "Frontend": 7, "Backend": 2}
    }"#;

    let err = load_from_str(raw).unwrap_err();
    assert!(matches!(err, IndexError::DuplicateCategory { ref name } if name == "Backend"));
}

#[test]
fn display_order_follows_counts() {
    let metrics = load_from_path(fixture_path()).unwrap();
    let ordered: Vec<(&str, u64)> = metrics
        .categories_by_count()
        .into_iter()
        .map(|c| (c.name.as_str(), c.count))
        .collect();

    assert_eq!(ordered.first(), Some(&("Marketing & SEO", 16)));
    assert_eq!(ordered.last(), Some(&("Payments", 1)));
    // Documentation precedes Workflow in the file and both have 11
    let doc_idx = ordered.iter().position(|(n, _)| *n == "Documentation").unwrap();
    let wf_idx = ordered.iter().position(|(n, _)| *n == "Workflow").unwrap();
    assert!(doc_idx < wf_idx);
}
