//! Load and validation failures for the skills index.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between reading `skills-index.json` and
/// handing out a [`crate::ProductMetrics`].
///
/// None of these are recoverable at render time: a page must never show a
/// count that did not come out of a valid document.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to read skills index {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Syntax errors, missing keys, and non-integer counts.
    #[error("skills index {origin} is malformed: {source}")]
    Malformed {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("`meta.{field}` must be a non-negative integer, got {value}")]
    NegativeCount { field: &'static str, value: i64 },

    #[error("category `{name}` must have a non-negative item count, got {value}")]
    NegativeCategoryCount { name: String, value: i64 },

    #[error("category #{position} has a blank name")]
    BlankCategoryName { position: usize },

    #[error("category `{name}` is listed more than once")]
    DuplicateCategory { name: String },
}

impl IndexError {
    /// True for failures of the document itself (as opposed to I/O).
    pub fn is_validation(&self) -> bool {
        !matches!(self, IndexError::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_count_names_wire_key() {
        let err = IndexError::NegativeCount {
            field: "totalSkills",
            value: -1,
        };
        assert_eq!(
            err.to_string(),
            "`meta.totalSkills` must be a non-negative integer, got -1"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn io_error_mentions_path() {
        let err = IndexError::Io {
            path: PathBuf::from("data/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("data/missing.json"));
        assert!(!err.is_validation());
    }
}
