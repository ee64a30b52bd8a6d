//! Entry points that turn bytes into [`ProductMetrics`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::document::SkillsIndexDocument;
use crate::error::IndexError;
use crate::metrics::ProductMetrics;

const INLINE_ORIGIN: &str = "<inline>";
const READER_ORIGIN: &str = "<reader>";

/// Parse and validate a document held in memory.
pub fn load_from_str(json: &str) -> Result<ProductMetrics, IndexError> {
    let doc = serde_json::from_str(json).map_err(|source| IndexError::Malformed {
        origin: INLINE_ORIGIN.to_string(),
        source,
    })?;
    finish(doc, INLINE_ORIGIN)
}

/// Parse and validate a document from any reader.
pub fn load_from_reader<R: Read>(reader: R) -> Result<ProductMetrics, IndexError> {
    let doc = serde_json::from_reader(reader).map_err(|source| IndexError::Malformed {
        origin: READER_ORIGIN.to_string(),
        source,
    })?;
    finish(doc, READER_ORIGIN)
}

/// Read, parse, and validate the document at `path`.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ProductMetrics, IndexError> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    debug!("reading skills index from {}", origin);

    let file = File::open(path).map_err(|source| IndexError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        IndexError::Malformed {
            origin: origin.clone(),
            source,
        }
    })?;
    finish(doc, &origin)
}

fn finish(doc: SkillsIndexDocument, origin: &str) -> Result<ProductMetrics, IndexError> {
    let metrics = ProductMetrics::from_document(doc)?;
    info!(
        "skills index {}: {} skills, {} plugins, {} CLIs, {} MCPs, {} categories",
        origin,
        metrics.skills_count(),
        metrics.plugins_count(),
        metrics.clis_count(),
        metrics.mcps_count(),
        metrics.categories_count()
    );
    Ok(metrics)
}
