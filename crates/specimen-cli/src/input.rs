//! Loading specimen collections and filter criteria from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use specimen_filter::FilterCriteria;
use specimen_model::SpecimenRecord;
use tracing::info;

/// Load a JSON collection.
///
/// The file holds an array of records, or `null` for a collection that has
/// not been loaded yet; the latter yields `None`.
pub fn load_collection(path: &Path) -> Result<Option<Vec<SpecimenRecord>>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read specimen collection {}", path.display()))?;
    let collection = parse_collection(&text)
        .with_context(|| format!("parse specimen collection {}", path.display()))?;
    match &collection {
        Some(records) => info!(
            path = %path.display(),
            records = records.len(),
            "Loaded specimen collection"
        ),
        None => info!(path = %path.display(), "Specimen collection is not loaded"),
    }
    Ok(collection)
}

pub fn parse_collection(text: &str) -> serde_json::Result<Option<Vec<SpecimenRecord>>> {
    serde_json::from_str(text)
}

/// Load filter criteria from a TOML file.
pub fn load_criteria(path: &Path) -> Result<FilterCriteria> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read filter criteria {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parse filter criteria {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_not_loaded() {
        assert!(parse_collection("null").unwrap().is_none());
    }

    #[test]
    fn empty_array_is_loaded() {
        assert_eq!(parse_collection("[]").unwrap(), Some(Vec::new()));
    }

    #[test]
    fn record_without_id_is_rejected() {
        assert!(parse_collection(r#"[{ "bar_code": "BC-1" }]"#).is_err());
    }
}
