//! Vocabulary checks for specimen records.
//!
//! The codec accepts any string; the specimen store only accepts the values
//! listed in [`crate::vocabulary`]. These checks report every problem in a
//! record instead of stopping at the first one, and turn malformed encodings
//! into issues rather than errors.

use serde::{Deserialize, Serialize};
use specimen_codec::{Location, LocationSlot};
use tracing::debug;

use crate::enums::SpecimenState;
use crate::record::SpecimenRecord;
use crate::vocabulary::{is_known_type_level, is_spot, is_storage_number};

/// One problem found in a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Field path, e.g. `sample_data.type` or `sample_data.location.box`.
    pub field: String,
    /// The offending value.
    pub value: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: impl Into<String>, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }
}

/// Check decoded type levels against the per-level vocabularies.
///
/// Levels are checked by position in the decoded sequence.
pub fn validate_type<S: AsRef<str>>(levels: &[S]) -> Vec<ValidationIssue> {
    levels
        .iter()
        .map(AsRef::as_ref)
        .enumerate()
        .filter(|(position, level)| !is_known_type_level(*position, level))
        .map(|(position, level)| {
            ValidationIssue::new(
                "sample_data.type",
                level,
                format!("unrecognized type at level {}", position + 1),
            )
        })
        .collect()
}

/// Check location slot values against the accepted ranges.
///
/// Empty slots are allowed; a specimen may not be shelved yet.
pub fn validate_location(location: &Location) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let numbered = [
        (LocationSlot::Fridge, &location.fridge),
        (LocationSlot::Shelf, &location.shelf),
        (LocationSlot::Rack, &location.rack),
        (LocationSlot::Box, &location.box_),
    ];
    for (slot, value) in numbered {
        if !value.is_empty() && !is_storage_number(value) {
            issues.push(ValidationIssue::new(
                format!("sample_data.location.{slot}"),
                value.as_str(),
                "expected a number from 0 to 99",
            ));
        }
    }
    if !location.spot.is_empty() && !is_spot(&location.spot) {
        issues.push(ValidationIssue::new(
            "sample_data.location.spot",
            location.spot.as_str(),
            "expected a column A-I followed by a row 1-9",
        ));
    }
    issues
}

/// Check every interpreted field of a record.
pub fn validate_record(record: &SpecimenRecord) -> Vec<ValidationIssue> {
    let data = &record.sample_data;
    let mut issues = Vec::new();

    if let Err(error) = data.parsed_state() {
        let value = data.state.clone().unwrap_or_default();
        issues.push(ValidationIssue::new(
            "sample_data.state",
            value,
            format!("{error} (expected one of {})", state_names()),
        ));
    }

    match data.type_levels() {
        Ok(levels) => issues.extend(validate_type(&levels)),
        Err(error) => issues.push(ValidationIssue::new(
            "sample_data.type",
            data.specimen_type.clone().unwrap_or_default(),
            error.to_string(),
        )),
    }

    match data.parsed_location() {
        Ok(Some(location)) => issues.extend(validate_location(&location)),
        Ok(None) => {}
        Err(error) => issues.push(ValidationIssue::new(
            "sample_data.location",
            data.location.clone().unwrap_or_default(),
            error.to_string(),
        )),
    }

    if !issues.is_empty() {
        debug!(
            specimen_id = %record.id,
            issue_count = issues.len(),
            "Specimen record failed validation"
        );
    }
    issues
}

fn state_names() -> String {
    SpecimenState::ALL
        .iter()
        .map(SpecimenState::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
