//! Specimen records as exchanged with the specimen store.
//!
//! Field names follow the store's snake_case JSON. Fields this crate does not
//! interpret are kept in `extra` and written back unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use specimen_codec::{
    CodecError, Location, decode_location, decode_type, encode_location, encode_type,
};

use crate::enums::SpecimenState;
use crate::error::Result;
use crate::ids::SpecimenId;

/// One specimen in a project's collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecimenRecord {
    pub id: SpecimenId,
    #[serde(default, alias = "barCode")]
    pub bar_code: String,
    #[serde(default, alias = "sampleData")]
    pub sample_data: SampleData,
    #[serde(default, alias = "parentId", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(
        default,
        alias = "lineagePath",
        skip_serializing_if = "Option::is_none"
    )]
    pub lineage_path: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl SpecimenRecord {
    pub fn new(id: SpecimenId, bar_code: impl Into<String>) -> Self {
        Self {
            id,
            bar_code: bar_code.into(),
            sample_data: SampleData::default(),
            parent_id: None,
            lineage_path: None,
            extra: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_sample_data(mut self, sample_data: SampleData) -> Self {
        self.sample_data = sample_data;
        self
    }
}

/// Descriptive data attached to a specimen.
///
/// `type` and `location` hold encoded strings; see [`specimen_codec`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub specimen_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_relationship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_dob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_sent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_collection: Option<String>,
    #[serde(default)]
    pub genotype_flag: bool,
    #[serde(default)]
    pub haplotype_flag: bool,
    #[serde(default)]
    pub sanger_seq_flag: bool,
    #[serde(default)]
    pub ngs_seg_flag: bool,
    #[serde(default)]
    pub dd_pcr_flag: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl SampleData {
    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    #[must_use]
    pub fn with_state(mut self, state: SpecimenState) -> Self {
        self.state = Some(state.as_str().to_string());
        self
    }

    #[must_use]
    pub fn with_type(mut self, encoded: impl Into<String>) -> Self {
        self.specimen_type = Some(encoded.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, encoded: impl Into<String>) -> Self {
        self.location = Some(encoded.into());
        self
    }

    /// The stored state, if any.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ModelError::UnknownState`] for a value outside the
    /// state vocabulary.
    pub fn parsed_state(&self) -> Result<Option<SpecimenState>> {
        match self.state.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }

    /// Decoded type levels. A missing type has no levels.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::MalformedType`] for more than three levels.
    pub fn type_levels(&self) -> std::result::Result<Vec<String>, CodecError> {
        decode_type(self.specimen_type.as_deref().unwrap_or_default())
    }

    /// Decoded location slots. A missing location has no slots.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::MalformedLocation`] unless the stored value has
    /// exactly five slots.
    pub fn location_slots(&self) -> std::result::Result<Vec<String>, CodecError> {
        decode_location(self.location.as_deref().unwrap_or_default())
    }

    /// Decoded location with named slots, `None` when no location is stored.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::MalformedLocation`] as for [`Self::location_slots`].
    pub fn parsed_location(&self) -> std::result::Result<Option<Location>, CodecError> {
        Location::decode(self.location.as_deref().unwrap_or_default())
    }

    /// Encode edited type levels and store them.
    ///
    /// Nothing is written when encoding fails.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidArgument`] for more than three levels.
    pub fn set_type_levels<S: AsRef<str>>(
        &mut self,
        levels: &[S],
    ) -> std::result::Result<(), CodecError> {
        let encoded = encode_type(levels)?;
        self.specimen_type = Some(encoded);
        Ok(())
    }

    /// Encode edited location parts (`fridge, shelf, rack, box, axis1, axis2`)
    /// and store them.
    ///
    /// Nothing is written when encoding fails.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidArgument`] unless six parts are supplied.
    pub fn set_location_parts<S: AsRef<str>>(
        &mut self,
        parts: &[Option<S>],
    ) -> std::result::Result<(), CodecError> {
        let encoded = encode_location(parts)?;
        self.location = Some(encoded);
        Ok(())
    }
}
