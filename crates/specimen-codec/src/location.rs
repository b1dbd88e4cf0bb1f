//! Storage location encoding.
//!
//! A location is five positional slots (`fridge`, `shelf`, `rack`, `box`,
//! `spot`) stored as `fridge_1-shelf_2-rack_3-box_4-spot_A7`. The spot is a
//! two character grid coordinate built from two axis selectors on commit.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CodecError, Result};
use crate::specimen_type::NONE_SENTINEL;

/// Separator between slots in an encoded location.
pub const SLOT_SEPARATOR: &str = "-";

/// Separator between a slot label and its value.
pub const LABEL_SEPARATOR: &str = "_";

/// Number of slots in a decoded location.
pub const LOCATION_SLOT_COUNT: usize = 5;

/// Number of values an editor commits: four slots plus two spot axes.
pub const LOCATION_INPUT_COUNT: usize = 6;

/// One positional storage coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationSlot {
    Fridge,
    Shelf,
    Rack,
    Box,
    Spot,
}

/// Slots in their serialized order.
pub const LOCATION_SLOTS: [LocationSlot; LOCATION_SLOT_COUNT] = [
    LocationSlot::Fridge,
    LocationSlot::Shelf,
    LocationSlot::Rack,
    LocationSlot::Box,
    LocationSlot::Spot,
];

impl LocationSlot {
    /// Fixed label written in front of the slot value.
    pub fn label(&self) -> &'static str {
        match self {
            LocationSlot::Fridge => "fridge",
            LocationSlot::Shelf => "shelf",
            LocationSlot::Rack => "rack",
            LocationSlot::Box => "box",
            LocationSlot::Spot => "spot",
        }
    }
}

impl fmt::Display for LocationSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decode an encoded location into its five slot values.
///
/// Empty input yields no slots. Each token keeps only the part after its
/// label; a token without a label separator decodes to an empty value, and
/// anything after a second `_` is discarded. The spot is returned undivided.
///
/// # Errors
///
/// Returns [`CodecError::MalformedLocation`] unless the input splits into
/// exactly [`LOCATION_SLOT_COUNT`] tokens.
///
/// # Example
/// ```
/// use specimen_codec::decode_location;
///
/// let slots = decode_location("fridge_1-shelf_2-rack_3-box_4-spot_A7").unwrap();
/// assert_eq!(slots, vec!["1", "2", "3", "4", "A7"]);
/// assert!(decode_location("fridge_1-shelf_2-rack_3").is_err());
/// ```
pub fn decode_location(encoded: &str) -> Result<Vec<String>> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }
    let slots: Vec<String> = encoded
        .split(SLOT_SEPARATOR)
        .map(|token| {
            token
                .split(LABEL_SEPARATOR)
                .nth(1)
                .unwrap_or_default()
                .to_string()
        })
        .collect();
    if slots.len() != LOCATION_SLOT_COUNT {
        return Err(CodecError::malformed_location(encoded, slots.len()));
    }
    Ok(slots)
}

/// Decode an encoded location, treating a malformed value as "location unknown".
pub fn decode_location_lenient(encoded: &str) -> Vec<String> {
    match decode_location(encoded) {
        Ok(slots) => slots,
        Err(error) => {
            warn!(encoded = %encoded, %error, "Ignoring malformed location");
            Vec::new()
        }
    }
}

/// Encode editor input into a stored location.
///
/// Input order is `[fridge, shelf, rack, box, spot_axis1, spot_axis2]`.
/// Missing values are written as empty strings. The spot is written as the
/// concatenated axes unless either axis is `none`, in which case only the
/// label is written.
///
/// # Errors
///
/// Returns [`CodecError::InvalidArgument`] unless exactly
/// [`LOCATION_INPUT_COUNT`] values are supplied.
///
/// # Example
/// ```
/// use specimen_codec::encode_location;
///
/// let encoded = encode_location(&[Some("1"), Some("2"), Some("3"), Some("4"), Some("A"), Some("7")]);
/// assert_eq!(encoded.unwrap(), "fridge_1-shelf_2-rack_3-box_4-spot_A7");
///
/// let no_spot = encode_location(&[Some("1"), None, Some("3"), Some("4"), Some("none"), Some("7")]);
/// assert_eq!(no_spot.unwrap(), "fridge_1-shelf_-rack_3-box_4-spot_");
/// ```
pub fn encode_location<S: AsRef<str>>(inputs: &[Option<S>]) -> Result<String> {
    if inputs.len() != LOCATION_INPUT_COUNT {
        return Err(CodecError::InvalidArgument {
            field: "location",
            expected: "exactly 6",
            actual: inputs.len(),
        });
    }
    let value = |index: usize| inputs[index].as_ref().map_or("", AsRef::as_ref);
    Ok(join_slots(
        [value(0), value(1), value(2), value(3)],
        value(4),
        value(5),
    ))
}

fn join_slots(fixed: [&str; 4], axis1: &str, axis2: &str) -> String {
    let mut segments: Vec<String> = LOCATION_SLOTS
        .iter()
        .zip(fixed)
        .map(|(slot, value)| labelled(*slot, value))
        .collect();
    segments.push(labelled(LocationSlot::Spot, &spot_value(axis1, axis2)));
    segments.join(SLOT_SEPARATOR)
}

fn spot_value(axis1: &str, axis2: &str) -> String {
    if axis1 != NONE_SENTINEL && axis2 != NONE_SENTINEL {
        format!("{axis1}{axis2}")
    } else {
        String::new()
    }
}

fn labelled(slot: LocationSlot, value: &str) -> String {
    format!("{}{LABEL_SEPARATOR}{value}", slot.label())
}

/// The two single-character selectors that make up a spot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    /// Grid column, the first character of the spot.
    pub axis1: Option<char>,
    /// Grid row, the second character of the spot.
    pub axis2: Option<char>,
}

impl Spot {
    /// Split a raw spot value into its axes.
    pub fn parse(raw: &str) -> Self {
        let mut chars = raw.chars();
        Self {
            axis1: chars.next(),
            axis2: chars.next(),
        }
    }

    /// Axis values as editor selections, using `none` for a missing axis.
    pub fn selections(&self) -> [String; 2] {
        let select =
            |axis: Option<char>| axis.map_or_else(|| NONE_SENTINEL.to_string(), String::from);
        [select(self.axis1), select(self.axis2)]
    }
}

/// A decoded location with named slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub fridge: String,
    pub shelf: String,
    pub rack: String,
    #[serde(rename = "box")]
    pub box_: String,
    pub spot: String,
}

impl Location {
    /// Build a location from five decoded slot values.
    ///
    /// Returns `None` when the slice does not hold exactly five values.
    pub fn from_slots(slots: &[String]) -> Option<Self> {
        let [fridge, shelf, rack, box_, spot] = slots else {
            return None;
        };
        Some(Self {
            fridge: fridge.clone(),
            shelf: shelf.clone(),
            rack: rack.clone(),
            box_: box_.clone(),
            spot: spot.clone(),
        })
    }

    /// Decode a stored location. Empty input yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Propagates [`CodecError::MalformedLocation`] from [`decode_location`].
    pub fn decode(encoded: &str) -> Result<Option<Self>> {
        let slots = decode_location(encoded)?;
        Ok(Self::from_slots(&slots))
    }

    /// Encode a location from editor parts.
    ///
    /// Same output as [`encode_location`] with the six inputs in order.
    pub fn encode_from_parts(
        fridge: Option<&str>,
        shelf: Option<&str>,
        rack: Option<&str>,
        box_: Option<&str>,
        axis1: Option<&str>,
        axis2: Option<&str>,
    ) -> String {
        join_slots(
            [
                fridge.unwrap_or_default(),
                shelf.unwrap_or_default(),
                rack.unwrap_or_default(),
                box_.unwrap_or_default(),
            ],
            axis1.unwrap_or_default(),
            axis2.unwrap_or_default(),
        )
    }

    /// Encode this location back into its stored form.
    ///
    /// The spot goes through its axes first, so a spot shorter than two
    /// characters is written empty and a longer one keeps its first two.
    pub fn encode(&self) -> String {
        let [axis1, axis2] = self.spot_axes().selections();
        join_slots(
            [&self.fridge, &self.shelf, &self.rack, &self.box_].map(String::as_str),
            &axis1,
            &axis2,
        )
    }

    /// The spot split into its two axis selectors.
    pub fn spot_axes(&self) -> Spot {
        Spot::parse(&self.spot)
    }

    /// Slot values in serialized order.
    pub fn slots(&self) -> [&str; LOCATION_SLOT_COUNT] {
        [
            self.fridge.as_str(),
            self.shelf.as_str(),
            self.rack.as_str(),
            self.box_.as_str(),
            self.spot.as_str(),
        ]
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
