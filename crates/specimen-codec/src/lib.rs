//! Codec for the compound fields of a specimen record.
//!
//! Two fields of a specimen's sample data pack several values into one
//! delimited string:
//!
//! - `type`: up to three ordered levels, e.g. `blood-dna-library`
//! - `location`: five labelled slots, e.g. `fridge_1-shelf_2-rack_3-box_4-spot_A7`
//!
//! Strict decoders return [`CodecError`] for malformed input so the caller
//! picks the policy; the `_lenient` variants log and fall back to an empty
//! result. Encoders fail only on wrong input arity.

pub mod error;
pub mod location;
pub mod specimen_type;

pub use error::{CodecError, Result};
pub use location::{
    LOCATION_INPUT_COUNT, LOCATION_SLOT_COUNT, LOCATION_SLOTS, Location, LocationSlot, Spot,
    decode_location, decode_location_lenient, encode_location,
};
pub use specimen_type::{
    MAX_TYPE_LEVELS, NONE_SENTINEL, decode_type, decode_type_lenient, encode_type,
};
