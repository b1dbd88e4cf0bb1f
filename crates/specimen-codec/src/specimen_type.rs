//! Specimen type encoding.
//!
//! A specimen type is up to three ordered levels (material, nucleic-acid
//! class, preparation) stored as a single `-` joined string, e.g.
//! `blood-dna-library`.
//!
//! Absent levels are dropped on encode rather than kept as empty slots, so
//! only the relative order of the present levels survives a round trip.
//! `["none", "dna"]` encodes to `dna`, which decodes as a level-1 value.

use tracing::warn;

use crate::error::{CodecError, Result};

/// Separator between levels in an encoded type.
pub const TYPE_SEPARATOR: &str = "-";

/// Maximum number of levels a type can hold.
pub const MAX_TYPE_LEVELS: usize = 3;

/// Editor placeholder meaning "no value selected".
pub const NONE_SENTINEL: &str = "none";

/// Decode an encoded type into its levels.
///
/// Empty input yields no levels. Tokens are kept verbatim, including empty
/// tokens produced by adjacent separators; no vocabulary check is made.
///
/// # Errors
///
/// Returns [`CodecError::MalformedType`] when the input splits into more
/// than [`MAX_TYPE_LEVELS`] tokens.
///
/// # Example
/// ```
/// use specimen_codec::decode_type;
///
/// assert_eq!(decode_type("blood-dna").unwrap(), vec!["blood", "dna"]);
/// assert!(decode_type("").unwrap().is_empty());
/// assert!(decode_type("a-b-c-d").is_err());
/// ```
pub fn decode_type(encoded: &str) -> Result<Vec<String>> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }
    let levels: Vec<String> = encoded.split(TYPE_SEPARATOR).map(str::to_string).collect();
    if levels.len() > MAX_TYPE_LEVELS {
        return Err(CodecError::malformed_type(encoded, levels.len()));
    }
    Ok(levels)
}

/// Decode an encoded type, treating a malformed value as "type unknown".
///
/// The malformed condition is logged and an empty sequence is returned.
pub fn decode_type_lenient(encoded: &str) -> Vec<String> {
    match decode_type(encoded) {
        Ok(levels) => levels,
        Err(error) => {
            warn!(encoded = %encoded, %error, "Ignoring malformed specimen type");
            Vec::new()
        }
    }
}

/// Encode type levels into their stored form.
///
/// Levels that are empty or equal to [`NONE_SENTINEL`] are omitted; the
/// remaining levels are joined in their original order.
///
/// # Errors
///
/// Returns [`CodecError::InvalidArgument`] when more than
/// [`MAX_TYPE_LEVELS`] levels are supplied.
///
/// # Example
/// ```
/// use specimen_codec::encode_type;
///
/// assert_eq!(encode_type(&["blood", "none", "library"]).unwrap(), "blood-library");
/// assert!(encode_type(&["a", "b", "c", "d"]).is_err());
/// ```
pub fn encode_type<S: AsRef<str>>(levels: &[S]) -> Result<String> {
    if levels.len() > MAX_TYPE_LEVELS {
        return Err(CodecError::InvalidArgument {
            field: "specimen type",
            expected: "at most 3",
            actual: levels.len(),
        });
    }
    let present: Vec<&str> = levels
        .iter()
        .map(AsRef::as_ref)
        .filter(|level| !is_absent(level))
        .collect();
    Ok(present.join(TYPE_SEPARATOR))
}

fn is_absent(level: &str) -> bool {
    level.is_empty() || level == NONE_SENTINEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_keeps_empty_tokens_between_separators() {
        assert_eq!(
            decode_type("blood--library").unwrap(),
            vec!["blood", "", "library"]
        );
    }

    #[test]
    fn decode_reports_token_count() {
        let error = decode_type("a-b-c-d").unwrap_err();
        assert_eq!(
            error,
            CodecError::MalformedType {
                encoded: "a-b-c-d".to_string(),
                token_count: 4,
            }
        );
        assert!(error.is_malformed());
    }

    #[test]
    fn lenient_decode_swallows_malformed() {
        assert!(decode_type_lenient("a-b-c-d").is_empty());
        assert_eq!(decode_type_lenient("hair-rna"), vec!["hair", "rna"]);
    }

    #[test]
    fn encode_drops_none_and_empty_levels() {
        assert_eq!(encode_type(&["none", "dna", ""]).unwrap(), "dna");
        assert_eq!(encode_type(&["none", "none", "none"]).unwrap(), "");
        let empty: [&str; 0] = [];
        assert_eq!(encode_type(&empty).unwrap(), "");
    }

    #[test]
    fn encode_rejects_too_many_levels() {
        let error = encode_type(&["a", "b", "c", "d"]).unwrap_err();
        assert!(matches!(
            error,
            CodecError::InvalidArgument { actual: 4, .. }
        ));
        assert!(!error.is_malformed());
    }

    #[test]
    fn level_two_without_level_one_collapses() {
        let encoded = encode_type(&["none", "dna"]).unwrap();
        assert_eq!(encode_type(&["dna"]).unwrap(), encoded);
        assert_eq!(decode_type(&encoded).unwrap(), vec!["dna"]);
    }
}
