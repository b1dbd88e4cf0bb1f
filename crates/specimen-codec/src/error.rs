#![deny(unsafe_code)]

/// Failures produced while encoding or decoding compound specimen fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The stored type string splits into more levels than a type can hold.
    #[error("invalid specimen type {encoded:?}: {token_count} levels (at most 3 allowed)")]
    MalformedType { encoded: String, token_count: usize },

    /// The stored location string does not split into one token per slot.
    #[error("invalid location {encoded:?}: {token_count} slots (exactly 5 required)")]
    MalformedLocation { encoded: String, token_count: usize },

    /// An encoder was handed the wrong number of input values.
    #[error("invalid {field}: expected {expected} values, got {actual}")]
    InvalidArgument {
        field: &'static str,
        expected: &'static str,
        actual: usize,
    },
}

impl CodecError {
    pub(crate) fn malformed_type(encoded: &str, token_count: usize) -> Self {
        Self::MalformedType {
            encoded: encoded.to_string(),
            token_count,
        }
    }

    pub(crate) fn malformed_location(encoded: &str, token_count: usize) -> Self {
        Self::MalformedLocation {
            encoded: encoded.to_string(),
            token_count,
        }
    }

    /// Returns true for the recoverable decode-time conditions.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            CodecError::MalformedType { .. } | CodecError::MalformedLocation { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
