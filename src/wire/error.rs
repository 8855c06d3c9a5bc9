//! Wire-level decode errors

use thiserror::Error;

use crate::types::{FieldType, WireType};

/// A problem found while walking a tag/value stream.
///
/// Corruption errors end the current stream; the decoder keeps whatever it
/// decoded before them. Mismatches only cost the offending value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WireError {
    #[error("varint truncated at offset {offset}")]
    TruncatedVarint { offset: usize },

    #[error("varint longer than 10 bytes at offset {offset}")]
    VarintOverflow { offset: usize },

    #[error("value at offset {offset} needs {needed} bytes, {available} available")]
    Truncated { offset: usize, needed: u64, available: usize },

    #[error("unsupported wire type {bits} at offset {offset}")]
    UnsupportedWireType { bits: u8, offset: usize },

    #[error("field {path} declared {declared:?} but arrived as {wire_type:?}")]
    TypeMismatch { path: String, declared: FieldType, wire_type: WireType },

    #[error("nesting deeper than {limit} levels")]
    DepthExceeded { limit: usize },
}

impl WireError {
    /// Whether the rest of the stream is unreadable after this error.
    pub fn is_stream_fatal(&self) -> bool {
        match self {
            WireError::TruncatedVarint { .. }
            | WireError::VarintOverflow { .. }
            | WireError::Truncated { .. }
            | WireError::UnsupportedWireType { .. } => true,
            WireError::TypeMismatch { .. } | WireError::DepthExceeded { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corruption_is_fatal_mismatch_is_not() {
        assert!(WireError::TruncatedVarint { offset: 0 }.is_stream_fatal());
        assert!(WireError::Truncated { offset: 4, needed: 9, available: 2 }.is_stream_fatal());
        assert!(WireError::UnsupportedWireType { bits: 3, offset: 0 }.is_stream_fatal());

        let mismatch = WireError::TypeMismatch {
            path: "2/1".into(),
            declared: FieldType::Float,
            wire_type: WireType::Varint,
        };
        assert!(!mismatch.is_stream_fatal());
        assert!(mismatch.to_string().contains("2/1"));
        assert!(!WireError::DepthExceeded { limit: 32 }.is_stream_fatal());
    }
}
