//! Declared field types and wire encodings

use serde::{Deserialize, Serialize};

/// Encoding category carried in the low three bits of every field tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireType {
    /// Unsigned LEB128 varint
    Varint,
    /// Eight little-endian bytes
    Fixed64,
    /// Varint length followed by that many bytes
    LengthDelimited,
    /// Start of a (deprecated) group
    StartGroup,
    /// End of a (deprecated) group
    EndGroup,
    /// Four little-endian bytes
    Fixed32,
}

impl WireType {
    /// Map the three-bit tag value onto a wire type.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(WireType::Varint),
            1 => Some(WireType::Fixed64),
            2 => Some(WireType::LengthDelimited),
            3 => Some(WireType::StartGroup),
            4 => Some(WireType::EndGroup),
            5 => Some(WireType::Fixed32),
            _ => None,
        }
    }

    /// Three-bit tag value of this wire type.
    pub const fn bits(&self) -> u8 {
        match self {
            WireType::Varint => 0,
            WireType::Fixed64 => 1,
            WireType::LengthDelimited => 2,
            WireType::StartGroup => 3,
            WireType::EndGroup => 4,
            WireType::Fixed32 => 5,
        }
    }
}

/// Semantic type a schema declares for a field path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Uint32,
    Uint64,
    Int32,
    /// Zig-zag encoded signed 32-bit integer
    Sint32,
    Float,
    Double,
    String,
    Bytes,
    Enumerator,
    /// Length-delimited payload that is itself a tag/value stream
    EmbeddedMessage,
}

impl FieldType {
    /// The only wire type a value of this declared type may arrive with.
    pub const fn wire_type(&self) -> WireType {
        match self {
            FieldType::Uint32
            | FieldType::Uint64
            | FieldType::Int32
            | FieldType::Sint32
            | FieldType::Enumerator => WireType::Varint,
            FieldType::Float => WireType::Fixed32,
            FieldType::Double => WireType::Fixed64,
            FieldType::String | FieldType::Bytes | FieldType::EmbeddedMessage => {
                WireType::LengthDelimited
            }
        }
    }

    /// Whether decoding this type recurses into a nested message.
    pub const fn is_message(&self) -> bool {
        matches!(self, FieldType::EmbeddedMessage)
    }
}
