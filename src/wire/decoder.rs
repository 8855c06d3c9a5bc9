//! Schema-driven recursive decoder

use tracing::{trace, warn};

use super::{WireError, WireReader};
use crate::types::{DecodedMessage, DecodedValue, FieldInfo, FieldSchema, FieldType, WireType};

/// Deepest nesting of embedded messages the decoder will follow.
pub const MAX_DEPTH: usize = 32;

/// Outcome of a decode that may have stopped early.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialDecode {
    /// Everything decoded before the stream ended or broke
    pub message: DecodedMessage,
    /// The corruption that stopped the top-level stream, if any
    pub error: Option<WireError>,
}

impl PartialDecode {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Raw value as read off the wire, before the schema gives it meaning.
enum RawValue<'a> {
    Varint(u64),
    Fixed64([u8; 8]),
    Bytes(&'a [u8]),
    Fixed32([u8; 4]),
}

impl RawValue<'_> {
    fn wire_type(&self) -> WireType {
        match self {
            RawValue::Varint(_) => WireType::Varint,
            RawValue::Fixed64(_) => WireType::Fixed64,
            RawValue::Bytes(_) => WireType::LengthDelimited,
            RawValue::Fixed32(_) => WireType::Fixed32,
        }
    }
}

/// Decode `data` against `schema`, logging and absorbing any corruption.
///
/// Never fails: a broken stream yields whatever was decoded before the break.
pub fn decode(data: &[u8], schema: &FieldSchema) -> DecodedMessage {
    let partial = decode_partial(data, schema);
    if let Some(error) = &partial.error {
        warn!(schema = schema.label, %error, "Stream corrupt, keeping partial result");
    }
    partial.message
}

/// Decode `data` against `schema`, reporting the error that stopped the stream.
pub fn decode_partial(data: &[u8], schema: &FieldSchema) -> PartialDecode {
    let mut message = DecodedMessage::new();
    let error = decode_into(data, schema, "", 0, &mut message).err();
    trace!(
        schema = schema.label,
        bytes = data.len(),
        fields = message.len(),
        "Decoded message"
    );
    PartialDecode { message, error }
}

fn decode_into(
    data: &[u8],
    schema: &FieldSchema,
    parent: &str,
    depth: usize,
    out: &mut DecodedMessage,
) -> Result<(), WireError> {
    let mut reader = WireReader::new(data);

    while !reader.is_at_end() {
        let offset = reader.position();
        let tag = reader.read_varint()?;
        let field_number = tag >> 3;
        let bits = (tag & 0x7) as u8;

        let raw = match WireType::from_bits(bits) {
            Some(WireType::Varint) => RawValue::Varint(reader.read_varint()?),
            Some(WireType::Fixed64) => RawValue::Fixed64(reader.read_fixed64()?),
            Some(WireType::LengthDelimited) => RawValue::Bytes(reader.read_length_delimited()?),
            Some(WireType::Fixed32) => RawValue::Fixed32(reader.read_fixed32()?),
            Some(WireType::StartGroup | WireType::EndGroup) | None => {
                return Err(WireError::UnsupportedWireType { bits, offset });
            }
        };

        let path = if parent.is_empty() {
            field_number.to_string()
        } else {
            format!("{}/{}", parent, field_number)
        };

        let Some(info) = schema.get(&path) else {
            trace!(schema = schema.label, %path, "Skipping undeclared field");
            continue;
        };

        match convert(info, raw, schema, depth) {
            Ok(value) => out.push(info.name, value),
            Err(error) if error.is_stream_fatal() => return Err(error),
            Err(error) => {
                warn!(schema = schema.label, %path, %error, "Skipping field value");
            }
        }
    }

    Ok(())
}

fn convert(
    info: &FieldInfo,
    raw: RawValue<'_>,
    schema: &FieldSchema,
    depth: usize,
) -> Result<DecodedValue, WireError> {
    let value = match (info.field_type, raw) {
        (FieldType::Uint32, RawValue::Varint(v)) => DecodedValue::Uint32(v as u32),
        (FieldType::Uint64, RawValue::Varint(v)) => DecodedValue::Uint64(v),
        (FieldType::Int32, RawValue::Varint(v)) => DecodedValue::Int32(v as i32),
        (FieldType::Sint32, RawValue::Varint(v)) => DecodedValue::Sint32(zigzag_decode(v as u32)),
        (FieldType::Enumerator, RawValue::Varint(v)) => DecodedValue::Enumerator(v),
        (FieldType::Float, RawValue::Fixed32(b)) => DecodedValue::Float(f32::from_le_bytes(b)),
        (FieldType::Double, RawValue::Fixed64(b)) => DecodedValue::Double(f64::from_le_bytes(b)),
        (FieldType::String, RawValue::Bytes(b)) => {
            DecodedValue::String(String::from_utf8_lossy(b).into_owned())
        }
        (FieldType::Bytes, RawValue::Bytes(b)) => DecodedValue::Bytes(b.to_vec()),
        (FieldType::EmbeddedMessage, RawValue::Bytes(payload)) => {
            if depth + 1 > MAX_DEPTH {
                return Err(WireError::DepthExceeded { limit: MAX_DEPTH });
            }
            let mut nested = DecodedMessage::new();
            if let Err(error) = decode_into(payload, schema, info.path, depth + 1, &mut nested) {
                warn!(
                    schema = schema.label,
                    path = info.path,
                    %error,
                    "Nested message corrupt, keeping partial result"
                );
            }
            DecodedValue::Message(nested)
        }
        (declared, raw) => {
            return Err(WireError::TypeMismatch {
                path: info.path.to_string(),
                declared,
                wire_type: raw.wire_type(),
            });
        }
    };
    Ok(value)
}

/// Undo zig-zag encoding of a signed 32-bit integer.
pub fn zigzag_decode(n: u32) -> i32 {
    ((n >> 1) as i32) ^ -((n & 1) as i32)
}
