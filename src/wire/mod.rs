//! Tag/value wire format decoding
//!
//! Decodes the length-prefixed binary streams every training file is stored
//! in. A stream is a sequence of `(tag, value)` pairs where the tag packs a
//! field number and a [`WireType`](crate::types::WireType). Nested messages are
//! length-delimited values whose payload is itself a stream.
//!
//! Decoding is driven by a sparse [`FieldSchema`](crate::types::FieldSchema):
//! values whose path is declared are converted to [`DecodedValue`](crate::types::DecodedValue)s,
//! everything else is consumed and dropped.
//!
//! ## Failure behaviour
//!
//! - Corruption (truncated varint, short payload, group wire types) stops the
//!   current stream; values decoded before it are kept
//! - A value whose wire type disagrees with its declared type is skipped alone
//! - Nesting beyond [`MAX_DEPTH`] is skipped alone

mod decoder;
mod error;
mod reader;

pub use decoder::{MAX_DEPTH, PartialDecode, decode, decode_partial, zigzag_decode};
pub use error::WireError;
pub use reader::WireReader;
