//! Core types for decoded training data.
//!
//! This module provides the data structures shared by the wire decoder, the
//! session assembler and the exporters.
//!
//! ## Architecture
//!
//! - [`FieldSchema`] maps slash-joined field paths to a [`FieldInfo`] declaration
//! - [`FieldType`] is the declared type of a field, [`WireType`] its encoding on the wire
//! - [`DecodedMessage`] holds the decoded tree: semantic name to an ordered
//!   list of [`DecodedValue`]s
//!
//! ## Usage Example
//!
//! ```rust
//! use pulsetrail::types::{DecodedMessage, DecodedValue, FieldInfo, FieldSchema, FieldType};
//!
//! let schema = FieldSchema::new(
//!     "example",
//!     &[
//!         FieldInfo::new("1", "duration", FieldType::EmbeddedMessage),
//!         FieldInfo::new("1/3", "seconds", FieldType::Uint32),
//!     ],
//! )
//! .unwrap();
//! assert!(schema.contains("1/3"));
//!
//! let duration = DecodedMessage::new().with("seconds", DecodedValue::Uint32(42));
//! let message = DecodedMessage::new().with("duration", DecodedValue::Message(duration));
//! assert_eq!(message.message(&["duration"]).first_u64("seconds"), Some(42));
//! ```

mod field_type;
mod schema;
mod value;

pub use field_type::{FieldType, WireType};
pub use schema::{FieldInfo, FieldSchema};
pub use value::{DecodedMessage, DecodedValue};

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    prop_compose! {
        fn arb_scalar_type()(
            field_type in prop::sample::select(vec![
                FieldType::Uint32, FieldType::Uint64, FieldType::Int32,
                FieldType::Sint32, FieldType::Float, FieldType::Double,
                FieldType::String, FieldType::Bytes, FieldType::Enumerator,
            ])
        ) -> FieldType {
            field_type
        }
    }

    proptest! {
        #[test]
        fn prop_flat_schemas_always_validate(
            numbers in prop::collection::btree_set(1u32..10_000, 1..40),
            field_type in arb_scalar_type()
        ) {
            // Leak the generated paths so they satisfy the 'static table contract.
            let table: Vec<FieldInfo> = numbers
                .iter()
                .map(|n| {
                    let path: &'static str = Box::leak(n.to_string().into_boxed_str());
                    FieldInfo::new(path, "value", field_type)
                })
                .collect();
            let schema = FieldSchema::new("prop", &table);
            prop_assert!(schema.is_ok());
            prop_assert_eq!(schema.unwrap().len(), numbers.len());
        }

        #[test]
        fn prop_scalar_parents_are_rejected(
            parent in 1u32..100,
            child in 1u32..100,
            field_type in arb_scalar_type()
        ) {
            let parent_path: &'static str = Box::leak(parent.to_string().into_boxed_str());
            let child_path: &'static str =
                Box::leak(format!("{}/{}", parent, child).into_boxed_str());
            let table = [
                FieldInfo::new(parent_path, "parent", field_type),
                FieldInfo::new(child_path, "child", FieldType::Uint32),
            ];
            prop_assert!(FieldSchema::new("prop", &table).is_err());
        }
    }
}
