//! Whole-exercise summary statistics

use crate::types::FieldInfo;
use crate::types::FieldType::{EmbeddedMessage, Float, Uint32};

pub const STATISTICS: &[FieldInfo] = &[
    FieldInfo::new("1", "heartrate", EmbeddedMessage),
    FieldInfo::new("1/1", "minimum", Uint32),
    FieldInfo::new("1/2", "average", Uint32),
    FieldInfo::new("1/3", "maximum", Uint32),
    FieldInfo::new("2", "speed", EmbeddedMessage),
    FieldInfo::new("2/1", "average", Float),
    FieldInfo::new("2/2", "maximum", Float),
    FieldInfo::new("3", "cadence", EmbeddedMessage),
    FieldInfo::new("3/1", "average", Uint32),
    FieldInfo::new("3/2", "maximum", Uint32),
    FieldInfo::new("4", "altitude", EmbeddedMessage),
    FieldInfo::new("4/1", "minimum", Float),
    FieldInfo::new("4/2", "average", Float),
    FieldInfo::new("4/3", "maximum", Float),
    FieldInfo::new("5", "power", EmbeddedMessage),
    FieldInfo::new("5/1", "average", Uint32),
    FieldInfo::new("5/2", "maximum", Uint32),
    FieldInfo::new("6", "lr_balance", EmbeddedMessage),
    FieldInfo::new("6/1", "average", Float),
    FieldInfo::new("7", "temperature", EmbeddedMessage),
    FieldInfo::new("7/1", "minimum", Float),
    FieldInfo::new("7/2", "average", Float),
    FieldInfo::new("7/3", "maximum", Float),
    FieldInfo::new("8", "activity", EmbeddedMessage),
    FieldInfo::new("8/1", "average", Float),
    FieldInfo::new("9", "stride", EmbeddedMessage),
    FieldInfo::new("9/1", "average", Uint32),
    FieldInfo::new("9/2", "maximum", Uint32),
    FieldInfo::new("10", "incline", EmbeddedMessage),
    FieldInfo::new("10/1", "average", Float),
    FieldInfo::new("10/2", "maximum", Float),
    FieldInfo::new("11", "decline", EmbeddedMessage),
    FieldInfo::new("11/1", "average", Float),
    FieldInfo::new("11/2", "maximum", Float),
];
