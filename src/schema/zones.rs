//! Time spent in heart-rate, power, fat/fit and speed zones

use crate::types::FieldInfo;
use crate::types::FieldType::{EmbeddedMessage, Enumerator, Float, Uint32};

pub const ZONES: &[FieldInfo] = &[
    FieldInfo::new("1", "heartrate", EmbeddedMessage),
    FieldInfo::new("1/1", "limits", EmbeddedMessage),
    FieldInfo::new("1/1/1", "low", Uint32),
    FieldInfo::new("1/1/2", "high", Uint32),
    FieldInfo::new("1/2", "duration", EmbeddedMessage),
    FieldInfo::new("1/2/1", "hours", Uint32),
    FieldInfo::new("1/2/2", "minutes", Uint32),
    FieldInfo::new("1/2/3", "seconds", Uint32),
    FieldInfo::new("1/2/4", "milliseconds", Uint32),
    FieldInfo::new("2", "power", EmbeddedMessage),
    FieldInfo::new("2/1", "limits", EmbeddedMessage),
    FieldInfo::new("2/1/1", "low", Uint32),
    FieldInfo::new("2/1/2", "high", Uint32),
    FieldInfo::new("2/2", "duration", EmbeddedMessage),
    FieldInfo::new("2/2/1", "hours", Uint32),
    FieldInfo::new("2/2/2", "minutes", Uint32),
    FieldInfo::new("2/2/3", "seconds", Uint32),
    FieldInfo::new("2/2/4", "milliseconds", Uint32),
    FieldInfo::new("3", "fatfit", EmbeddedMessage),
    FieldInfo::new("3/1", "limit", Uint32),
    FieldInfo::new("3/2", "fit-duration", EmbeddedMessage),
    FieldInfo::new("3/2/1", "hours", Uint32),
    FieldInfo::new("3/2/2", "minutes", Uint32),
    FieldInfo::new("3/2/3", "seconds", Uint32),
    FieldInfo::new("3/2/4", "milliseconds", Uint32),
    FieldInfo::new("3/3", "fat-duration", EmbeddedMessage),
    FieldInfo::new("3/3/1", "hours", Uint32),
    FieldInfo::new("3/3/2", "minutes", Uint32),
    FieldInfo::new("3/3/3", "seconds", Uint32),
    FieldInfo::new("3/3/4", "milliseconds", Uint32),
    FieldInfo::new("4", "speed", EmbeddedMessage),
    FieldInfo::new("4/1", "limits", EmbeddedMessage),
    FieldInfo::new("4/1/1", "low", Float),
    FieldInfo::new("4/1/2", "high", Float),
    FieldInfo::new("4/2", "duration", EmbeddedMessage),
    FieldInfo::new("4/2/1", "hours", Uint32),
    FieldInfo::new("4/2/2", "minutes", Uint32),
    FieldInfo::new("4/2/3", "seconds", Uint32),
    FieldInfo::new("4/2/4", "milliseconds", Uint32),
    FieldInfo::new("4/3", "distance", Float),
    FieldInfo::new("10", "heartrate-source", Enumerator),
];
