//! Per-interval sensor series

use crate::types::FieldInfo;
use crate::types::FieldType::{EmbeddedMessage, Enumerator, Float, Uint32};

/// Each `<sensor>-offline` entry is one inclusive `[start-index, stop-index]` interval.
pub const SAMPLES: &[FieldInfo] = &[
    FieldInfo::new("1", "record-interval", EmbeddedMessage),
    FieldInfo::new("1/1", "hours", Uint32),
    FieldInfo::new("1/2", "minutes", Uint32),
    FieldInfo::new("1/3", "seconds", Uint32),
    FieldInfo::new("1/4", "milliseconds", Uint32),
    FieldInfo::new("2", "heartrate", Uint32),
    FieldInfo::new("3", "heartrate-offline", EmbeddedMessage),
    FieldInfo::new("3/1", "start-index", Uint32),
    FieldInfo::new("3/2", "stop-index", Uint32),
    FieldInfo::new("4", "cadence", Uint32),
    FieldInfo::new("5", "cadence-offline", EmbeddedMessage),
    FieldInfo::new("5/1", "start-index", Uint32),
    FieldInfo::new("5/2", "stop-index", Uint32),
    FieldInfo::new("6", "altitude", Float),
    FieldInfo::new("7", "altitude-calibration", EmbeddedMessage),
    FieldInfo::new("7/1", "start-index", Uint32),
    FieldInfo::new("7/2", "value", Float),
    FieldInfo::new("7/3", "operation", Enumerator),
    FieldInfo::new("7/4", "cause", Enumerator),
    FieldInfo::new("8", "temperature", Float),
    FieldInfo::new("9", "speed", Float),
    FieldInfo::new("10", "speed-offline", EmbeddedMessage),
    FieldInfo::new("10/1", "start-index", Uint32),
    FieldInfo::new("10/2", "stop-index", Uint32),
    FieldInfo::new("11", "distance", Float),
    FieldInfo::new("12", "distance-offline", EmbeddedMessage),
    FieldInfo::new("12/1", "start-index", Uint32),
    FieldInfo::new("12/2", "stop-index", Uint32),
    FieldInfo::new("13", "stride-length", Uint32),
    FieldInfo::new("14", "stride-offline", EmbeddedMessage),
    FieldInfo::new("14/1", "start-index", Uint32),
    FieldInfo::new("14/2", "stop-index", Uint32),
    FieldInfo::new("15", "stride-calibration", EmbeddedMessage),
    FieldInfo::new("15/1", "start-index", Uint32),
    FieldInfo::new("15/2", "value", Float),
    FieldInfo::new("15/3", "operation", Enumerator),
    FieldInfo::new("15/4", "cause", Enumerator),
    FieldInfo::new("16", "fwd-acceleration", Float),
    FieldInfo::new("17", "moving-type", Enumerator),
    FieldInfo::new("18", "altitude-offline", EmbeddedMessage),
    FieldInfo::new("18/1", "start-index", Uint32),
    FieldInfo::new("18/2", "stop-index", Uint32),
    FieldInfo::new("19", "temperature-offline", EmbeddedMessage),
    FieldInfo::new("19/1", "start-index", Uint32),
    FieldInfo::new("19/2", "stop-index", Uint32),
    FieldInfo::new("20", "fwd-acceleration-offline", EmbeddedMessage),
    FieldInfo::new("20/1", "start-index", Uint32),
    FieldInfo::new("20/2", "stop-index", Uint32),
];
