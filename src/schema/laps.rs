//! Manual laps and auto laps share one layout

use crate::types::FieldInfo;
use crate::types::FieldType::{EmbeddedMessage, Enumerator, Float, Uint32};

pub const LAPS: &[FieldInfo] = &[
    FieldInfo::new("1", "laps", EmbeddedMessage),
    FieldInfo::new("1/1", "header", EmbeddedMessage),
    FieldInfo::new("1/1/1", "split-time", EmbeddedMessage),
    FieldInfo::new("1/1/1/1", "hours", Uint32),
    FieldInfo::new("1/1/1/2", "minutes", Uint32),
    FieldInfo::new("1/1/1/3", "seconds", Uint32),
    FieldInfo::new("1/1/1/4", "milliseconds", Uint32),
    FieldInfo::new("1/1/2", "duration", EmbeddedMessage),
    FieldInfo::new("1/1/2/1", "hours", Uint32),
    FieldInfo::new("1/1/2/2", "minutes", Uint32),
    FieldInfo::new("1/1/2/3", "seconds", Uint32),
    FieldInfo::new("1/1/2/4", "milliseconds", Uint32),
    FieldInfo::new("1/1/3", "distance", Float),
    FieldInfo::new("1/1/4", "ascent", Float),
    FieldInfo::new("1/1/5", "descent", Float),
    FieldInfo::new("1/1/6", "lap-type", Enumerator),
    FieldInfo::new("1/2", "stats", EmbeddedMessage),
    FieldInfo::new("1/2/1", "heartrate", EmbeddedMessage),
    FieldInfo::new("1/2/1/1", "average", Uint32),
    FieldInfo::new("1/2/1/2", "maximum", Uint32),
    FieldInfo::new("1/2/1/3", "minimum", Uint32),
    FieldInfo::new("1/2/2", "speed", EmbeddedMessage),
    FieldInfo::new("1/2/2/1", "average", Float),
    FieldInfo::new("1/2/2/2", "maximum", Float),
    FieldInfo::new("1/2/3", "cadence", EmbeddedMessage),
    FieldInfo::new("1/2/3/1", "average", Uint32),
    FieldInfo::new("1/2/3/2", "maximum", Uint32),
    FieldInfo::new("1/2/4", "power", EmbeddedMessage),
    FieldInfo::new("1/2/4/1", "average", Uint32),
    FieldInfo::new("1/2/4/2", "maximum", Uint32),
    FieldInfo::new("1/2/5", "pedaling", EmbeddedMessage),
    FieldInfo::new("1/2/5/1", "average", Uint32),
    FieldInfo::new("1/2/6", "incline", EmbeddedMessage),
    FieldInfo::new("1/2/6/1", "average", Float),
    FieldInfo::new("1/2/7", "stride", EmbeddedMessage),
    FieldInfo::new("1/2/7/1", "average", Uint32),
    FieldInfo::new("2", "summary", EmbeddedMessage),
    FieldInfo::new("2/1", "best-duration", EmbeddedMessage),
    FieldInfo::new("2/1/1", "hours", Uint32),
    FieldInfo::new("2/1/2", "minutes", Uint32),
    FieldInfo::new("2/1/3", "seconds", Uint32),
    FieldInfo::new("2/1/4", "milliseconds", Uint32),
    FieldInfo::new("2/2", "average-duration", EmbeddedMessage),
    FieldInfo::new("2/2/1", "hours", Uint32),
    FieldInfo::new("2/2/2", "minutes", Uint32),
    FieldInfo::new("2/2/3", "seconds", Uint32),
    FieldInfo::new("2/2/4", "milliseconds", Uint32),
];
