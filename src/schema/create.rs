//! Session and exercise `create` records

use crate::types::FieldInfo;
use crate::types::FieldType::{
    self, Double, EmbeddedMessage, Enumerator, Float, Int32, Uint32, Uint64,
};

pub const CREATE_SESSION: &[FieldInfo] = &[
    FieldInfo::new("1", "start", EmbeddedMessage),
    FieldInfo::new("1/1", "date", EmbeddedMessage),
    FieldInfo::new("1/1/1", "year", Uint32),
    FieldInfo::new("1/1/2", "month", Uint32),
    FieldInfo::new("1/1/3", "day", Uint32),
    FieldInfo::new("1/2", "time", EmbeddedMessage),
    FieldInfo::new("1/2/1", "hour", Uint32),
    FieldInfo::new("1/2/2", "minute", Uint32),
    FieldInfo::new("1/2/3", "seconds", Uint32),
    FieldInfo::new("1/2/4", "milliseconds", Uint32),
    FieldInfo::new("1/4", "offset", Int32),
    FieldInfo::new("2", "exercise-count", Uint32),
    FieldInfo::new("3", "device", FieldType::String),
    FieldInfo::new("4", "model", FieldType::String),
    FieldInfo::new("5", "duration", EmbeddedMessage),
    FieldInfo::new("5/1", "hours", Uint32),
    FieldInfo::new("5/2", "minutes", Uint32),
    FieldInfo::new("5/3", "seconds", Uint32),
    FieldInfo::new("5/4", "milliseconds", Uint32),
    FieldInfo::new("6", "distance", Float),
    FieldInfo::new("7", "calories", Uint32),
    FieldInfo::new("8", "heartrate", EmbeddedMessage),
    FieldInfo::new("8/1", "average", Uint32),
    FieldInfo::new("8/2", "maximum", Uint32),
    FieldInfo::new("9", "heartrate-duration", EmbeddedMessage),
    FieldInfo::new("9/1", "hours", Uint32),
    FieldInfo::new("9/2", "minutes", Uint32),
    FieldInfo::new("9/3", "seconds", Uint32),
    FieldInfo::new("9/4", "milliseconds", Uint32),
    FieldInfo::new("10", "training-load", EmbeddedMessage),
    FieldInfo::new("10/1", "load-value", Uint32),
    FieldInfo::new("10/2", "recovery-time", EmbeddedMessage),
    FieldInfo::new("10/2/1", "hours", Uint32),
    FieldInfo::new("10/2/2", "minutes", Uint32),
    FieldInfo::new("10/2/3", "seconds", Uint32),
    FieldInfo::new("10/2/4", "milliseconds", Uint32),
    FieldInfo::new("10/3", "carbs", Uint32),
    FieldInfo::new("10/4", "protein", Uint32),
    FieldInfo::new("10/5", "fat", Uint32),
    FieldInfo::new("11", "session-name", EmbeddedMessage),
    FieldInfo::new("11/1", "text", FieldType::String),
    FieldInfo::new("12", "feeling", Float),
    FieldInfo::new("13", "note", EmbeddedMessage),
    FieldInfo::new("13/1", "text", FieldType::String),
    FieldInfo::new("14", "place", EmbeddedMessage),
    FieldInfo::new("14/1", "text", FieldType::String),
    FieldInfo::new("15", "latitude", Double),
    FieldInfo::new("16", "longitude", Double),
    FieldInfo::new("17", "benefit", Enumerator),
    FieldInfo::new("18", "sport", EmbeddedMessage),
    FieldInfo::new("18/1", "value", Uint64),
    FieldInfo::new("19", "training-target", EmbeddedMessage),
    FieldInfo::new("19/1", "value", Uint64),
    FieldInfo::new("19/2", "last-modified", EmbeddedMessage),
    FieldInfo::new("19/2/1", "date", EmbeddedMessage),
    FieldInfo::new("19/2/1/1", "year", Uint32),
    FieldInfo::new("19/2/1/2", "month", Uint32),
    FieldInfo::new("19/2/1/3", "day", Uint32),
    FieldInfo::new("19/2/2", "time", EmbeddedMessage),
    FieldInfo::new("19/2/2/1", "hour", Uint32),
    FieldInfo::new("19/2/2/2", "minute", Uint32),
    FieldInfo::new("19/2/2/3", "seconds", Uint32),
    FieldInfo::new("19/2/2/4", "milliseconds", Uint32),
    FieldInfo::new("20", "end", EmbeddedMessage),
    FieldInfo::new("20/1", "date", EmbeddedMessage),
    FieldInfo::new("20/1/1", "year", Uint32),
    FieldInfo::new("20/1/2", "month", Uint32),
    FieldInfo::new("20/1/3", "day", Uint32),
    FieldInfo::new("20/2", "time", EmbeddedMessage),
    FieldInfo::new("20/2/1", "hour", Uint32),
    FieldInfo::new("20/2/2", "minute", Uint32),
    FieldInfo::new("20/2/3", "seconds", Uint32),
    FieldInfo::new("20/2/4", "milliseconds", Uint32),
    FieldInfo::new("20/4", "offset", Int32),
];

pub const CREATE_EXERCISE: &[FieldInfo] = &[
    FieldInfo::new("1", "start", EmbeddedMessage),
    FieldInfo::new("1/1", "date", EmbeddedMessage),
    FieldInfo::new("1/1/1", "year", Uint32),
    FieldInfo::new("1/1/2", "month", Uint32),
    FieldInfo::new("1/1/3", "day", Uint32),
    FieldInfo::new("1/2", "time", EmbeddedMessage),
    FieldInfo::new("1/2/1", "hour", Uint32),
    FieldInfo::new("1/2/2", "minute", Uint32),
    FieldInfo::new("1/2/3", "seconds", Uint32),
    FieldInfo::new("1/2/4", "milliseconds", Uint32),
    FieldInfo::new("1/4", "offset", Int32),
    FieldInfo::new("2", "duration", EmbeddedMessage),
    FieldInfo::new("2/1", "hours", Uint32),
    FieldInfo::new("2/2", "minutes", Uint32),
    FieldInfo::new("2/3", "seconds", Uint32),
    FieldInfo::new("2/4", "milliseconds", Uint32),
    FieldInfo::new("3", "sport", EmbeddedMessage),
    FieldInfo::new("3/1", "value", Uint64),
    FieldInfo::new("4", "distance", Float),
    FieldInfo::new("5", "calories", Uint32),
    FieldInfo::new("6", "training-load", EmbeddedMessage),
    FieldInfo::new("6/1", "load-value", Uint32),
    FieldInfo::new("6/2", "recovery-time", EmbeddedMessage),
    FieldInfo::new("6/2/1", "hours", Uint32),
    FieldInfo::new("6/2/2", "minutes", Uint32),
    FieldInfo::new("6/2/3", "seconds", Uint32),
    FieldInfo::new("6/2/4", "milliseconds", Uint32),
    FieldInfo::new("6/3", "carbs", Uint32),
    FieldInfo::new("6/4", "protein", Uint32),
    FieldInfo::new("6/5", "fat", Uint32),
    FieldInfo::new("7", "sensors", Enumerator),
    FieldInfo::new("9", "running-index", EmbeddedMessage),
    FieldInfo::new("9/1", "value", Uint32),
    FieldInfo::new("9/2", "duration", EmbeddedMessage),
    FieldInfo::new("9/2/1", "hours", Uint32),
    FieldInfo::new("9/2/2", "minutes", Uint32),
    FieldInfo::new("9/2/3", "seconds", Uint32),
    FieldInfo::new("9/2/4", "milliseconds", Uint32),
    FieldInfo::new("10", "ascent", Float),
    FieldInfo::new("11", "descent", Float),
    FieldInfo::new("12", "latitude", Double),
    FieldInfo::new("13", "longitude", Double),
    FieldInfo::new("14", "place", FieldType::String),
    // Contents not yet mapped; decoded as empty messages.
    FieldInfo::new("15", "exercise-result", EmbeddedMessage),
    FieldInfo::new("16", "exercise-counters", EmbeddedMessage),
    FieldInfo::new("17", "speed-calibration-offset", Float),
];
