//! Physical profile of the user at the time of the session

use crate::types::FieldInfo;
use crate::types::FieldType::{EmbeddedMessage, Enumerator, Float, Uint32};

/// Every setting carries the date it was last modified.
pub const PHYSICAL_INFORMATION: &[FieldInfo] = &[
    FieldInfo::new("1", "birthday", EmbeddedMessage),
    FieldInfo::new("1/1", "value", EmbeddedMessage),
    FieldInfo::new("1/1/1", "year", Uint32),
    FieldInfo::new("1/1/2", "month", Uint32),
    FieldInfo::new("1/1/3", "day", Uint32),
    FieldInfo::new("1/2", "modified", EmbeddedMessage),
    FieldInfo::new("1/2/1", "date", EmbeddedMessage),
    FieldInfo::new("1/2/1/1", "year", Uint32),
    FieldInfo::new("1/2/1/2", "month", Uint32),
    FieldInfo::new("1/2/1/3", "day", Uint32),
    FieldInfo::new("1/2/2", "time", EmbeddedMessage),
    FieldInfo::new("1/2/2/1", "hour", Uint32),
    FieldInfo::new("1/2/2/2", "minute", Uint32),
    FieldInfo::new("1/2/2/3", "seconds", Uint32),
    FieldInfo::new("1/2/2/4", "milliseconds", Uint32),
    FieldInfo::new("2", "gender", EmbeddedMessage),
    FieldInfo::new("2/1", "value", Enumerator),
    FieldInfo::new("2/2", "modified", EmbeddedMessage),
    FieldInfo::new("2/2/1", "date", EmbeddedMessage),
    FieldInfo::new("2/2/1/1", "year", Uint32),
    FieldInfo::new("2/2/1/2", "month", Uint32),
    FieldInfo::new("2/2/1/3", "day", Uint32),
    FieldInfo::new("2/2/2", "time", EmbeddedMessage),
    FieldInfo::new("2/2/2/1", "hour", Uint32),
    FieldInfo::new("2/2/2/2", "minute", Uint32),
    FieldInfo::new("2/2/2/3", "seconds", Uint32),
    FieldInfo::new("2/2/2/4", "milliseconds", Uint32),
    FieldInfo::new("3", "weight", EmbeddedMessage),
    FieldInfo::new("3/1", "value", Float),
    FieldInfo::new("3/2", "modified", EmbeddedMessage),
    FieldInfo::new("3/2/1", "date", EmbeddedMessage),
    FieldInfo::new("3/2/1/1", "year", Uint32),
    FieldInfo::new("3/2/1/2", "month", Uint32),
    FieldInfo::new("3/2/1/3", "day", Uint32),
    FieldInfo::new("3/2/2", "time", EmbeddedMessage),
    FieldInfo::new("3/2/2/1", "hour", Uint32),
    FieldInfo::new("3/2/2/2", "minute", Uint32),
    FieldInfo::new("3/2/2/3", "seconds", Uint32),
    FieldInfo::new("3/2/2/4", "milliseconds", Uint32),
    FieldInfo::new("4", "height", EmbeddedMessage),
    FieldInfo::new("4/1", "value", Float),
    FieldInfo::new("4/2", "modified", EmbeddedMessage),
    FieldInfo::new("4/2/1", "date", EmbeddedMessage),
    FieldInfo::new("4/2/1/1", "year", Uint32),
    FieldInfo::new("4/2/1/2", "month", Uint32),
    FieldInfo::new("4/2/1/3", "day", Uint32),
    FieldInfo::new("4/2/2", "time", EmbeddedMessage),
    FieldInfo::new("4/2/2/1", "hour", Uint32),
    FieldInfo::new("4/2/2/2", "minute", Uint32),
    FieldInfo::new("4/2/2/3", "seconds", Uint32),
    FieldInfo::new("4/2/2/4", "milliseconds", Uint32),
    FieldInfo::new("5", "maximum-heartrate", EmbeddedMessage),
    FieldInfo::new("5/1", "value", Uint32),
    FieldInfo::new("5/2", "modified", EmbeddedMessage),
    FieldInfo::new("5/2/1", "date", EmbeddedMessage),
    FieldInfo::new("5/2/1/1", "year", Uint32),
    FieldInfo::new("5/2/1/2", "month", Uint32),
    FieldInfo::new("5/2/1/3", "day", Uint32),
    FieldInfo::new("5/2/2", "time", EmbeddedMessage),
    FieldInfo::new("5/2/2/1", "hour", Uint32),
    FieldInfo::new("5/2/2/2", "minute", Uint32),
    FieldInfo::new("5/2/2/3", "seconds", Uint32),
    FieldInfo::new("5/2/2/4", "milliseconds", Uint32),
    FieldInfo::new("5/3", "source", Enumerator),
    FieldInfo::new("6", "resting-heartrate", EmbeddedMessage),
    FieldInfo::new("6/1", "value", Uint32),
    FieldInfo::new("6/2", "modified", EmbeddedMessage),
    FieldInfo::new("6/2/1", "date", EmbeddedMessage),
    FieldInfo::new("6/2/1/1", "year", Uint32),
    FieldInfo::new("6/2/1/2", "month", Uint32),
    FieldInfo::new("6/2/1/3", "day", Uint32),
    FieldInfo::new("6/2/2", "time", EmbeddedMessage),
    FieldInfo::new("6/2/2/1", "hour", Uint32),
    FieldInfo::new("6/2/2/2", "minute", Uint32),
    FieldInfo::new("6/2/2/3", "seconds", Uint32),
    FieldInfo::new("6/2/2/4", "milliseconds", Uint32),
    FieldInfo::new("6/3", "source", Enumerator),
    FieldInfo::new("8", "aerobic-threshold", EmbeddedMessage),
    FieldInfo::new("8/1", "value", Uint32),
    FieldInfo::new("8/2", "modified", EmbeddedMessage),
    FieldInfo::new("8/2/1", "date", EmbeddedMessage),
    FieldInfo::new("8/2/1/1", "year", Uint32),
    FieldInfo::new("8/2/1/2", "month", Uint32),
    FieldInfo::new("8/2/1/3", "day", Uint32),
    FieldInfo::new("8/2/2", "time", EmbeddedMessage),
    FieldInfo::new("8/2/2/1", "hour", Uint32),
    FieldInfo::new("8/2/2/2", "minute", Uint32),
    FieldInfo::new("8/2/2/3", "seconds", Uint32),
    FieldInfo::new("8/2/2/4", "milliseconds", Uint32),
    FieldInfo::new("8/3", "source", Enumerator),
    FieldInfo::new("9", "anaerobic-threshold", EmbeddedMessage),
    FieldInfo::new("9/1", "value", Uint32),
    FieldInfo::new("9/2", "modified", EmbeddedMessage),
    FieldInfo::new("9/2/1", "date", EmbeddedMessage),
    FieldInfo::new("9/2/1/1", "year", Uint32),
    FieldInfo::new("9/2/1/2", "month", Uint32),
    FieldInfo::new("9/2/1/3", "day", Uint32),
    FieldInfo::new("9/2/2", "time", EmbeddedMessage),
    FieldInfo::new("9/2/2/1", "hour", Uint32),
    FieldInfo::new("9/2/2/2", "minute", Uint32),
    FieldInfo::new("9/2/2/3", "seconds", Uint32),
    FieldInfo::new("9/2/2/4", "milliseconds", Uint32),
    FieldInfo::new("9/3", "source", Enumerator),
    FieldInfo::new("10", "vo2max", EmbeddedMessage),
    FieldInfo::new("10/1", "value", Uint32),
    FieldInfo::new("10/2", "modified", EmbeddedMessage),
    FieldInfo::new("10/2/1", "date", EmbeddedMessage),
    FieldInfo::new("10/2/1/1", "year", Uint32),
    FieldInfo::new("10/2/1/2", "month", Uint32),
    FieldInfo::new("10/2/1/3", "day", Uint32),
    FieldInfo::new("10/2/2", "time", EmbeddedMessage),
    FieldInfo::new("10/2/2/1", "hour", Uint32),
    FieldInfo::new("10/2/2/2", "minute", Uint32),
    FieldInfo::new("10/2/2/3", "seconds", Uint32),
    FieldInfo::new("10/2/2/4", "milliseconds", Uint32),
    FieldInfo::new("10/3", "source", Enumerator),
    FieldInfo::new("11", "training-background", EmbeddedMessage),
    FieldInfo::new("11/1", "value", Enumerator),
    FieldInfo::new("11/2", "modified", EmbeddedMessage),
    FieldInfo::new("11/2/1", "date", EmbeddedMessage),
    FieldInfo::new("11/2/1/1", "year", Uint32),
    FieldInfo::new("11/2/1/2", "month", Uint32),
    FieldInfo::new("11/2/1/3", "day", Uint32),
    FieldInfo::new("11/2/2", "time", EmbeddedMessage),
    FieldInfo::new("11/2/2/1", "hour", Uint32),
    FieldInfo::new("11/2/2/2", "minute", Uint32),
    FieldInfo::new("11/2/2/3", "seconds", Uint32),
    FieldInfo::new("11/2/2/4", "milliseconds", Uint32),
    FieldInfo::new("13", "setting-13", EmbeddedMessage),
    FieldInfo::new("13/1", "value", Float),
    FieldInfo::new("13/2", "modified", EmbeddedMessage),
    FieldInfo::new("13/2/1", "date", EmbeddedMessage),
    FieldInfo::new("13/2/1/1", "year", Uint32),
    FieldInfo::new("13/2/1/2", "month", Uint32),
    FieldInfo::new("13/2/1/3", "day", Uint32),
    FieldInfo::new("13/2/2", "time", EmbeddedMessage),
    FieldInfo::new("13/2/2/1", "hour", Uint32),
    FieldInfo::new("13/2/2/2", "minute", Uint32),
    FieldInfo::new("13/2/2/3", "seconds", Uint32),
    FieldInfo::new("13/2/2/4", "milliseconds", Uint32),
    FieldInfo::new("100", "modified", EmbeddedMessage),
    FieldInfo::new("100/1", "date", EmbeddedMessage),
    FieldInfo::new("100/1/1", "year", Uint32),
    FieldInfo::new("100/1/2", "month", Uint32),
    FieldInfo::new("100/1/3", "day", Uint32),
    FieldInfo::new("100/2", "time", EmbeddedMessage),
    FieldInfo::new("100/2/1", "hour", Uint32),
    FieldInfo::new("100/2/2", "minute", Uint32),
    FieldInfo::new("100/2/3", "seconds", Uint32),
    FieldInfo::new("100/2/4", "milliseconds", Uint32),
];
