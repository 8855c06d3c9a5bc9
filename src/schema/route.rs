//! GPS route and RR-interval series

use crate::types::FieldInfo;
use crate::types::FieldType::{Double, EmbeddedMessage, Sint32, Uint32};

/// Parallel per-fix series anchored at `timestamp`.
pub const ROUTE: &[FieldInfo] = &[
    FieldInfo::new("1", "duration", Uint32),
    FieldInfo::new("2", "latitude", Double),
    FieldInfo::new("3", "longitude", Double),
    FieldInfo::new("4", "altitude", Sint32),
    FieldInfo::new("5", "satellites", Uint32),
    FieldInfo::new("9", "timestamp", EmbeddedMessage),
    FieldInfo::new("9/1", "date", EmbeddedMessage),
    FieldInfo::new("9/1/1", "year", Uint32),
    FieldInfo::new("9/1/2", "month", Uint32),
    FieldInfo::new("9/1/3", "day", Uint32),
    FieldInfo::new("9/2", "time", EmbeddedMessage),
    FieldInfo::new("9/2/1", "hour", Uint32),
    FieldInfo::new("9/2/2", "minute", Uint32),
    FieldInfo::new("9/2/3", "seconds", Uint32),
    FieldInfo::new("9/2/4", "milliseconds", Uint32),
];

pub const RR_SAMPLES: &[FieldInfo] = &[FieldInfo::new("1", "value", Uint32)];
