//! Field tables for every training file kind
//!
//! Each file a device synchronises is a tag/value stream whose layout is
//! fixed per file kind. The tables here map the field paths worth decoding
//! to a semantic name and declared type; anything else in a file is skipped.
//!
//! Tables are immutable constants. [`SchemaKind::schema`] indexes one for
//! lookup by the decoder.

mod create;
mod laps;
mod physical;
mod route;
mod samples;
mod statistics;
mod zones;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{FieldInfo, FieldSchema};

pub use create::{CREATE_EXERCISE, CREATE_SESSION};
pub use laps::LAPS;
pub use physical::PHYSICAL_INFORMATION;
pub use route::{ROUTE, RR_SAMPLES};
pub use samples::SAMPLES;
pub use statistics::STATISTICS;
pub use zones::ZONES;

/// The distinct record layouts found in a synchronised training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaKind {
    CreateSession,
    CreateExercise,
    /// Manual laps and auto laps
    Laps,
    PhysicalInformation,
    Route,
    RrSamples,
    Samples,
    Statistics,
    Zones,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 9] = [
        SchemaKind::CreateSession,
        SchemaKind::CreateExercise,
        SchemaKind::Laps,
        SchemaKind::PhysicalInformation,
        SchemaKind::Route,
        SchemaKind::RrSamples,
        SchemaKind::Samples,
        SchemaKind::Statistics,
        SchemaKind::Zones,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            SchemaKind::CreateSession => "create-session",
            SchemaKind::CreateExercise => "create-exercise",
            SchemaKind::Laps => "laps",
            SchemaKind::PhysicalInformation => "physical-information",
            SchemaKind::Route => "route",
            SchemaKind::RrSamples => "rrsamples",
            SchemaKind::Samples => "samples",
            SchemaKind::Statistics => "statistics",
            SchemaKind::Zones => "zones",
        }
    }

    pub const fn table(&self) -> &'static [FieldInfo] {
        match self {
            SchemaKind::CreateSession => CREATE_SESSION,
            SchemaKind::CreateExercise => CREATE_EXERCISE,
            SchemaKind::Laps => LAPS,
            SchemaKind::PhysicalInformation => PHYSICAL_INFORMATION,
            SchemaKind::Route => ROUTE,
            SchemaKind::RrSamples => RR_SAMPLES,
            SchemaKind::Samples => SAMPLES,
            SchemaKind::Statistics => STATISTICS,
            SchemaKind::Zones => ZONES,
        }
    }

    /// Index this kind's table for path lookup.
    pub fn schema(&self) -> FieldSchema {
        FieldSchema::from_table(self.label(), self.table())
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldType;

    #[test]
    fn every_table_validates() {
        for kind in SchemaKind::ALL {
            let schema = FieldSchema::new(kind.label(), kind.table());
            assert!(schema.is_ok(), "{} failed validation: {:?}", kind, schema.err());
            assert_eq!(schema.unwrap().len(), kind.table().len());
        }
    }

    #[test]
    fn statistics_maxima_have_their_own_paths() {
        let schema = SchemaKind::Statistics.schema();
        for parent in ["3", "5", "9", "10", "11"] {
            assert_eq!(schema.get(&format!("{}/1", parent)).map(|f| f.name), Some("average"));
            assert_eq!(schema.get(&format!("{}/2", parent)).map(|f| f.name), Some("maximum"));
        }
        assert_eq!(schema.get("10").map(|f| f.name), Some("incline"));
        assert_eq!(schema.get("11").map(|f| f.name), Some("decline"));
    }

    #[test]
    fn lap_stride_average_nests_under_stride() {
        let schema = SchemaKind::Laps.schema();
        assert_eq!(schema.get("1/2/7").map(|f| f.field_type), Some(FieldType::EmbeddedMessage));
        assert_eq!(schema.get("1/2/7/1").map(|f| f.name), Some("average"));
        assert_eq!(schema.get("2/1/4").map(|f| f.name), Some("milliseconds"));
    }

    #[test]
    fn session_heartrate_is_spelled_correctly() {
        let schema = SchemaKind::CreateSession.schema();
        assert_eq!(schema.get("8").map(|f| f.name), Some("heartrate"));
    }

    #[test]
    fn offline_intervals_have_both_bounds() {
        let schema = SchemaKind::Samples.schema();
        for sensor in ["3", "5", "10", "12", "14", "18", "19", "20"] {
            assert_eq!(schema.get(&format!("{}/1", sensor)).map(|f| f.name), Some("start-index"));
            assert_eq!(schema.get(&format!("{}/2", sensor)).map(|f| f.name), Some("stop-index"));
        }
    }
}
