//! Exercise components and their decoding

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::compression::maybe_inflate;
use crate::schema::SchemaKind;
use crate::types::DecodedMessage;
use crate::wire::decode;

/// One per-exercise file kind, in the order components are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Autolaps,
    Create,
    Laps,
    Route,
    Rrsamples,
    Samples,
    Statistics,
    Zones,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 8] = [
        ComponentKind::Autolaps,
        ComponentKind::Create,
        ComponentKind::Laps,
        ComponentKind::Route,
        ComponentKind::Rrsamples,
        ComponentKind::Samples,
        ComponentKind::Statistics,
        ComponentKind::Zones,
    ];

    /// File name suffix of this component.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Autolaps => "autolaps",
            ComponentKind::Create => "create",
            ComponentKind::Laps => "laps",
            ComponentKind::Route => "route",
            ComponentKind::Rrsamples => "rrsamples",
            ComponentKind::Samples => "samples",
            ComponentKind::Statistics => "statistics",
            ComponentKind::Zones => "zones",
        }
    }

    pub const fn schema_kind(&self) -> SchemaKind {
        match self {
            ComponentKind::Autolaps | ComponentKind::Laps => SchemaKind::Laps,
            ComponentKind::Create => SchemaKind::CreateExercise,
            ComponentKind::Route => SchemaKind::Route,
            ComponentKind::Rrsamples => SchemaKind::RrSamples,
            ComponentKind::Samples => SchemaKind::Samples,
            ComponentKind::Statistics => SchemaKind::Statistics,
            ComponentKind::Zones => SchemaKind::Zones,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL.into_iter().find(|kind| kind.as_str() == s).ok_or(())
    }
}

/// One recorded workout: its decoded components and the files they came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Exercise {
    components: BTreeMap<ComponentKind, DecodedMessage>,
    sources: Vec<PathBuf>,
}

impl Exercise {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a component. Empty messages are not stored.
    pub fn insert(&mut self, kind: ComponentKind, message: DecodedMessage, source: PathBuf) {
        if message.is_empty() {
            return;
        }
        self.components.insert(kind, message);
        self.sources.push(source);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(
        mut self,
        kind: ComponentKind,
        message: DecodedMessage,
        source: impl Into<PathBuf>,
    ) -> Self {
        self.insert(kind, message, source.into());
        self
    }

    pub fn get(&self, kind: ComponentKind) -> Option<&DecodedMessage> {
        self.components.get(&kind)
    }

    /// The component, or an empty message when it is absent.
    pub fn component(&self, kind: ComponentKind) -> &DecodedMessage {
        static EMPTY: DecodedMessage = DecodedMessage::new();
        self.components.get(&kind).unwrap_or(&EMPTY)
    }

    pub fn contains(&self, kind: ComponentKind) -> bool {
        self.components.contains_key(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.components.keys().copied()
    }

    /// Files that contributed a non-empty component, in decode order.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Read and decode one file against `kind`'s schema.
///
/// A file that cannot be read decodes to an empty message.
pub fn parse_file(kind: SchemaKind, path: &Path) -> DecodedMessage {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            warn!(path = %path.display(), %kind, error = %e, "Failed to open file");
            return DecodedMessage::new();
        }
    };
    let data = maybe_inflate(data);
    let message = decode(&data, &kind.schema());
    debug!(path = %path.display(), %kind, fields = message.len(), "Parsed file");
    message
}

/// Read and decode one exercise component file.
pub fn parse_component(kind: ComponentKind, path: &Path) -> DecodedMessage {
    parse_file(kind.schema_kind(), path)
}

/// Decode every file of one exercise.
///
/// Returns `None` when no component decoded to anything.
pub fn parse_exercise(id: &str, files: &BTreeMap<ComponentKind, PathBuf>) -> Option<Exercise> {
    let mut exercise = Exercise::new();
    for (kind, path) in files {
        exercise.insert(*kind, parse_component(*kind, path), path.clone());
    }

    if exercise.is_empty() {
        warn!(exercise = id, "Exercise has no usable components");
        None
    } else {
        debug!(exercise = id, components = exercise.components.len(), "Parsed exercise");
        Some(exercise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{SessionFixture, WireWriter, duration};

    #[test]
    fn kinds_parse_from_file_suffixes() {
        assert_eq!("autolaps".parse::<ComponentKind>(), Ok(ComponentKind::Autolaps));
        assert_eq!("rrsamples".parse::<ComponentKind>(), Ok(ComponentKind::Rrsamples));
        assert!("phases".parse::<ComponentKind>().is_err());
        assert_eq!(ComponentKind::Autolaps.schema_kind(), SchemaKind::Laps);
    }

    #[test]
    fn components_sort_in_decode_order() {
        let mut kinds = ComponentKind::ALL.to_vec();
        kinds.reverse();
        kinds.sort();
        assert_eq!(kinds, ComponentKind::ALL.to_vec());
    }

    #[test]
    fn empty_components_are_not_recorded() {
        let exercise = Exercise::new()
            .with(ComponentKind::Laps, DecodedMessage::new(), "laps")
            .with(
                ComponentKind::Create,
                DecodedMessage::new().with("calories", crate::types::DecodedValue::Uint32(1)),
                "create",
            );
        assert!(!exercise.contains(ComponentKind::Laps));
        assert!(exercise.component(ComponentKind::Laps).is_empty());
        assert_eq!(exercise.sources(), &[PathBuf::from("create")]);
    }

    #[test]
    fn parses_plain_and_gzipped_components() {
        let fixture = SessionFixture::new("session").unwrap();
        let create = WireWriter::new().message(2, duration(0, 30, 0, 0)).varint(5, 400).finish();
        let samples = WireWriter::new().varint(2, 120).varint(2, 121).finish();
        let create_path = fixture.write_exercise_file("1", "create", &create).unwrap();
        let samples_path = fixture.write_gzipped_exercise_file("1", "samples", &samples).unwrap();

        let files = BTreeMap::from([
            (ComponentKind::Create, create_path.clone()),
            (ComponentKind::Samples, samples_path.clone()),
            (ComponentKind::Route, fixture.dir().join("missing-route")),
        ]);
        let exercise = parse_exercise("1", &files).unwrap();

        assert_eq!(exercise.component(ComponentKind::Create).first_u64("calories"), Some(400));
        assert_eq!(exercise.component(ComponentKind::Samples).values("heartrate").len(), 2);
        assert!(!exercise.contains(ComponentKind::Route));
        assert_eq!(exercise.sources(), &[create_path, samples_path]);
    }

    #[test]
    fn unreadable_files_yield_no_exercise() {
        let files = BTreeMap::from([(ComponentKind::Create, PathBuf::from("/nonexistent/create"))]);
        assert!(parse_exercise("9", &files).is_none());
    }
}
