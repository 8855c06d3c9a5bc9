//! Training session assembly
//!
//! A synchronised training session is a family of files sharing one base
//! name:
//!
//! - `<base>-create`: session metadata (start, duration, name, note)
//! - `<base>-physical-information`: the user's profile (thresholds, weight)
//! - `<base>-exercises-<id>-<kind>`: one file per exercise component
//!
//! [`TrainingSession::open`] discovers and decodes them into one immutable
//! model that every exporter reads.
//!
//! ## Failure behaviour
//!
//! Missing or corrupt files only cost their own component. Opening fails
//! only when no exercise has any usable component.

mod discovery;
mod exercise;
mod samples;
mod time;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::schema::SchemaKind;
use crate::types::DecodedMessage;
use crate::{ConvertError, Result};

pub use discovery::{ExerciseFiles, discover_exercises, sibling_path, split_exercise_file_name};
pub use exercise::{ComponentKind, Exercise, parse_component, parse_exercise, parse_file};
pub use samples::{have_any_samples, sensor_offline};
pub use time::{date_time, duration_ms, duration_string, iso_time};

/// Every decoded file of one training session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrainingSession {
    base_name: PathBuf,
    session: DecodedMessage,
    physical: DecodedMessage,
    exercises: BTreeMap<String, Exercise>,
}

impl TrainingSession {
    /// Discover and decode the session stored under `base_name`.
    ///
    /// # Errors
    ///
    /// [`ConvertError::NoExercises`] when no exercise decoded to anything.
    pub fn open(base_name: impl AsRef<Path>) -> Result<Self> {
        let base_name = base_name.as_ref();
        debug!(base_name = %base_name.display(), "Opening training session");

        let physical = parse_file(
            SchemaKind::PhysicalInformation,
            &sibling_path(base_name, "physical-information"),
        );
        let session = parse_file(SchemaKind::CreateSession, &sibling_path(base_name, "create"));

        let exercises: BTreeMap<String, Exercise> = discover_exercises(base_name)
            .iter()
            .filter_map(|(id, files)| {
                parse_exercise(id, files).map(|exercise| (id.clone(), exercise))
            })
            .collect();

        if exercises.is_empty() {
            return Err(ConvertError::no_exercises(base_name));
        }

        info!(
            base_name = %base_name.display(),
            exercises = exercises.len(),
            "Training session parsed"
        );
        Ok(Self::from_parts(base_name, session, physical, exercises))
    }

    /// Assemble a session from already decoded parts.
    pub fn from_parts(
        base_name: impl Into<PathBuf>,
        session: DecodedMessage,
        physical: DecodedMessage,
        exercises: BTreeMap<String, Exercise>,
    ) -> Self {
        Self { base_name: base_name.into(), session, physical, exercises }
    }

    pub fn base_name(&self) -> &Path {
        &self.base_name
    }

    /// Last component of the base name, used as the document name.
    pub fn name(&self) -> String {
        self.base_name
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// The session-level `create` record.
    pub fn session(&self) -> &DecodedMessage {
        &self.session
    }

    pub fn physical(&self) -> &DecodedMessage {
        &self.physical
    }

    /// Exercises in id order.
    pub fn exercises(&self) -> impl Iterator<Item = (&str, &Exercise)> {
        self.exercises.iter().map(|(id, exercise)| (id.as_str(), exercise))
    }

    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.get(id)
    }

    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_valid(&self) -> bool {
        !self.exercises.is_empty()
    }

    /// Session start time from `create/start`.
    pub fn start_time(&self) -> Option<DateTime<FixedOffset>> {
        date_time(self.session.message(&["start"]))
    }

    /// Dump the decoded model as YAML for inspection.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| ConvertError::Serialize {
            what: "training session".to_string(),
            details: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{SessionFixture, WireWriter, duration, timestamp};

    fn write_basic_session(fixture: &SessionFixture) {
        let session = WireWriter::new()
            .message(1, timestamp((2014, 7, 21), (6, 0, 0, 0), Some(600)))
            .varint(2, 2)
            .message(5, duration(1, 0, 0, 0))
            .finish();
        fixture.write_session_file("create", &session).unwrap();

        let physical = WireWriter::new()
            .message(5, WireWriter::new().varint(1, 190))
            .message(6, WireWriter::new().varint(1, 50))
            .finish();
        fixture.write_session_file("physical-information", &physical).unwrap();

        let create = WireWriter::new()
            .message(1, timestamp((2014, 7, 21), (6, 0, 0, 0), None))
            .message(3, WireWriter::new().varint(1, 1))
            .finish();
        fixture.write_exercise_file("20", "create", &create).unwrap();
        fixture.write_exercise_file("10", "create", &create).unwrap();
    }

    #[test]
    fn opens_a_session_from_disk() {
        let fixture = SessionFixture::new("v2-users-1-training-sessions-1").unwrap();
        write_basic_session(&fixture);

        let session = TrainingSession::open(fixture.base_name()).unwrap();
        assert_eq!(session.name(), "v2-users-1-training-sessions-1");
        assert_eq!(session.exercise_count(), 2);
        let ids: Vec<&str> = session.exercises().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["10", "20"]);
        assert_eq!(session.session().first_u64("exercise-count"), Some(2));
        assert_eq!(
            session.physical().message(&["maximum-heartrate"]).first_u64("value"),
            Some(190)
        );
        assert_eq!(iso_time(session.start_time()), "2014-07-21T06:00:00+10:00");
    }

    #[test]
    fn session_without_exercise_data_fails() {
        let fixture = SessionFixture::new("empty").unwrap();
        fixture.write_session_file("create", &WireWriter::new().varint(2, 1).finish()).unwrap();
        fixture.write_exercise_file("1", "create", b"").unwrap();

        match TrainingSession::open(fixture.base_name()) {
            Err(ConvertError::NoExercises { base_name }) => {
                assert_eq!(base_name, fixture.base_name());
            }
            other => panic!("expected NoExercises, got {:?}", other),
        }
    }

    #[test]
    fn missing_session_files_are_not_fatal() {
        let fixture = SessionFixture::new("partial").unwrap();
        let samples = WireWriter::new().varint(2, 100).finish();
        fixture.write_exercise_file("1", "samples", &samples).unwrap();

        let session = TrainingSession::open(fixture.base_name()).unwrap();
        assert!(session.session().is_empty());
        assert!(session.physical().is_empty());
        assert!(session.start_time().is_none());
        assert!(session.is_valid());
    }

    #[test]
    fn dumps_yaml() {
        let fixture = SessionFixture::new("yaml").unwrap();
        write_basic_session(&fixture);
        let yaml = TrainingSession::open(fixture.base_name()).unwrap().to_yaml().unwrap();
        assert!(yaml.contains("exercise-count"));
        assert!(yaml.contains("maximum-heartrate"));
    }
}
