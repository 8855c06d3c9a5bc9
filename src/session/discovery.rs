//! Locating the files of a training session on disk

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use super::ComponentKind;

/// Files of one exercise, keyed by component.
pub type ExerciseFiles = BTreeMap<ComponentKind, PathBuf>;

/// `<base>-<suffix>` as a path.
pub fn sibling_path(base_name: &Path, suffix: &str) -> PathBuf {
    let mut name = base_name.as_os_str().to_os_string();
    name.push("-");
    name.push(suffix);
    PathBuf::from(name)
}

/// Split a file name of the form `...-exercises-<id>-<kind>`.
///
/// Returns `None` for names that do not follow the pattern. Unknown
/// component kinds are reported so callers can log them.
pub fn split_exercise_file_name(file_name: &str) -> Option<(&str, Result<ComponentKind, &str>)> {
    let parts: Vec<&str> = file_name.split('-').collect();
    match parts.as_slice() {
        [.., "exercises", id, kind] => Some((*id, kind.parse().map_err(|_| *kind))),
        _ => None,
    }
}

/// Group the per-exercise files next to `base_name` by exercise id.
///
/// Ids are sorted, which is also the order exercises are exported in.
pub fn discover_exercises(base_name: &Path) -> BTreeMap<String, ExerciseFiles> {
    let mut exercises: BTreeMap<String, ExerciseFiles> = BTreeMap::new();

    let Some(prefix) = base_name
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| format!("{}-", n))
    else {
        warn!(base_name = %base_name.display(), "Base name has no usable file name");
        return exercises;
    };
    let dir = match base_name.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "Failed to list session directory");
            return exercises;
        }
    };

    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if !file_name.starts_with(&prefix) {
            continue;
        }
        match split_exercise_file_name(file_name) {
            Some((id, Ok(kind))) => {
                trace!(file_name, exercise = id, %kind, "Found exercise file");
                exercises.entry(id.to_string()).or_default().insert(kind, entry.path());
            }
            Some((id, Err(kind))) => {
                debug!(file_name, exercise = id, kind, "Skipping unsupported exercise file");
            }
            None => {}
        }
    }

    debug!(
        base_name = %base_name.display(),
        exercises = exercises.len(),
        "Discovered exercise files"
    );
    exercises
}
