//! Decoder and converter for Polar V2 training sessions.
//!
//! Pulsetrail reads the binary files a Polar device synchronises for one
//! training session, assembles them into a single immutable model and
//! renders that model as GPX, TCX or HRM.
//!
//! # Features
//!
//! - **Schema-driven decoding**: a sparse, path-keyed schema per file kind
//!   drives a generic wire decoder
//! - **Best effort**: corrupt or missing files cost only their own component
//! - **Three exporters**: GPX tracks, TCX activities and laps, HRM text files
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pulsetrail::{ExportOptions, OutputFormat, Pulsetrail};
//!
//! fn main() -> pulsetrail::Result<()> {
//!     let options = ExportOptions::default();
//!     let written = Pulsetrail::convert(
//!         "/data/v2-users-0000000-training-sessions-1",
//!         "/tmp/session",
//!         &[OutputFormat::Gpx, OutputFormat::Tcx, OutputFormat::Hrm],
//!         &options,
//!     )?;
//!     for path in written {
//!         println!("wrote {}", path.display());
//!     }
//!     Ok(())
//! }
//! ```

// Core types and error handling
pub mod config;
mod error;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Decoding pipeline
pub mod compression;
pub mod schema;
pub mod wire;

// Session model and exporters
pub mod export;
pub mod session;

// Core exports
pub use config::ExportOptions;
pub use error::*;
pub use types::{DecodedMessage, DecodedValue, FieldInfo, FieldSchema, FieldType};

// Pipeline exports
pub use schema::SchemaKind;
pub use wire::{WireError, decode};

// Main API exports
pub use export::{TcxSport, to_gpx, to_hrm, to_tcx, write_gpx, write_hrm, write_tcx};
pub use session::{ComponentKind, Exercise, TrainingSession};

use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Output document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Gpx,
    Tcx,
    Hrm,
}

impl OutputFormat {
    pub const fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Gpx => "gpx",
            OutputFormat::Tcx => "tcx",
            OutputFormat::Hrm => "hrm",
        }
    }
}

/// Unified entry point for session conversion.
pub struct Pulsetrail;

impl Pulsetrail {
    /// Discover and decode the training session stored under `base_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::NoExercises`] when no exercise file decoded to
    /// anything usable.
    pub fn open(base_name: impl AsRef<Path>) -> Result<TrainingSession> {
        TrainingSession::open(base_name)
    }

    /// Open a session and write it in every requested format.
    ///
    /// Documents are named `<output_base>.<extension>`; HRM adds an exercise
    /// index when the session has more than one exercise. A failed write is
    /// logged and does not stop the remaining formats. Returns the files
    /// actually written.
    ///
    /// # Errors
    ///
    /// Only opening the session can fail.
    pub fn convert(
        base_name: impl AsRef<Path>,
        output_base: impl AsRef<Path>,
        formats: &[OutputFormat],
        options: &ExportOptions,
    ) -> Result<Vec<PathBuf>> {
        let session = Self::open(base_name)?;
        let output_base = output_base.as_ref();

        let mut written = Vec::new();
        for format in formats {
            let path = output_path(output_base, *format);
            let result = match format {
                OutputFormat::Gpx => write_gpx(&session, &path, options).map(|()| vec![path]),
                OutputFormat::Tcx => write_tcx(&session, &path, options).map(|()| vec![path]),
                OutputFormat::Hrm => Ok(write_hrm(&session, output_base, options)),
            };
            match result {
                Ok(paths) => written.extend(paths),
                Err(e) => error!(format = format.extension(), error = %e, "Export failed"),
            }
        }

        info!(
            session = %session.name(),
            files = written.len(),
            "Conversion finished"
        );
        Ok(written)
    }
}

fn output_path(output_base: &Path, format: OutputFormat) -> PathBuf {
    let mut name = output_base.as_os_str().to_os_string();
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_paths_append_the_extension() {
        assert_eq!(
            output_path(Path::new("/out/run.1"), OutputFormat::Gpx),
            PathBuf::from("/out/run.1.gpx")
        );
        assert_eq!(OutputFormat::Tcx.extension(), "tcx");
    }
}
