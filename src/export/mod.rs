//! Document emitters
//!
//! Every emitter reads an assembled [`TrainingSession`](crate::TrainingSession)
//! and never mutates it:
//!
//! - [`to_gpx`] / [`write_gpx`]: GPX 1.1 tracks from each exercise's route
//! - [`to_tcx`] / [`write_tcx`]: a Training Center Database with laps and track points
//! - [`to_hrm`] / [`write_hrm`]: one Polar HRM text file per exercise
//!
//! The XML emitters build an [`xml::Element`] tree first so callers can
//! inspect or post-process it before rendering.

mod gpx;
mod hrm;
mod sport;
mod tcx;
pub mod xml;

pub use gpx::{gpx_document, to_gpx, write_gpx};
pub use hrm::{compact_zones, hr_zone_lines, hrm_path, to_hrm, write_hrm};
pub use sport::{TcxSport, lookup_sport, tcx_sport};
pub use tcx::{tcx_document, to_tcx, write_tcx};

use std::path::Path;
use tracing::info;

use crate::{ConvertError, Result};

/// Write a rendered document, mapping failures to [`ConvertError::Write`].
pub(crate) fn write_document(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|e| ConvertError::write_error(path.to_path_buf(), e))?;
    info!(path = %path.display(), bytes = bytes.len(), "Wrote document");
    Ok(())
}
