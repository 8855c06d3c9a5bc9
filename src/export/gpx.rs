//! GPX 1.1 track export

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use std::path::Path;
use tracing::{debug, warn};

use super::xml::{Element, to_document};
use super::write_document;
use crate::config::ExportOptions;
use crate::session::{ComponentKind, TrainingSession, date_time, iso_time};
use crate::types::DecodedValue;
use crate::Result;

const GPX_NAMESPACE: &str = "http://www.topografix.com/GPX/1/1";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const GPX_SCHEMA_LOCATION: &str =
    "http://www.topografix.com/GPX/1/1 http://www.topografix.com/GPX/1/1/gpx.xsd";

fn file_name(path: &Path) -> String {
    path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
}

fn text(values: &[DecodedValue], index: usize) -> String {
    values.get(index).map(DecodedValue::to_text).unwrap_or_default()
}

/// Build the GPX tree: one `trk` per exercise, one `trkseg` per route.
pub fn to_gpx(
    session: &TrainingSession,
    options: &ExportOptions,
    creation_time: DateTime<FixedOffset>,
) -> Element {
    let name = session.name();
    let metadata = Element::new("metadata")
        .child(Element::with_text("name", name.as_str()))
        .child(Element::with_text("desc", format!("GPX encoding of {}", name)))
        .child(
            Element::new("author").child(
                Element::new("link")
                    .attr("href", options.homepage.as_str())
                    .child(Element::with_text("text", options.application_name.as_str())),
            ),
        )
        .child(Element::with_text("time", iso_time(Some(creation_time))));

    let mut gpx = Element::new("gpx")
        .attr("version", "1.1")
        .attr("creator", format!("{} - {}", options.application(), options.homepage))
        .attr("xmlns", GPX_NAMESPACE)
        .attr("xmlns:xsi", XSI_NAMESPACE)
        .attr("xsi:schemaLocation", GPX_SCHEMA_LOCATION)
        .child(metadata);

    for (id, exercise) in session.exercises() {
        let sources: Vec<String> = exercise.sources().iter().map(|p| file_name(p)).collect();
        let mut trk = Element::new("trk").child(Element::with_text("src", sources.join(" ")));

        if let Some(route) = exercise.get(ComponentKind::Route) {
            let start = date_time(route.message(&["timestamp"]));
            let duration = route.values("duration");
            let latitude = route.values("latitude");
            let longitude = route.values("longitude");
            let altitude = route.values("altitude");
            let satellites = route.values("satellites");

            let lengths = [
                duration.len(),
                latitude.len(),
                longitude.len(),
                altitude.len(),
                satellites.len(),
            ];
            let points = lengths.iter().copied().min().unwrap_or(0);
            if lengths.iter().any(|len| *len != duration.len()) {
                warn!(
                    exercise = id,
                    duration = duration.len(),
                    latitude = latitude.len(),
                    longitude = longitude.len(),
                    altitude = altitude.len(),
                    satellites = satellites.len(),
                    "Route series differ in length, truncating"
                );
            }

            let mut trkseg = Element::new("trkseg");
            for index in 0..points {
                let offset = duration[index].as_i64().unwrap_or(0);
                let time = TimeDelta::try_milliseconds(offset)
                    .zip(start)
                    .and_then(|(offset, start)| start.checked_add_signed(offset));
                trkseg.push(
                    Element::new("trkpt")
                        .attr("lat", latitude[index].as_f64().unwrap_or(0.0).to_string())
                        .attr("lon", longitude[index].as_f64().unwrap_or(0.0).to_string())
                        .child(Element::with_text("ele", text(altitude, index)))
                        .child(Element::with_text("time", iso_time(time)))
                        .child(Element::with_text("sat", text(satellites, index))),
                );
            }
            debug!(exercise = id, points, "Built GPX track segment");
            trk.push(trkseg);
        }

        gpx.push(trk);
    }

    gpx
}

/// Render the GPX document with the current time as its creation time.
pub fn gpx_document(session: &TrainingSession, options: &ExportOptions) -> String {
    to_document(&to_gpx(session, options, Utc::now().fixed_offset()))
}

/// Write the GPX document to `path`.
pub fn write_gpx(
    session: &TrainingSession,
    path: impl AsRef<Path>,
    options: &ExportOptions,
) -> Result<()> {
    write_document(path.as_ref(), gpx_document(session, options).as_bytes())
}
