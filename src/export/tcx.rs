//! Training Center Database (TCX v2) export

use chrono::{DateTime, FixedOffset, TimeDelta};
use std::path::Path;
use tracing::{debug, warn};

use super::sport::tcx_sport;
use super::write_document;
use super::xml::{Element, to_document};
use crate::config::ExportOptions;
use crate::Result;
use crate::session::{
    ComponentKind, Exercise, TrainingSession, date_time, duration_ms, iso_time, sensor_offline,
};
use crate::types::DecodedValue;

const TCX_NAMESPACE: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const TCX_SCHEMA_LOCATION: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2 \
     http://www.garmin.com/xmlschemas/TrainingCenterDatabasev2.xsd";

/// Build the TCX tree for every exercise that has a `create` component.
///
/// Sessions with more than one exercise and a session `create` record are
/// wrapped in a `MultiSportSession`.
pub fn to_tcx(session: &TrainingSession, options: &ExportOptions) -> Element {
    let mut tcx = Element::new("TrainingCenterDatabase")
        .attr("xmlns", TCX_NAMESPACE)
        .attr("xmlns:xsi", XSI_NAMESPACE)
        .attr("xsi:schemaLocation", TCX_SCHEMA_LOCATION);

    let wrap = session.exercise_count() > 1 && !session.session().is_empty();
    let mut multisport = wrap.then(|| {
        Element::new("MultiSportSession")
            .child(Element::with_text("Id", iso_time(session.start_time())))
    });
    let mut activities = Element::new("Activities");

    for (id, exercise) in session.exercises() {
        let Some(activity) = activity(id, exercise) else {
            warn!(exercise = id, "Skipping exercise with no create data");
            continue;
        };
        match multisport.as_mut() {
            None => activities.push(activity),
            Some(multisport) => {
                let wrapper = if multisport.find("FirstSport").is_none() {
                    "FirstSport"
                } else {
                    "NextSport"
                };
                multisport.push(Element::new(wrapper).child(activity));
            }
        }
    }

    match multisport {
        Some(multisport) => tcx.push(activities.child(multisport)),
        None if activities.has_children() => tcx.push(activities),
        None => debug!("No activities to export"),
    }

    tcx.child(author(options))
}

fn activity(id: &str, exercise: &Exercise) -> Option<Element> {
    let create = exercise.get(ComponentKind::Create)?;
    let stats = exercise.component(ComponentKind::Statistics);
    let heartrate = stats.message(&["heartrate"]);

    let sport = tcx_sport(create.message(&["sport"]).first_u64("value").unwrap_or(0));
    let start = date_time(create.message(&["start"]));
    let start_text = iso_time(start);

    let total_seconds = duration_ms(create.message(&["duration"])) as f64 / 1000.0;
    let distance = create.first("distance").map_or_else(|| "0".to_string(), DecodedValue::to_text);
    let maximum_speed = stats
        .message(&["speed"])
        .first("maximum")
        .map_or_else(|| "0".to_string(), DecodedValue::to_text);
    let calories = create.first_u64("calories").unwrap_or(0);
    let average_hr = heartrate.first_u64("average").unwrap_or(0);
    let maximum_hr = heartrate.first_u64("maximum").unwrap_or(0);

    let mut lap = Element::new("Lap")
        .attr("StartTime", start_text.as_str())
        .child(Element::with_text("TotalTimeSeconds", total_seconds.to_string()))
        .child(Element::with_text("DistanceMeters", distance))
        .child(Element::with_text("MaximumSpeed", maximum_speed))
        .child(Element::with_text("Calories", calories.to_string()))
        .child(
            Element::new("AverageHeartRateBpm")
                .child(Element::with_text("Value", average_hr.to_string())),
        )
        .child(
            Element::new("MaximumHeartRateBpm")
                .child(Element::with_text("Value", maximum_hr.to_string())),
        )
        .child(Element::with_text("Intensity", "Active"))
        .child(Element::with_text("TriggerMethod", "Manual"));

    let mut track = Element::new("Track");
    for point in track_points(exercise, start) {
        track.push(point);
    }
    debug!(exercise = id, points = track.elements().count(), "Built TCX track");
    lap.push(track);

    Some(
        Element::new("Activity")
            .attr("Sport", sport.as_str())
            .child(Element::with_text("Id", start_text))
            .child(lap),
    )
}

/// Track points from index 0 until no series has a value left.
fn track_points(exercise: &Exercise, start: Option<DateTime<FixedOffset>>) -> Vec<Element> {
    let samples = exercise.component(ComponentKind::Samples);
    let route = exercise.component(ComponentKind::Route);
    let record_interval = duration_ms(samples.message(&["record-interval"]));

    let altitude = samples.values("altitude");
    let cadence = samples.values("cadence");
    let distance = samples.values("distance");
    let heartrate = samples.values("heartrate");
    let latitude = route.values("latitude");
    let longitude = route.values("longitude");

    let mut points = Vec::new();
    for index in 0.. {
        let mut point = Element::new("Trackpoint");

        if let (Some(lat), Some(lon)) = (latitude.get(index), longitude.get(index)) {
            point.push(
                Element::new("Position")
                    .child(Element::with_text("LatitudeDegrees", lat.to_text()))
                    .child(Element::with_text("LongitudeDegrees", lon.to_text())),
            );
        }
        if let Some(value) = altitude
            .get(index)
            .filter(|_| !sensor_offline(samples, "altitude", index))
        {
            point.push(Element::with_text("AltitudeMeters", value.to_text()));
        }
        if let Some(value) = distance
            .get(index)
            .filter(|_| !sensor_offline(samples, "distance", index))
        {
            point.push(Element::with_text("DistanceMeters", value.to_text()));
        }
        if let Some(value) = heartrate
            .get(index)
            .filter(|v| v.as_i64().is_some_and(|hr| hr > 0))
            .filter(|_| !sensor_offline(samples, "heartrate", index))
        {
            point.push(
                Element::new("HeartRateBpm").child(Element::with_text("Value", value.to_text())),
            );
        }
        if let Some(value) = cadence
            .get(index)
            .filter(|v| v.as_i64().is_some_and(|c| c >= 0))
            .filter(|_| !sensor_offline(samples, "cadence", index))
        {
            point.push(Element::with_text("Cadence", value.to_text()));
        }

        if !point.has_children() {
            break;
        }
        let time = (index as u64)
            .checked_mul(record_interval)
            .and_then(|offset| i64::try_from(offset).ok())
            .and_then(TimeDelta::try_milliseconds)
            .zip(start)
            .and_then(|(offset, start)| start.checked_add_signed(offset));
        point.insert(0, Element::with_text("Time", iso_time(time)));
        points.push(point);
    }
    points
}

fn author(options: &ExportOptions) -> Element {
    let [major, minor, build_major, build_minor] = options.version_parts();
    let version = Element::new("Version")
        .child(Element::with_text("VersionMajor", major))
        .child(Element::with_text("VersionMinor", minor))
        .child(Element::with_text("BuildMajor", build_major))
        .child(Element::with_text("BuildMinor", build_minor));
    let build = Element::new("Build")
        .child(version)
        .child(Element::with_text("Type", options.build_type.as_str()))
        .child(Element::with_text("Time", options.build_time()))
        .child(Element::with_text("Builder", options.builder.as_str()));

    Element::new("Author")
        .attr("xsi:type", "Application_t")
        .child(Element::with_text("Name", options.application_name.as_str()))
        .child(build)
        .child(Element::with_text("LangID", options.lang_id.as_str()))
        .child(Element::with_text("PartNumber", options.part_number.as_str()))
}

pub fn tcx_document(session: &TrainingSession, options: &ExportOptions) -> String {
    to_document(&to_tcx(session, options))
}

/// Write the TCX document to `path`.
pub fn write_tcx(
    session: &TrainingSession,
    path: impl AsRef<Path>,
    options: &ExportOptions,
) -> Result<()> {
    write_document(path.as_ref(), tcx_document(session, options).as_bytes())
}
