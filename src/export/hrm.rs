//! Polar HRM text export
//!
//! One document per exercise, sections in the fixed order HRM readers
//! expect. Lines end in CRLF and files are written as Latin-1.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

use crate::config::ExportOptions;
use crate::session::{
    ComponentKind, Exercise, TrainingSession, date_time, duration_ms, duration_string,
    have_any_samples,
};
use crate::types::DecodedMessage;

/// HRM supports three target zones in `[Params]`.
const TARGET_ZONES: usize = 3;
/// `[HRZones]` always has this many lines.
const HR_ZONE_LINES: usize = 11;
/// At most this many zones fit in `[HRZones]`.
const MAX_HR_ZONES: usize = HR_ZONE_LINES - 1;

fn round(value: f64) -> i64 {
    value.round() as i64
}

fn zone_duration(zone: &DecodedMessage) -> u64 {
    duration_ms(zone.message(&["duration"]))
}

/// Drop zero-duration zones, front to back, until at most three remain.
///
/// Zones with time in them are never dropped, so more than three may be left.
pub fn compact_zones<'a>(zones: &[&'a DecodedMessage]) -> Vec<&'a DecodedMessage> {
    let mut remaining = zones.len();
    zones
        .iter()
        .filter(|zone| {
            if remaining > TARGET_ZONES && zone_duration(zone) == 0 {
                remaining -= 1;
                false
            } else {
                true
            }
        })
        .copied()
        .collect()
}

/// The eleven `[HRZones]` lines.
///
/// Zones are keyed by their high limit, a later zone replacing an earlier one
/// with the same high limit. Only the ten highest are kept. Highs are listed
/// from the top down, then the lowest zone's low limit, then `0` padding.
pub fn hr_zone_lines(zones: &[&DecodedMessage]) -> Vec<String> {
    let mut limits: BTreeMap<u64, u64> = BTreeMap::new();
    for zone in zones {
        let zone_limits = zone.message(&["limits"]);
        limits.insert(
            zone_limits.first_u64("high").unwrap_or(0),
            zone_limits.first_u64("low").unwrap_or(0),
        );
    }
    while limits.len() > MAX_HR_ZONES {
        limits.pop_first();
    }

    let mut lines: Vec<String> = limits.keys().rev().map(u64::to_string).collect();
    if let Some(low) = limits.values().next() {
        lines.push(low.to_string());
    }
    lines.resize(HR_ZONE_LINES, "0".to_string());
    lines
}

fn lap_note(lap_type: u64) -> &'static str {
    match lap_type {
        1 => "Distance based lap",
        2 => "Duration based lap",
        3 => "Location based lap",
        _ => "Manual lap",
    }
}

struct Physical {
    max_hr: u64,
    rest_hr: u64,
    aerobic: u64,
    anaerobic: u64,
}

impl Physical {
    fn from_message(physical: &DecodedMessage) -> Self {
        let value = |name: &str| physical.message(&[name]).first_u64("value").unwrap_or(0);
        Self {
            max_hr: value("maximum-heartrate"),
            rest_hr: value("resting-heartrate"),
            aerobic: value("aerobic-threshold"),
            anaerobic: value("anaerobic-threshold"),
        }
    }

    /// Index of the `[Summary-TH]` bucket a heart rate falls in.
    fn bucket(&self, hr: u64) -> usize {
        if hr > self.max_hr {
            0
        } else if hr > self.anaerobic {
            1
        } else if hr > self.aerobic {
            2
        } else if hr > self.rest_hr {
            3
        } else {
            4
        }
    }
}

fn exercise_hrm(session: &TrainingSession, exercise: &Exercise, options: &ExportOptions) -> String {
    let create = exercise.component(ComponentKind::Create);
    let samples = exercise.component(ComponentKind::Samples);
    let stats = exercise.component(ComponentKind::Statistics);
    let zones = exercise.component(ComponentKind::Zones);
    let physical = Physical::from_message(session.physical());
    let physical_message = session.physical();

    let have_speed = have_any_samples(samples, "speed");
    let have_cadence = have_any_samples(samples, "cadence");
    let have_altitude = have_any_samples(samples, "altitude");
    let flag = |present: bool| if present { '1' } else { '0' };

    let start = date_time(create.message(&["start"]));
    let record_interval = duration_ms(samples.message(&["record-interval"]));
    let interval = round(record_interval as f64 / 1000.0);

    let mut lines = vec![
        "[Params]".to_string(),
        "Version=107".to_string(),
        "Monitor=0".to_string(),
        format!("SMode={}{}{}000000", flag(have_speed), flag(have_cadence), flag(have_altitude)),
        format!("Date={}", start.map(|t| t.format("%Y%m%d").to_string()).unwrap_or_default()),
        format!(
            "StartTime={}",
            start.map(|t| t.format("%H:%M:%S%.3f").to_string()).unwrap_or_default()
        ),
        format!("Length={}", duration_string(create.message(&["duration"]))),
        format!("Interval={}", interval),
    ];

    let hr_zones: Vec<&DecodedMessage> = zones.messages("heartrate").collect();
    let compacted = compact_zones(&hr_zones);
    let targets = &compacted[compacted.len().saturating_sub(TARGET_ZONES)..];
    for (index, zone) in targets.iter().enumerate() {
        let limits = zone.message(&["limits"]);
        lines.push(format!("Upper{}={}", index + 1, limits.first_u64("high").unwrap_or(0)));
        lines.push(format!("Lower{}={}", index + 1, limits.first_u64("low").unwrap_or(0)));
    }
    for (index, zone) in targets.iter().enumerate() {
        let seconds = zone_duration(zone) / 1000;
        lines.push(format!("Timer{}={:02}:{:02}", index + 1, seconds / 60, seconds % 60));
    }

    let weight = physical_message.message(&["weight"]).first_f64("value").unwrap_or(0.0) as f32;
    lines.extend([
        format!("MaxHR={}", physical.max_hr),
        format!("RestHR={}", physical.rest_hr),
        "StartDelay=0".to_string(),
        format!("VO2max={}", physical_message.message(&["vo2max"]).first_u64("value").unwrap_or(0)),
        format!("Weight={}", weight),
    ]);

    let session_create = session.session();
    let note = if session_create.contains("note") {
        session_create.message(&["note"]).first_str("text").unwrap_or_default().to_string()
    } else if session_create.contains("session-name") {
        session_create.message(&["session-name"]).first_str("text").unwrap_or_default().to_string()
    } else {
        format!("Exported by {}", options.application())
    };
    lines.extend([String::new(), "[Note]".to_string(), note]);

    lines.extend([String::new(), "[HRZones]".to_string()]);
    lines.extend(hr_zone_lines(&hr_zones));

    let manual_laps: Vec<&DecodedMessage> =
        exercise.component(ComponentKind::Laps).messages("laps").collect();
    let (laps, is_auto): (Vec<&DecodedMessage>, bool) = if manual_laps.is_empty() {
        (exercise.component(ComponentKind::Autolaps).messages("laps").collect(), true)
    } else {
        (manual_laps, false)
    };
    if !laps.is_empty() {
        lines.extend([String::new(), "[IntTimes]".to_string()]);
        for lap in &laps {
            lines.extend(lap_rows(lap, is_auto));
        }
        lines.extend([String::new(), "[IntNotes]".to_string()]);
        for (index, lap) in laps.iter().enumerate() {
            let lap_type = lap.message(&["header"]).first_u64("lap-type").unwrap_or(0);
            lines.push(format!("{} {}", index + 1, lap_note(lap_type)));
        }
    }

    lines.extend([String::new(), "[Summary-123]".to_string()]);

    let heartrate = samples.values("heartrate");
    let mut buckets = [0i64; 5];
    for hr in heartrate {
        buckets[physical.bucket(hr.as_u64().unwrap_or(0))] += 1;
    }
    let count = heartrate.len() as i64;
    let mut row1 = vec![count.saturating_mul(interval).to_string()];
    row1.extend(buckets.iter().map(|bucket| bucket.saturating_mul(interval).to_string()));
    lines.extend([
        String::new(),
        "[Summary-TH]".to_string(),
        row1.join("\t"),
        format!(
            "{}\t{}\t{}\t{}",
            physical.max_hr, physical.anaerobic, physical.aerobic, physical.rest_hr
        ),
        format!("0\t{}", count),
    ]);

    let altitude_stats = stats.message(&["altitude"]);
    let speed_stats = stats.message(&["speed"]);
    lines.extend([
        String::new(),
        "[Trip]".to_string(),
        round(create.first_f64("distance").unwrap_or(0.0) / 100.0).to_string(),
        round(create.first_f64("ascent").unwrap_or(0.0)).to_string(),
        round(duration_ms(create.message(&["duration"])) as f64 / 1000.0).to_string(),
        round(altitude_stats.first_f64("average").unwrap_or(0.0)).to_string(),
        round(altitude_stats.first_f64("maximum").unwrap_or(0.0)).to_string(),
        round(speed_stats.first_f64("average").unwrap_or(0.0) * 128.0).to_string(),
        round(speed_stats.first_f64("maximum").unwrap_or(0.0) * 128.0).to_string(),
        "0".to_string(),
    ]);

    lines.extend([String::new(), "[HRData]".to_string()]);
    let speed = samples.values("speed");
    let cadence = samples.values("cadence");
    let altitude = samples.values("altitude");
    for (index, hr) in heartrate.iter().enumerate() {
        let mut row = vec![hr.as_u64().unwrap_or(0).to_string()];
        if have_speed {
            let value = speed.get(index).and_then(|v| v.as_f64()).map_or(0, |v| round(v * 10.0));
            row.push(value.to_string());
        }
        if have_cadence {
            row.push(cadence.get(index).and_then(|v| v.as_u64()).unwrap_or(0).to_string());
        }
        if have_altitude {
            row.push(altitude.get(index).and_then(|v| v.as_f64()).map_or(0, round).to_string());
        }
        lines.push(row.join("\t"));
    }

    let mut text = lines.join("\r\n");
    text.push_str("\r\n");
    text
}

/// The five `[IntTimes]` rows for one lap.
fn lap_rows(lap: &DecodedMessage, is_auto: bool) -> [String; 5] {
    let header = lap.message(&["header"]);
    let stats = lap.message(&["stats"]);
    let hr = stats.message(&["heartrate"]);
    let hr_value = |name: &str| hr.first_u64(name).unwrap_or(0);
    let distance = header.first_f64("distance").unwrap_or(0.0);
    let interval_lap = matches!(header.first_u64("lap-type"), Some(1 | 2));
    let temperature = stats.message(&["temperature"]).first_f64("average").unwrap_or(0.0) as f32;

    [
        format!(
            "{}\t{}\t{}\t{}\t{}",
            duration_string(header.message(&["split-time"])),
            hr_value("average"),
            hr_value("minimum"),
            hr_value("average"),
            hr_value("maximum"),
        ),
        "0\t0\t0\t0\t0\t0".to_string(),
        format!(
            "0\t0\t0\t{}\t{}",
            round(header.first_f64("ascent").unwrap_or(0.0) / 10.0),
            round(distance / 100.0),
        ),
        format!(
            "{}\t{}\t{}\t{}\t0\t0",
            u8::from(interval_lap),
            round(distance),
            stats.message(&["power"]).first_u64("average").unwrap_or(0),
            temperature,
        ),
        format!(
            "{}\t{}\t0\t0\t0\t0",
            stats.message(&["stride"]).first_u64("average").unwrap_or(0),
            u8::from(is_auto),
        ),
    ]
}

/// One HRM document per exercise, in exercise id order.
pub fn to_hrm(session: &TrainingSession, options: &ExportOptions) -> Vec<String> {
    session
        .exercises()
        .map(|(id, exercise)| {
            debug!(exercise = id, "Building HRM document");
            exercise_hrm(session, exercise, options)
        })
        .collect()
}

/// `<base>.hrm` for a single document, `<base>.<index>.hrm` otherwise.
pub fn hrm_path(output_base: &Path, index: usize, count: usize) -> PathBuf {
    let mut name = output_base.as_os_str().to_os_string();
    if count == 1 {
        name.push(".hrm");
    } else {
        name.push(format!(".{}.hrm", index));
    }
    PathBuf::from(name)
}

/// Latin-1 bytes; characters outside it become `?`.
fn latin1(text: &str) -> Vec<u8> {
    text.chars().map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?')).collect()
}

/// Write every HRM document next to `output_base`.
///
/// Returns the files written. Files that cannot be written are logged and
/// skipped.
pub fn write_hrm(
    session: &TrainingSession,
    output_base: impl AsRef<Path>,
    options: &ExportOptions,
) -> Vec<PathBuf> {
    let output_base = output_base.as_ref();
    let documents = to_hrm(session, options);
    if documents.is_empty() {
        warn!(base_name = %output_base.display(), "No exercises to export as HRM");
    }

    let count = documents.len();
    documents
        .iter()
        .enumerate()
        .filter_map(|(index, document)| {
            let path = hrm_path(output_base, index, count);
            match super::write_document(&path, &latin1(document)) {
                Ok(()) => Some(path),
                Err(e) => {
                    error!(path = %path.display(), error = %e, "Failed to write HRM file");
                    None
                }
            }
        })
        .collect()
}
