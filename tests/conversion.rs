//! End-to-end conversion of on-disk training sessions

mod common;

use anyhow::{Context, Result};
use common::{Msg, Session, duration, gzip, timestamp};
use pulsetrail::export::xml::Element;
use pulsetrail::{
    ConvertError, ExportOptions, OutputFormat, Pulsetrail, TrainingSession, to_gpx, to_hrm, to_tcx,
};

const BASE: &str = "v2-users-0000000-training-sessions-1";

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn exercise_create(sport: u64) -> Vec<u8> {
    Msg::new()
        .msg(1, timestamp(2014, 7, 21, 6, 0))
        .msg(2, duration(30, 0))
        .msg(3, Msg::new().uint(1, sport))
        .into_bytes()
}

fn session_create(name: &str) -> Vec<u8> {
    Msg::new()
        .msg(1, timestamp(2014, 7, 21, 5, 55))
        .uint(2, 2)
        .msg(11, Msg::new().bytes(1, name.as_bytes()))
        .into_bytes()
}

fn child<'a>(element: &'a Element, path: &[&str]) -> Option<&'a Element> {
    path.iter().try_fold(element, |current, name| current.find(name))
}

#[test]
fn create_only_exercise_still_converts() -> Result<()> {
    init_tracing();
    let session = Session::new(BASE)?;
    session.write_exercise("100", "create", &exercise_create(1))?;

    let training = TrainingSession::open(session.base())?;
    assert_eq!(training.exercise_count(), 1);

    let tcx = to_tcx(&training, &ExportOptions::default());
    let activity = child(&tcx, &["Activities", "Activity"]).context("activity")?;
    assert_eq!(activity.attribute("Sport"), Some("Running"));
    let lap = activity.find("Lap").context("lap")?;
    assert_eq!(lap.find("TotalTimeSeconds").context("time")?.text_content(), "1800");
    assert_eq!(lap.find("DistanceMeters").context("distance")?.text_content(), "0");
    assert_eq!(lap.find("Calories").context("calories")?.text_content(), "0");
    assert!(!lap.find("Track").context("track")?.has_children());

    let hrm = to_hrm(&training, &ExportOptions::default());
    assert_eq!(hrm.len(), 1);
    let zeros = "0\r\n".repeat(11);
    assert!(hrm[0].contains(&format!("[HRZones]\r\n{}\r\n[Summary-123]", zeros)));
    assert!(!hrm[0].contains("[IntTimes]"));
    assert!(hrm[0].contains("SMode=000000000\r\n"));
    Ok(())
}

#[test]
fn two_exercises_form_a_multisport_session() -> Result<()> {
    init_tracing();
    let session = Session::new(BASE)?;
    session.write("create", &session_create("Brick"))?;
    session.write_exercise("2", "create", &exercise_create(2))?;
    session.write_exercise("1", "create", &exercise_create(1))?;

    let training = TrainingSession::open(session.base())?;
    let tcx = to_tcx(&training, &ExportOptions::default());
    let multisport = child(&tcx, &["Activities", "MultiSportSession"]).context("multisport")?;

    assert_eq!(multisport.find("Id").context("id")?.text_content(), "2014-07-21T05:55:00Z");
    let sports: Vec<(&str, Option<&str>)> = multisport
        .elements()
        .skip(1)
        .map(|wrapper| {
            let sport = wrapper.find("Activity").and_then(|a| a.attribute("Sport"));
            (wrapper.name(), sport)
        })
        .collect();
    assert_eq!(sports, vec![("FirstSport", Some("Running")), ("NextSport", Some("Biking"))]);
    Ok(())
}

#[test]
fn gzipped_route_becomes_a_gpx_track() -> Result<()> {
    init_tracing();
    let session = Session::new(BASE)?;
    session.write_exercise("1", "create", &exercise_create(1))?;
    let route = Msg::new()
        .msg(9, timestamp(2014, 7, 21, 6, 0))
        .uint(1, 0)
        .uint(1, 1000)
        .double(2, -33.75)
        .double(2, -33.5)
        .double(3, 151.25)
        .double(3, 151.5)
        .uint(4, 40) // sint32 20
        .uint(4, 41) // sint32 -21
        .uint(5, 9)
        .uint(5, 10)
        .into_bytes();
    session.write_exercise("1", "route", &gzip(&route)?)?;

    let training = TrainingSession::open(session.base())?;
    let created = chrono::DateTime::parse_from_rfc3339("2014-08-01T00:00:00+10:00")?;
    let gpx = to_gpx(&training, &ExportOptions::default(), created);

    let segment = child(&gpx, &["trk", "trkseg"]).context("segment")?;
    let points: Vec<&Element> = segment.elements().collect();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].attribute("lat"), Some("-33.75"));
    assert_eq!(points[1].attribute("lon"), Some("151.5"));
    assert_eq!(points[0].find("ele").context("ele")?.text_content(), "20");
    assert_eq!(points[1].find("ele").context("ele")?.text_content(), "-21");
    assert_eq!(points[1].find("time").context("time")?.text_content(), "2014-07-21T06:00:01Z");
    assert_eq!(points[1].find("sat").context("sat")?.text_content(), "10");
    assert_eq!(
        child(&gpx, &["metadata", "time"]).context("created")?.text_content(),
        "2014-08-01T00:00:00+10:00"
    );
    Ok(())
}

#[test]
fn truncated_samples_keep_their_prefix() -> Result<()> {
    init_tracing();
    let session = Session::new(BASE)?;
    session.write_exercise("1", "create", &exercise_create(1))?;
    let mut samples = Msg::new()
        .msg(1, duration(0, 1))
        .uint(2, 101)
        .uint(2, 102)
        .uint(2, 103)
        .into_bytes();
    // Heart rate tag followed by an unterminated varint.
    samples.extend_from_slice(&[0x10, 0x80]);
    session.write_exercise("1", "samples", &samples)?;

    let training = TrainingSession::open(session.base())?;
    let hrm = to_hrm(&training, &ExportOptions::default()).remove(0);
    let data = hrm.split("[HRData]\r\n").nth(1).context("HRData section")?;
    assert_eq!(data, "101\r\n102\r\n103\r\n");
    Ok(())
}

#[test]
fn convert_writes_every_format() -> Result<()> {
    init_tracing();
    let session = Session::new(BASE)?;
    session.write("create", &session_create("Café ✓"))?;
    session.write_exercise("1", "create", &exercise_create(1))?;
    session.write_exercise("2", "create", &exercise_create(2))?;

    let output = session.output("converted");
    let options = ExportOptions { build_time: Some("2014-07-21".into()), ..Default::default() };
    let written = Pulsetrail::convert(
        session.base(),
        &output,
        &[OutputFormat::Gpx, OutputFormat::Tcx, OutputFormat::Hrm],
        &options,
    )?;

    let names: Vec<String> = written
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    assert_eq!(names, vec!["converted.gpx", "converted.tcx", "converted.0.hrm", "converted.1.hrm"]);

    let tcx = std::fs::read_to_string(session.output("converted.tcx"))?;
    assert!(tcx.starts_with("<?xml version='1.0' encoding='utf-8'?>\n<TrainingCenterDatabase"));
    assert!(tcx.contains("<Time>2014-07-21</Time>"));

    let hrm = std::fs::read(session.output("converted.0.hrm"))?;
    let note = b"[Note]\r\nCaf\xe9 ?\r\n";
    assert!(hrm.windows(note.len()).any(|w| w == note));
    Ok(())
}

#[test]
fn convert_reports_sessions_without_exercises() -> Result<()> {
    let session = Session::new(BASE)?;
    session.write("create", &session_create("Empty"))?;

    let (formats, options) = ([OutputFormat::Gpx], ExportOptions::default());
    match Pulsetrail::convert(session.base(), session.output("out"), &formats, &options) {
        Err(ConvertError::NoExercises { base_name }) => assert_eq!(base_name, session.base()),
        other => panic!("expected NoExercises, got {:?}", other.map(|paths| paths.len())),
    }
    Ok(())
}
