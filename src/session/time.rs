//! Timestamp and duration accessors over decoded messages

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat};
use tracing::warn;

use crate::types::DecodedMessage;

fn leaf(message: &DecodedMessage, name: &str) -> u64 {
    message.first_u64(name).unwrap_or(0)
}

/// Compose the timestamp held in a `{date, time, offset}` message.
///
/// Absent leaves count as zero, so a message without a date yields `None`.
/// `offset` (minutes east of UTC) is applied when present, otherwise the
/// time is UTC.
pub fn date_time(message: &DecodedMessage) -> Option<DateTime<FixedOffset>> {
    let date = message.message(&["date"]);
    let time = message.message(&["time"]);

    let year = i32::try_from(leaf(date, "year")).ok()?;
    let month = u32::try_from(leaf(date, "month")).ok()?;
    let day = u32::try_from(leaf(date, "day")).ok()?;
    let hour = u32::try_from(leaf(time, "hour")).ok()?;
    let minute = u32::try_from(leaf(time, "minute")).ok()?;
    let second = u32::try_from(leaf(time, "seconds")).ok()?;
    let millis = u32::try_from(leaf(time, "milliseconds")).ok().filter(|ms| *ms < 1000)?;

    let naive = NaiveDate::from_ymd_opt(year, month, day)?
        .and_hms_milli_opt(hour, minute, second, millis)?;

    let offset_seconds = if message.contains("offset") {
        message.first_i64("offset").unwrap_or(0).saturating_mul(60)
    } else {
        0
    };
    let offset = match i32::try_from(offset_seconds).ok().and_then(FixedOffset::east_opt) {
        Some(offset) => offset,
        None => {
            warn!(offset_seconds, "Ignoring out-of-range UTC offset");
            FixedOffset::east_opt(0)?
        }
    };

    naive.and_local_timezone(offset).single()
}

/// Total milliseconds of a `{hours, minutes, seconds, milliseconds}` message.
pub fn duration_ms(message: &DecodedMessage) -> u64 {
    let hours = leaf(message, "hours");
    let minutes = leaf(message, "minutes");
    let seconds = leaf(message, "seconds");
    let millis = leaf(message, "milliseconds");
    hours
        .saturating_mul(60)
        .saturating_add(minutes)
        .saturating_mul(60)
        .saturating_add(seconds)
        .saturating_mul(1000)
        .saturating_add(millis)
}

/// `HH:MM:SS.mmm` rendering of a duration message, fields taken as stored.
pub fn duration_string(message: &DecodedMessage) -> String {
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        leaf(message, "hours"),
        leaf(message, "minutes"),
        leaf(message, "seconds"),
        leaf(message, "milliseconds")
    )
}

/// RFC 3339 with whole seconds, `Z` for UTC. Invalid times render empty.
pub fn iso_time(time: Option<DateTime<FixedOffset>>) -> String {
    time.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DecodedValue;
    use chrono::{Datelike, TimeDelta, Timelike};

    fn stamp(offset: Option<i32>) -> DecodedMessage {
        let date = DecodedMessage::new()
            .with("year", DecodedValue::Uint32(2014))
            .with("month", DecodedValue::Uint32(7))
            .with("day", DecodedValue::Uint32(21));
        let time = DecodedMessage::new()
            .with("hour", DecodedValue::Uint32(6))
            .with("minute", DecodedValue::Uint32(5))
            .with("seconds", DecodedValue::Uint32(4))
            .with("milliseconds", DecodedValue::Uint32(321));
        let message = DecodedMessage::new()
            .with("date", DecodedValue::Message(date))
            .with("time", DecodedValue::Message(time));
        match offset {
            Some(minutes) => message.with("offset", DecodedValue::Int32(minutes)),
            None => message,
        }
    }

    #[test]
    fn composes_utc_timestamps() {
        let time = date_time(&stamp(None)).unwrap();
        assert_eq!((time.year(), time.month(), time.day()), (2014, 7, 21));
        assert_eq!(time.nanosecond(), 321_000_000);
        assert_eq!(time.offset().local_minus_utc(), 0);
        assert_eq!(iso_time(Some(time)), "2014-07-21T06:05:04Z");
    }

    #[test]
    fn applies_offset_in_minutes() {
        let time = date_time(&stamp(Some(600))).unwrap();
        assert_eq!(time.offset().local_minus_utc(), 36_000);
        assert_eq!(iso_time(Some(time)), "2014-07-21T06:05:04+10:00");
        assert_eq!(
            iso_time(Some(time + TimeDelta::milliseconds(1_679))),
            "2014-07-21T06:05:06+10:00"
        );
    }

    #[test]
    fn missing_date_is_invalid() {
        assert!(date_time(&DecodedMessage::new()).is_none());
        assert_eq!(iso_time(None), "");
    }

    #[test]
    fn durations_default_absent_fields_to_zero() {
        let message = DecodedMessage::new()
            .with("hours", DecodedValue::Uint32(1))
            .with("seconds", DecodedValue::Uint32(5))
            .with("milliseconds", DecodedValue::Uint32(7));
        assert_eq!(duration_ms(&message), 3_605_007);
        assert_eq!(duration_string(&message), "01:00:05.007");
        assert_eq!(duration_ms(&DecodedMessage::new()), 0);
        assert_eq!(duration_string(&DecodedMessage::new()), "00:00:00.000");
    }
}
