//! Sensor-offline interval checks over the `samples` component

use tracing::warn;

use crate::types::DecodedMessage;

/// Whether `index` falls inside one of `sensor`'s offline intervals.
///
/// Intervals come from the `<sensor>-offline` entries and are inclusive at
/// both ends. Entries missing either bound are ignored.
pub fn sensor_offline(samples: &DecodedMessage, sensor: &str, index: usize) -> bool {
    let key = format!("{}-offline", sensor);
    samples.messages(&key).any(|interval| {
        match (interval.first_u64("start-index"), interval.first_u64("stop-index")) {
            (Some(start), Some(stop)) => (start..=stop).contains(&(index as u64)),
            _ => {
                warn!(sensor, ?interval, "Ignoring invalid offline entry");
                false
            }
        }
    })
}

/// Whether `sensor` has at least one sample outside its offline intervals.
pub fn have_any_samples(samples: &DecodedMessage, sensor: &str) -> bool {
    (0..samples.values(sensor).len()).any(|index| !sensor_offline(samples, sensor, index))
}
