//! Decoded value tree produced by the wire decoder

use serde::Serialize;
use std::collections::BTreeMap;

/// Shared empty message handed out for absent nested messages.
static EMPTY_MESSAGE: DecodedMessage = DecodedMessage::new();

/// A single decoded field value, tagged by the type its schema declared.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DecodedValue {
    Uint32(u32),
    Uint64(u64),
    Int32(i32),
    Sint32(i32),
    Float(f32),
    Double(f64),
    String(String),
    Bytes(Vec<u8>),
    Enumerator(u64),
    Message(DecodedMessage),
}

impl DecodedValue {
    /// Unsigned view of an integer value. Negative integers and floats yield `None`.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            DecodedValue::Uint32(v) => Some(u64::from(*v)),
            DecodedValue::Uint64(v) | DecodedValue::Enumerator(v) => Some(*v),
            DecodedValue::Int32(v) | DecodedValue::Sint32(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Signed view of an integer value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DecodedValue::Uint32(v) => Some(i64::from(*v)),
            DecodedValue::Uint64(v) | DecodedValue::Enumerator(v) => i64::try_from(*v).ok(),
            DecodedValue::Int32(v) | DecodedValue::Sint32(v) => Some(i64::from(*v)),
            _ => None,
        }
    }

    /// Floating point view of any numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DecodedValue::Float(v) => Some(f64::from(*v)),
            DecodedValue::Double(v) => Some(*v),
            other => other.as_i64().map(|v| v as f64).or_else(|| other.as_u64().map(|v| v as f64)),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DecodedValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_message(&self) -> Option<&DecodedMessage> {
        match self {
            DecodedValue::Message(m) => Some(m),
            _ => None,
        }
    }

    /// Text rendering used by the XML emitters.
    ///
    /// Integers print in decimal, floats with the shortest representation
    /// that round-trips, strings verbatim. Bytes and messages render empty.
    pub fn to_text(&self) -> String {
        match self {
            DecodedValue::Uint32(v) => v.to_string(),
            DecodedValue::Uint64(v) | DecodedValue::Enumerator(v) => v.to_string(),
            DecodedValue::Int32(v) | DecodedValue::Sint32(v) => v.to_string(),
            DecodedValue::Float(v) => v.to_string(),
            DecodedValue::Double(v) => v.to_string(),
            DecodedValue::String(s) => s.clone(),
            DecodedValue::Bytes(_) | DecodedValue::Message(_) => String::new(),
        }
    }
}

/// Mapping from semantic field name to the values decoded for it, in wire order.
///
/// Every field is a sequence, singular fields included. Readers take the
/// first element and treat an empty sequence as "absent".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DecodedMessage {
    fields: BTreeMap<String, Vec<DecodedValue>>,
}

impl DecodedMessage {
    pub const fn new() -> Self {
        Self { fields: BTreeMap::new() }
    }

    /// Append a value to the sequence stored under `name`.
    pub fn push(&mut self, name: &str, value: DecodedValue) {
        match self.fields.get_mut(name) {
            Some(values) => values.push(value),
            None => {
                self.fields.insert(name.to_string(), vec![value]);
            }
        }
    }

    /// Builder-style [`push`](Self::push), handy for assembling fixtures.
    pub fn with(mut self, name: &str, value: DecodedValue) -> Self {
        self.push(name, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of distinct field names present.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// All values decoded under `name`; empty when the field never appeared.
    pub fn values(&self, name: &str) -> &[DecodedValue] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn first(&self, name: &str) -> Option<&DecodedValue> {
        self.values(name).first()
    }

    pub fn first_u64(&self, name: &str) -> Option<u64> {
        self.first(name).and_then(DecodedValue::as_u64)
    }

    pub fn first_i64(&self, name: &str) -> Option<i64> {
        self.first(name).and_then(DecodedValue::as_i64)
    }

    pub fn first_f64(&self, name: &str) -> Option<f64> {
        self.first(name).and_then(DecodedValue::as_f64)
    }

    pub fn first_str(&self, name: &str) -> Option<&str> {
        self.first(name).and_then(DecodedValue::as_str)
    }

    pub fn first_message(&self, name: &str) -> Option<&DecodedMessage> {
        self.first(name).and_then(DecodedValue::as_message)
    }

    /// Walk a chain of nested messages, taking the first at each step.
    ///
    /// Any missing link yields an empty message, so lookups on the result
    /// simply report absence.
    pub fn message(&self, path: &[&str]) -> &DecodedMessage {
        let mut current = self;
        for name in path {
            match current.first_message(name) {
                Some(next) => current = next,
                None => return &EMPTY_MESSAGE,
            }
        }
        current
    }

    /// Every nested message decoded under `name`, in wire order.
    pub fn messages<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a DecodedMessage> + 'a {
        self.values(name).iter().filter_map(DecodedValue::as_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DecodedMessage {
        let time = DecodedMessage::new()
            .with("hour", DecodedValue::Uint32(7))
            .with("minute", DecodedValue::Uint32(30));
        let start = DecodedMessage::new().with("time", DecodedValue::Message(time));
        DecodedMessage::new()
            .with("start", DecodedValue::Message(start))
            .with("heartrate", DecodedValue::Uint32(120))
            .with("heartrate", DecodedValue::Uint32(121))
            .with("altitude", DecodedValue::Sint32(-12))
            .with("speed", DecodedValue::Float(2.5))
    }

    #[test]
    fn repeated_values_keep_wire_order() {
        let message = sample();
        let values: Vec<u64> =
            message.values("heartrate").iter().filter_map(|v| v.as_u64()).collect();
        assert_eq!(values, vec![120, 121]);
        assert_eq!(message.first_u64("heartrate"), Some(120));
    }

    #[test]
    fn absent_fields_read_as_none() {
        let message = sample();
        assert!(message.values("cadence").is_empty());
        assert_eq!(message.first_u64("cadence"), None);
        assert!(message.first_message("heartrate").is_none());
    }

    #[test]
    fn nested_lookup_falls_back_to_empty() {
        let message = sample();
        assert_eq!(message.message(&["start", "time"]).first_u64("minute"), Some(30));
        assert!(message.message(&["start", "date"]).is_empty());
        assert!(message.message(&["missing", "time"]).is_empty());
    }

    #[test]
    fn numeric_views_convert_between_kinds() {
        let message = sample();
        assert_eq!(message.first_i64("altitude"), Some(-12));
        assert_eq!(message.first_u64("altitude"), None);
        assert_eq!(message.first_f64("altitude"), Some(-12.0));
        assert_eq!(message.first_f64("speed"), Some(2.5));
        assert_eq!(message.first_u64("speed"), None);
    }

    #[test]
    fn text_rendering_is_shortest_round_trip() {
        assert_eq!(DecodedValue::Float(2.5).to_text(), "2.5");
        assert_eq!(DecodedValue::Double(-33.5).to_text(), "-33.5");
        assert_eq!(DecodedValue::Sint32(-4).to_text(), "-4");
        assert_eq!(DecodedValue::String("Park".into()).to_text(), "Park");
    }
}
